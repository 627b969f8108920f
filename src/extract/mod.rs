//! Turns a simulation transcript into typed records.
//!
//! Extraction never fails: lines that match no grammar are noise, and a line
//! that looks like a record but does not fit its grammar is dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

pub mod grammar;

use crate::records::{DailyCost, LandingRecord, LoadDecisionRecord, RoundCostRecord, StockRecord};
use grammar::{LandingGrammar, LoadGrammar, RoundGrammar, StockGrammar, is_flight_id, scan};

/// Records found in one transcript, each list in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default)]
    pub stocks: Vec<StockRecord>,
    #[serde(default)]
    pub loads: Vec<LoadDecisionRecord>,
    #[serde(default)]
    pub landings: Vec<LandingRecord>,
    #[serde(default)]
    pub rounds: Vec<RoundCostRecord>,
}

/// Structured output before each record is checked on its own
#[derive(Debug, Default, Deserialize)]
struct RawExtraction {
    #[serde(default)]
    stocks: Vec<Value>,
    #[serde(default)]
    loads: Vec<Value>,
    #[serde(default)]
    landings: Vec<Value>,
    #[serde(default)]
    rounds: Vec<Value>,
}

impl RawExtraction {
    fn len(&self) -> usize {
        self.stocks.len() + self.loads.len() + self.landings.len() + self.rounds.len()
    }
}

/// Keep the records that deserialize; a bad field drops only its record.
fn typed<R: DeserializeOwned>(values: Vec<Value>) -> Vec<R> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

/// Scan every line of `text` against every grammar.
pub fn extract(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut dropped = 0;

    for raw in text.lines() {
        let line = clean_line(raw);
        dropped += scan::<StockGrammar>(&line, &mut extraction.stocks);
        dropped += scan::<LoadGrammar>(&line, &mut extraction.loads);
        dropped += scan::<LandingGrammar>(&line, &mut extraction.landings);
        dropped += scan::<RoundGrammar>(&line, &mut extraction.rounds);
    }

    debug!(
        stocks = extraction.stocks.len(),
        loads = extraction.loads.len(),
        landings = extraction.landings.len(),
        rounds = extraction.rounds.len(),
        dropped,
        "extracted transcript"
    );
    extraction
}

/// Strip ANSI escapes; plain lines are borrowed as-is.
fn clean_line(line: &str) -> Cow<'_, str> {
    if line.contains('\x1b') {
        Cow::Owned(strip_ansi_escapes::strip_str(line))
    } else {
        Cow::Borrowed(line)
    }
}

impl Extraction {
    /// Accept either structured JSON (leading `{`) or a raw transcript.
    pub fn parse(input: &str) -> Result<Self, serde_json::Error> {
        if input.trim_start().starts_with('{') {
            Self::from_json(input)
        } else {
            Ok(extract(input))
        }
    }

    /// Structured backend output. Only a document that is not an object of
    /// record lists is an error. Records with a missing or malformed field,
    /// a bad flight id, or a negative cost are dropped, as a transcript line
    /// would be.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawExtraction = serde_json::from_str(json)?;
        let before = raw.len();

        let mut extraction = Extraction {
            stocks: typed(raw.stocks),
            loads: typed(raw.loads),
            landings: typed(raw.landings),
            rounds: typed(raw.rounds),
        };
        extraction.loads.retain(|load| is_flight_id(&load.flight_id));
        extraction.landings.retain(|landing| is_flight_id(&landing.flight_id));
        extraction
            .rounds
            .retain(|round| round.cost.is_finite() && round.cost >= 0.0);

        debug!(dropped = before - extraction.len(), "loaded structured output");
        Ok(extraction)
    }

    /// Total number of records across all lists
    pub fn len(&self) -> usize {
        self.stocks.len() + self.loads.len() + self.landings.len() + self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last cumulative cost reported for each day, in first-seen day order
    pub fn daily_costs(&self) -> Vec<DailyCost> {
        let mut days: Vec<DailyCost> = Vec::new();
        for round in &self.rounds {
            match days.iter_mut().find(|d| d.day == round.day) {
                Some(existing) => existing.cost = round.cost,
                None => days.push(DailyCost {
                    day: round.day,
                    cost: round.cost,
                }),
            }
        }
        days
    }
}
