use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::table::{Cell, TableColumn, Tabular};

/// Rotable stock counts at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub code: String,
    #[serde(rename = "FC")]
    pub fc: u32,
    #[serde(rename = "BC")]
    pub bc: u32,
    #[serde(rename = "PE")]
    pub pe: u32,
    #[serde(rename = "EC")]
    pub ec: u32,
}

/// Quantity of each class loaded onto a flight before departure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadDecisionRecord {
    #[serde(rename = "flightId")]
    pub flight_id: String,
    #[serde(rename = "FC")]
    pub fc: u32,
    #[serde(rename = "BC")]
    pub bc: u32,
    #[serde(rename = "PE")]
    pub pe: u32,
    #[serde(rename = "EC")]
    pub ec: u32,
}

/// Per-class amounts, named the way the simulation backend prints them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAmounts {
    pub first: u32,
    pub business: u32,
    pub premium_economy: u32,
    pub economy: u32,
}

/// Kits consumed at the destination when a flight lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingRecord {
    #[serde(rename = "flightId")]
    pub flight_id: String,
    pub used: ClassAmounts,
    pub destination: String,
}

/// Cumulative cost reported at the end of one simulated hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundCostRecord {
    pub day: u32,
    pub hour: u32,
    pub cost: f64,
}

impl RoundCostRecord {
    /// `d:hh` label, the searchable identifier of a round
    pub fn label(&self) -> String {
        format!("{}:{:02}", self.day, self.hour)
    }
}

/// Last cumulative cost reported for a simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCost {
    pub day: u32,
    pub cost: f64,
}

// Column enums

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockColumn {
    Code,
    Fc,
    Bc,
    Pe,
    Ec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadColumn {
    FlightId,
    Fc,
    Bc,
    Pe,
    Ec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingColumn {
    FlightId,
    First,
    Business,
    PremiumEconomy,
    Economy,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundColumn {
    Day,
    Hour,
    Cost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyColumn {
    Day,
    Cost,
}

impl TableColumn for StockColumn {
    fn header(self) -> &'static str {
        match self {
            StockColumn::Code => "code",
            StockColumn::Fc => "FC",
            StockColumn::Bc => "BC",
            StockColumn::Pe => "PE",
            StockColumn::Ec => "EC",
        }
    }
}

impl TableColumn for LoadColumn {
    fn header(self) -> &'static str {
        match self {
            LoadColumn::FlightId => "flightId",
            LoadColumn::Fc => "FC",
            LoadColumn::Bc => "BC",
            LoadColumn::Pe => "PE",
            LoadColumn::Ec => "EC",
        }
    }
}

impl TableColumn for LandingColumn {
    fn header(self) -> &'static str {
        match self {
            LandingColumn::FlightId => "flightId",
            LandingColumn::First => "first",
            LandingColumn::Business => "business",
            LandingColumn::PremiumEconomy => "premium_economy",
            LandingColumn::Economy => "economy",
            LandingColumn::Destination => "destination",
        }
    }
}

impl TableColumn for RoundColumn {
    fn header(self) -> &'static str {
        match self {
            RoundColumn::Day => "day",
            RoundColumn::Hour => "hour",
            RoundColumn::Cost => "cost",
        }
    }
}

impl TableColumn for DailyColumn {
    fn header(self) -> &'static str {
        match self {
            DailyColumn::Day => "day",
            DailyColumn::Cost => "cost",
        }
    }
}

impl Tabular for StockRecord {
    type Column = StockColumn;

    const COLUMNS: &'static [StockColumn] = &[
        StockColumn::Code,
        StockColumn::Fc,
        StockColumn::Bc,
        StockColumn::Pe,
        StockColumn::Ec,
    ];

    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.code)
    }

    fn cell(&self, column: StockColumn) -> Cell<'_> {
        match column {
            StockColumn::Code => Cell::Text(&self.code),
            StockColumn::Fc => Cell::Count(self.fc.into()),
            StockColumn::Bc => Cell::Count(self.bc.into()),
            StockColumn::Pe => Cell::Count(self.pe.into()),
            StockColumn::Ec => Cell::Count(self.ec.into()),
        }
    }
}

impl Tabular for LoadDecisionRecord {
    type Column = LoadColumn;

    const COLUMNS: &'static [LoadColumn] = &[
        LoadColumn::FlightId,
        LoadColumn::Fc,
        LoadColumn::Bc,
        LoadColumn::Pe,
        LoadColumn::Ec,
    ];

    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.flight_id)
    }

    fn cell(&self, column: LoadColumn) -> Cell<'_> {
        match column {
            LoadColumn::FlightId => Cell::Text(&self.flight_id),
            LoadColumn::Fc => Cell::Count(self.fc.into()),
            LoadColumn::Bc => Cell::Count(self.bc.into()),
            LoadColumn::Pe => Cell::Count(self.pe.into()),
            LoadColumn::Ec => Cell::Count(self.ec.into()),
        }
    }
}

impl Tabular for LandingRecord {
    type Column = LandingColumn;

    const COLUMNS: &'static [LandingColumn] = &[
        LandingColumn::FlightId,
        LandingColumn::First,
        LandingColumn::Business,
        LandingColumn::PremiumEconomy,
        LandingColumn::Economy,
        LandingColumn::Destination,
    ];

    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.flight_id)
    }

    fn cell(&self, column: LandingColumn) -> Cell<'_> {
        match column {
            LandingColumn::FlightId => Cell::Text(&self.flight_id),
            LandingColumn::First => Cell::Count(self.used.first.into()),
            LandingColumn::Business => Cell::Count(self.used.business.into()),
            LandingColumn::PremiumEconomy => Cell::Count(self.used.premium_economy.into()),
            LandingColumn::Economy => Cell::Count(self.used.economy.into()),
            LandingColumn::Destination => Cell::Text(&self.destination),
        }
    }
}

impl Tabular for RoundCostRecord {
    type Column = RoundColumn;

    const COLUMNS: &'static [RoundColumn] =
        &[RoundColumn::Day, RoundColumn::Hour, RoundColumn::Cost];

    fn search_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.label())
    }

    fn cell(&self, column: RoundColumn) -> Cell<'_> {
        match column {
            RoundColumn::Day => Cell::Count(self.day.into()),
            RoundColumn::Hour => Cell::Count(self.hour.into()),
            RoundColumn::Cost => Cell::Amount(self.cost),
        }
    }
}

impl Tabular for DailyCost {
    type Column = DailyColumn;

    const COLUMNS: &'static [DailyColumn] = &[DailyColumn::Day, DailyColumn::Cost];

    fn search_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.day.to_string())
    }

    fn cell(&self, column: DailyColumn) -> Cell<'_> {
        match column {
            DailyColumn::Day => Cell::Count(self.day.into()),
            DailyColumn::Cost => Cell::Amount(self.cost),
        }
    }
}

/// Visual band of a count, for renderers that highlight low/high stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Band boundaries: below `low` is Low, at or above `high` is High
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub low: u64,
    pub high: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 50, high: 150 }
    }
}

pub fn classify(value: u64, thresholds: &Thresholds) -> Level {
    if value < thresholds.low {
        Level::Low
    } else if value >= thresholds.high {
        Level::High
    } else {
        Level::Medium
    }
}
