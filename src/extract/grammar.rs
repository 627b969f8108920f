//! One grammar per transcript line shape.
//!
//! Each grammar has a cheap keyword pattern, used to decide whether a line is
//! a candidate at all, and a full shape pattern whose captures are validated
//! field by field. A candidate that fails the shape or a field check yields
//! nothing.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::records::{
    ClassAmounts, LandingRecord, LoadDecisionRecord, RoundCostRecord, StockRecord,
};

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

// STOCK[YCCY]  FC=57   BC=93   PE=103  EC=174
static STOCK_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSTOCK\s*\[").unwrap());

static STOCK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bSTOCK\s*\[([A-Za-z0-9_]+)\]\s+FC=(\S*)\s+BC=(\S*)\s+PE=(\S*)\s+EC=(\S*)",
    )
    .unwrap()
});

// LOAD  Flight=<uuid>  FC=4   BC=13  PE=14  EC=111
static LOAD_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bLOAD\s+Flight=").unwrap());

static LOAD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bLOAD\s+Flight=(\S*)\s+FC=(\S*)\s+BC=(\S*)\s+PE=(\S*)\s+EC=(\S*)").unwrap()
});

// LANDING  Flight=<uuid>  Used=PerClassAmount(first=2, business=1, premium_economy=2, economy=57) -> FQCG
static LANDING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bLANDING\s+Flight=").unwrap());

static LANDING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\bLANDING\s+Flight=(\S*)\s+Used=\w*\(\s*",
        r"first=([^,\s)]*)\s*,\s*",
        r"business=([^,\s)]*)\s*,\s*",
        r"premium_economy=([^,\s)]*)\s*,\s*",
        r"economy=([^,\s)]*)\s*\)",
        r"\s*(?:->|=>|→)\s*([A-Za-z0-9_]+)(?:\s|$)",
    ))
    .unwrap()
});

// [ROUND] 0:05 cost=1234.56
static ROUND_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[ROUND\]").unwrap());

static ROUND_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[ROUND\]\s+(\S+?):(\S+?)\s+cost=(\S*)").unwrap()
});

/// A line shape that produces one record per full match
pub trait LineGrammar {
    type Record;

    /// Short name used in diagnostics
    const NAME: &'static str;

    fn keyword() -> &'static Regex;
    fn shape() -> &'static Regex;
    fn build(caps: &Captures<'_>) -> Option<Self::Record>;
}

pub struct StockGrammar;
pub struct LoadGrammar;
pub struct LandingGrammar;
pub struct RoundGrammar;

impl LineGrammar for StockGrammar {
    type Record = StockRecord;
    const NAME: &'static str = "stock";

    fn keyword() -> &'static Regex {
        &STOCK_KEYWORD
    }

    fn shape() -> &'static Regex {
        &STOCK_LINE
    }

    fn build(caps: &Captures<'_>) -> Option<StockRecord> {
        Some(StockRecord {
            code: caps[1].to_string(),
            fc: parse_count(&caps[2])?,
            bc: parse_count(&caps[3])?,
            pe: parse_count(&caps[4])?,
            ec: parse_count(&caps[5])?,
        })
    }
}

impl LineGrammar for LoadGrammar {
    type Record = LoadDecisionRecord;
    const NAME: &'static str = "load";

    fn keyword() -> &'static Regex {
        &LOAD_KEYWORD
    }

    fn shape() -> &'static Regex {
        &LOAD_LINE
    }

    fn build(caps: &Captures<'_>) -> Option<LoadDecisionRecord> {
        Some(LoadDecisionRecord {
            flight_id: parse_flight_id(&caps[1])?,
            fc: parse_count(&caps[2])?,
            bc: parse_count(&caps[3])?,
            pe: parse_count(&caps[4])?,
            ec: parse_count(&caps[5])?,
        })
    }
}

impl LineGrammar for LandingGrammar {
    type Record = LandingRecord;
    const NAME: &'static str = "landing";

    fn keyword() -> &'static Regex {
        &LANDING_KEYWORD
    }

    fn shape() -> &'static Regex {
        &LANDING_LINE
    }

    fn build(caps: &Captures<'_>) -> Option<LandingRecord> {
        Some(LandingRecord {
            flight_id: parse_flight_id(&caps[1])?,
            used: ClassAmounts {
                first: parse_count(&caps[2])?,
                business: parse_count(&caps[3])?,
                premium_economy: parse_count(&caps[4])?,
                economy: parse_count(&caps[5])?,
            },
            destination: caps[6].to_string(),
        })
    }
}

impl LineGrammar for RoundGrammar {
    type Record = RoundCostRecord;
    const NAME: &'static str = "round";

    fn keyword() -> &'static Regex {
        &ROUND_KEYWORD
    }

    fn shape() -> &'static Regex {
        &ROUND_LINE
    }

    fn build(caps: &Captures<'_>) -> Option<RoundCostRecord> {
        Some(RoundCostRecord {
            day: parse_count(&caps[1])?,
            hour: parse_count(&caps[2])?,
            cost: parse_cost(&caps[3])?,
        })
    }
}

/// Digits only: no sign, no decimal point, must fit in u32.
pub fn parse_count(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Non-negative decimal as Python prints floats: `12`, `12.5`, `1.5e+16`.
pub fn parse_cost(s: &str) -> Option<f64> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let mut parts = mantissa.splitn(2, '.');
    let whole = parts.next()?;
    let fraction = parts.next();
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || fraction.is_some_and(|f| !digits(f)) {
        return None;
    }
    if exponent.is_some_and(|e| !digits(e.strip_prefix(['+', '-']).unwrap_or(e))) {
        return None;
    }
    s.parse().ok().filter(|v: &f64| v.is_finite())
}

pub fn is_flight_id(s: &str) -> bool {
    UUID_REGEX.is_match(s)
}

fn parse_flight_id(s: &str) -> Option<String> {
    is_flight_id(s).then(|| s.to_string())
}

/// Run one grammar over a line, appending every record it yields.
/// Returns how many keyword candidates produced no record.
pub fn scan<G: LineGrammar>(line: &str, out: &mut Vec<G::Record>) -> usize {
    let candidates = G::keyword().find_iter(line).count();
    if candidates == 0 {
        return 0;
    }

    let before = out.len();
    out.extend(
        G::shape()
            .captures_iter(line)
            .filter_map(|caps| G::build(&caps)),
    );
    let produced = out.len() - before;

    let dropped = candidates.saturating_sub(produced);
    if dropped > 0 {
        tracing::trace!(grammar = G::NAME, line, dropped, "skipping malformed entry");
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIGHT: &str = "835f46d4-aa03-4a31-8ba5-3bdcf63b1252";

    fn stocks(line: &str) -> Vec<StockRecord> {
        let mut out = Vec::new();
        scan::<StockGrammar>(line, &mut out);
        out
    }

    fn loads(line: &str) -> Vec<LoadDecisionRecord> {
        let mut out = Vec::new();
        scan::<LoadGrammar>(line, &mut out);
        out
    }

    fn landings(line: &str) -> Vec<LandingRecord> {
        let mut out = Vec::new();
        scan::<LandingGrammar>(line, &mut out);
        out
    }

    fn rounds(line: &str) -> Vec<RoundCostRecord> {
        let mut out = Vec::new();
        scan::<RoundGrammar>(line, &mut out);
        out
    }

    #[test]
    fn test_parse_count_digits_only() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("174"), Some(174));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("+3"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count("12abc"), None);
        assert_eq!(parse_count("99999999999"), None);
    }

    #[test]
    fn test_parse_cost_decimals() {
        assert_eq!(parse_cost("12"), Some(12.0));
        assert_eq!(parse_cost("12.5"), Some(12.5));
        assert_eq!(parse_cost("-1"), None);
        assert_eq!(parse_cost("inf"), None);
        assert_eq!(parse_cost("1."), None);
        assert_eq!(parse_cost(".5"), None);
    }

    #[test]
    fn test_parse_cost_exponent_form() {
        assert_eq!(parse_cost("1.5e+16"), Some(1.5e16));
        assert_eq!(parse_cost("2E-05"), Some(2e-5));
        assert_eq!(parse_cost("3e7"), Some(3e7));
        assert_eq!(parse_cost("1e400"), None);
        assert_eq!(parse_cost("1e"), None);
        assert_eq!(parse_cost("1e+"), None);
        assert_eq!(parse_cost("e5"), None);
        assert_eq!(parse_cost("1.5e+1.6"), None);
    }

    #[test]
    fn test_flight_id_shape() {
        assert!(is_flight_id(FLIGHT));
        assert!(is_flight_id("835F46D4-AA03-4A31-8BA5-3BDCF63B1252"));
        assert!(!is_flight_id("835f46d4-aa03-4a31-8ba5"));
        assert!(!is_flight_id("835f46d4aa034a318ba53bdcf63b1252"));
        assert!(!is_flight_id("zzzf46d4-aa03-4a31-8ba5-3bdcf63b1252"));
    }

    #[test]
    fn test_stock_padded_columns() {
        let out = stocks("STOCK[YCCY]  FC=57   BC=93   PE=103  EC=174 ");
        assert_eq!(
            out,
            vec![StockRecord {
                code: "YCCY".to_string(),
                fc: 57,
                bc: 93,
                pe: 103,
                ec: 174,
            }]
        );
    }

    #[test]
    fn test_stock_keyword_is_case_insensitive() {
        let out = stocks("stock[hub_1] fc=1 bc=2 pe=3 ec=4");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "hub_1");
    }

    #[test]
    fn test_stock_missing_field_yields_nothing() {
        let mut out = Vec::new();
        let dropped = scan::<StockGrammar>("STOCK[YCCY] FC=57 BC=93 EC=174", &mut out);
        assert!(out.is_empty());
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_stock_fields_out_of_order_yield_nothing() {
        assert!(stocks("STOCK[YCCY] BC=93 FC=57 PE=103 EC=174").is_empty());
    }

    #[test]
    fn test_stock_non_numeric_value_yields_nothing() {
        assert!(stocks("STOCK[YCCY] FC=57 BC=lots PE=103 EC=174").is_empty());
        assert!(stocks("STOCK[YCCY] FC=57 BC=93 PE=103 EC=17x").is_empty());
    }

    #[test]
    fn test_two_stock_tokens_on_one_line() {
        let out = stocks("STOCK[A] FC=1 BC=1 PE=1 EC=1 STOCK[B] FC=2 BC=2 PE=2 EC=2");
        let codes: Vec<_> = out.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_load_line() {
        let out = loads(&format!("LOAD  Flight={}  FC=4   BC=13  PE=14  EC=111", FLIGHT));
        assert_eq!(
            out,
            vec![LoadDecisionRecord {
                flight_id: FLIGHT.to_string(),
                fc: 4,
                bc: 13,
                pe: 14,
                ec: 111,
            }]
        );
    }

    #[test]
    fn test_load_malformed_uuid_yields_nothing() {
        assert!(loads("LOAD Flight=not-a-uuid FC=1 BC=2 PE=3 EC=4").is_empty());
    }

    #[test]
    fn test_load_header_is_not_a_candidate() {
        let mut out = Vec::new();
        assert_eq!(scan::<LoadGrammar>("--- LOAD DECISIONS ---", &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_landing_line_with_arrow() {
        let line = format!(
            "LANDING  Flight={}  Used=PerClassAmount(first=2, business=1, premium_economy=2, economy=57) -> FQCG",
            FLIGHT
        );
        let out = landings(&line);
        assert_eq!(
            out,
            vec![LandingRecord {
                flight_id: FLIGHT.to_string(),
                used: ClassAmounts {
                    first: 2,
                    business: 1,
                    premium_economy: 2,
                    economy: 57,
                },
                destination: "FQCG".to_string(),
            }]
        );
    }

    #[test]
    fn test_landing_accepts_unicode_arrow_and_bare_parens() {
        let line = format!(
            "LANDING Flight={} Used=(first=0, business=0, premium_economy=0, economy=1) → GEJJ",
            FLIGHT
        );
        let out = landings(&line);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].destination, "GEJJ");
    }

    #[test]
    fn test_landing_without_destination_yields_nothing() {
        let line = format!(
            "LANDING Flight={} Used=PerClassAmount(first=2, business=1, premium_economy=2, economy=57)",
            FLIGHT
        );
        assert!(landings(&line).is_empty());
    }

    #[test]
    fn test_landing_sub_fields_out_of_order_yield_nothing() {
        let line = format!(
            "LANDING Flight={} Used=PerClassAmount(business=1, first=2, premium_economy=2, economy=57) -> FQCG",
            FLIGHT
        );
        assert!(landings(&line).is_empty());
    }

    #[test]
    fn test_round_line() {
        let out = rounds("[ROUND] 2:07 cost=1234.50000000000000");
        assert_eq!(
            out,
            vec![RoundCostRecord {
                day: 2,
                hour: 7,
                cost: 1234.5,
            }]
        );
    }

    #[test]
    fn test_round_with_bad_cost_yields_nothing() {
        assert!(rounds("[ROUND] 2:07 cost=nan").is_empty());
        assert!(rounds("[ROUND] x:07 cost=1").is_empty());
    }

    #[test]
    fn test_round_with_large_cost_in_exponent_form() {
        let out = rounds("[ROUND] 29:23 cost=1.5234e+16");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].cost, 1.5234e16);
    }
}
