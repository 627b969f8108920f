#![allow(dead_code)]

use rotaview::records::{ClassAmounts, LandingRecord, LoadDecisionRecord, StockRecord};

pub const FLIGHT_A: &str = "835f46d4-aa03-4a31-8ba5-3bdcf63b1252";
pub const FLIGHT_B: &str = "79b3a28a-6d4d-4db8-ad41-69a64e536cae";
pub const FLIGHT_C: &str = "88105f49-fef3-424a-8003-1894a0f4bdb0";

/// Helper to create a stock record with the same count in every class
pub fn create_stock(code: &str, count: u32) -> StockRecord {
    StockRecord {
        code: code.to_string(),
        fc: count,
        bc: count,
        pe: count,
        ec: count,
    }
}

pub fn create_load(flight_id: &str, fc: u32, bc: u32, pe: u32, ec: u32) -> LoadDecisionRecord {
    LoadDecisionRecord {
        flight_id: flight_id.to_string(),
        fc,
        bc,
        pe,
        ec,
    }
}

pub fn create_landing(flight_id: &str, used: [u32; 4], destination: &str) -> LandingRecord {
    LandingRecord {
        flight_id: flight_id.to_string(),
        used: ClassAmounts {
            first: used[0],
            business: used[1],
            premium_economy: used[2],
            economy: used[3],
        },
        destination: destination.to_string(),
    }
}

/// `count` stocks named S01, S02, ... with FC equal to their index
pub fn create_numbered_stocks(count: u32) -> Vec<StockRecord> {
    (1..=count)
        .map(|i| StockRecord {
            code: format!("S{:02}", i),
            fc: i,
            bc: 0,
            pe: 0,
            ec: 0,
        })
        .collect()
}

pub fn codes(rows: &[&StockRecord]) -> Vec<String> {
    rows.iter().map(|s| s.code.clone()).collect()
}

/// One hour of simulation output, shaped the way the backend prints it
pub fn sample_transcript() -> String {
    format!(
        "\
=== ROTABLES ENGINE START ===

[INFO] Starting or resuming session...

==============================
⏰ DEBUG DAY 0 HOUR 00
==============================
STOCK[YCCY]  FC=57   BC=93   PE=103  EC=174
STOCK[DHXR]  FC=96   BC=17   PE=48   EC=282

--- LOAD DECISIONS ---
LOAD  Flight={a}  FC=4   BC=13  PE=14  EC=111

--- PURCHASING ---
PerClassAmount(first=0, business=0, premium_economy=0, economy=0)

--- LANDINGS ---
LANDING  Flight={c}  Used=PerClassAmount(first=2, business=1, premium_economy=2, economy=57) -> FQCG

[ROUND] 0:00 cost=1520.50000000000000
",
        a = FLIGHT_A,
        c = FLIGHT_C,
    )
}
