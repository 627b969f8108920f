use rotaview::records::{StockColumn, StockRecord};
use rotaview::table::Table;
use std::time::Instant;

fn create_stocks(count: usize) -> Vec<StockRecord> {
    (0..count)
        .map(|i| StockRecord {
            code: format!("AP{:05}", i),
            fc: (i * 7 % 500) as u32,
            bc: (i * 13 % 500) as u32,
            pe: (i * 17 % 500) as u32,
            ec: (i * 31 % 500) as u32,
        })
        .collect()
}

fn main() {
    println!("=== Table View Derivation Benchmark ===\n");

    for count in [1000, 10000, 50000] {
        let mut table = Table::new(create_stocks(count), 15).unwrap();
        table.set_search_text("ap0");
        table.toggle_sort(StockColumn::Ec);

        // One derivation per simulated keystroke / header click
        let frames = 60;
        let start = Instant::now();
        for frame in 0..frames {
            table.set_page(frame + 1);
            let _ = table.view();
        }
        let elapsed = start.elapsed();

        println!("{} records:", count);
        println!("  Total time for {} views: {:?}", frames, elapsed);
        println!("  Per view: {:?}", elapsed / frames as u32);
        println!();
    }
}
