// Library exports for rotaview
// The binary, the benches and the test suite all import through here

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod records;
pub mod render;
pub mod table;

pub use extract::{Extraction, extract};
pub use table::{Table, TableQueryState, TableView, derive_view};
