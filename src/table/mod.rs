//! Generic filter → sort → paginate engine over typed record lists.
//!
//! A table is a pure function of its records and a [`TableQueryState`]:
//! [`derive_view`] recomputes the visible page from scratch on every call.
//! [`Table`] is a convenience owner for callers that want to keep the
//! records and the query state together.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

pub mod filter;
pub mod query_state;
pub mod view;

pub use filter::{SearchFilter, apply_filter};
pub use query_state::{SortDirection, TableQueryState, total_pages};
pub use view::{TableView, derive_view};

/// Page size used by the dashboard tables
pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A named, closed set of columns for one record shape
pub trait TableColumn: Copy + Eq + fmt::Debug + 'static {
    fn header(self) -> &'static str;
}

/// A record the engine can filter, sort and render
pub trait Tabular {
    type Column: TableColumn;

    /// Columns in display order
    const COLUMNS: &'static [Self::Column];

    /// Name/identifier the search text is matched against
    fn search_key(&self) -> Cow<'_, str>;

    fn cell(&self, column: Self::Column) -> Cell<'_>;
}

/// A typed cell value. Comparison is type-aware: ordinal for text,
/// numeric for counts, total order for amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Count(u64),
    Amount(f64),
}

impl Cell<'_> {
    pub fn compare(&self, other: &Cell<'_>) -> Ordering {
        match (self, other) {
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (Cell::Count(a), Cell::Count(b)) => a.cmp(b),
            (Cell::Amount(a), Cell::Amount(b)) => a.total_cmp(b),
            // Columns are homogeneous; keep a total order anyway.
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Numeric value for count cells
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Cell::Count(n) => Some(*n),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Cell::Count(_) => 0,
            Cell::Amount(_) => 1,
            Cell::Text(_) => 2,
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Amount(x) => write!(f, "{:.2}", x),
        }
    }
}

/// Look up a column by header name, ignoring ASCII case.
pub fn parse_column<R: Tabular>(name: &str) -> Option<R::Column> {
    R::COLUMNS
        .iter()
        .copied()
        .find(|column| column.header().eq_ignore_ascii_case(name))
}

/// Comma-separated header names, for error messages
pub fn column_names<R: Tabular>() -> String {
    R::COLUMNS
        .iter()
        .map(|column| column.header())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records plus the query state that views them
#[derive(Debug, Clone)]
pub struct Table<R: Tabular> {
    records: Vec<R>,
    query: TableQueryState<R::Column>,
}

impl<R: Tabular> Table<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Result<Self, TableError> {
        Ok(Self {
            records,
            query: TableQueryState::new(page_size)?,
        })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &TableQueryState<R::Column> {
        &self.query
    }

    /// Replace the full record list, pulling the page back into range.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        let total = self.total_pages();
        self.query.clamp_page(total);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
    }

    pub fn toggle_sort(&mut self, column: R::Column) {
        self.query.toggle_sort(column);
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.query.set_page(page, total);
    }

    pub fn total_pages(&self) -> usize {
        let filter = SearchFilter::new(self.query.search_text());
        let matching = self
            .records
            .iter()
            .filter(|record| filter.matches(&record.search_key()))
            .count();
        total_pages(matching, self.query.page_size())
    }

    pub fn view(&self) -> TableView<'_, R> {
        derive_view(&self.records, &self.query)
    }
}
