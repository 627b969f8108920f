use std::cmp::Ordering;
use std::num::NonZeroUsize;

use super::TableError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// `ceil(count / page_size)`, never less than one page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Search, sort and page position for one table.
///
/// The page number is 1-based and kept positive. Clamping against the
/// upper bound needs the filtered count, so callers pass `total_pages`
/// in; a derived view clamps again on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQueryState<C> {
    search_text: String,
    sort_column: Option<C>,
    sort_direction: SortDirection,
    page: usize,
    page_size: NonZeroUsize,
}

impl<C: Copy + PartialEq> TableQueryState<C> {
    pub fn new(page_size: usize) -> Result<Self, TableError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(TableError::ZeroPageSize)?;
        Ok(Self {
            search_text: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size,
        })
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_column(&self) -> Option<C> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// New search text always starts again from page 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Same column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, column: C) {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        let page = self.page;
        self.set_page(page, total_pages);
    }
}
