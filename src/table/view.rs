use super::{SearchFilter, TableQueryState, Tabular, total_pages};

/// The visible page of a table plus the state needed to drive its controls
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_pages: usize,
    /// Requested page clamped into `[1, total_pages]`
    pub current_page: usize,
    /// Records left after filtering, across all pages
    pub filtered_count: usize,
}

impl<R> TableView<'_, R> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Filter, then stable-sort, then slice out the current page.
pub fn derive_view<'a, R: Tabular>(
    records: &'a [R],
    query: &TableQueryState<R::Column>,
) -> TableView<'a, R> {
    let filter = SearchFilter::new(query.search_text());
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| filter.matches(&record.search_key()))
        .collect();

    if let Some(column) = query.sort_column() {
        let direction = query.sort_direction();
        // sort_by is stable; reversing the comparator keeps ties in input order
        rows.sort_by(|a, b| direction.apply(a.cell(column).compare(&b.cell(column))));
    }

    let filtered_count = rows.len();
    let page_size = query.page_size();
    let total_pages = total_pages(filtered_count, page_size);
    let current_page = query.page().clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(filtered_count);
    rows.truncate(end);
    rows.drain(..start);

    TableView {
        rows,
        total_pages,
        current_page,
        filtered_count,
    }
}
