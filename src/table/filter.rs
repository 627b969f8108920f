use super::Tabular;

/// Case-insensitive substring filter on a record's search key
#[derive(Debug, Clone)]
pub struct SearchFilter {
    /// Pre-computed lowercase pattern (avoids allocation per match)
    pattern_lowercase: String,
}

impl SearchFilter {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern_lowercase: pattern.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_lowercase.is_empty()
    }

    pub fn matches(&self, key: &str) -> bool {
        self.is_empty() || key.to_lowercase().contains(&self.pattern_lowercase)
    }
}

/// Keep records whose search key contains `text`, preserving order.
pub fn apply_filter<'a, R, I>(records: I, text: &str) -> Vec<&'a R>
where
    R: Tabular + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let filter = SearchFilter::new(text);
    records
        .into_iter()
        .filter(|record| filter.matches(&record.search_key()))
        .collect()
}
