/// Every remote section asks for at most this many rows.
pub const SEARCH_RESULT_LIMIT: usize = 3;

/// A case-insensitive "contains" filter applied with OR semantics over
/// the fields a backend searches for a given record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: SEARCH_RESULT_LIMIT,
        }
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.text.to_lowercase())
    }

    #[must_use]
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.contains(field))
    }
}
