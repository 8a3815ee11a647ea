use super::input::SearchField;
use crate::domain::models::{Activity, Company, Person};

/// Rows of one remote section, tagged with the search text they answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResults<T> {
    pub search: Option<String>,
    pub rows: Vec<T>,
}

impl<T> Default for SectionResults<T> {
    fn default() -> Self {
        Self {
            search: None,
            rows: Vec::new(),
        }
    }
}

impl<T> SectionResults<T> {
    /// Stores `rows` if they answer `current`; stale answers are dropped.
    pub fn accept(&mut self, current: &str, answered: String, rows: Vec<T>) -> bool {
        if answered != current {
            return false;
        }
        self.search = Some(answered);
        self.rows = rows;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandMenuState<'a> {
    pub search: SearchField<'a>,
    pub people: SectionResults<Person>,
    pub companies: SectionResults<Company>,
    pub activities: SectionResults<Activity>,
    pub selected_index: usize,
}

impl CommandMenuState<'_> {
    #[must_use]
    pub fn search_text(&self) -> String {
        self.search.text()
    }
}
