use crate::app::command::Command;
use crate::app::state::UserFetch;
use crate::domain::models::{Activity, Company, Person, RecordId, Route, TokenPair};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Command Menu ---
    OpenCommandMenu,                         // ctrl+k / super+k, never toggles
    CloseCommandMenu,                        // Explicit close or dialog close intent
    SearchInput(crossterm::event::KeyEvent), // Edit the search text
    CommandMenuNext,                         // Next highlighted item
    CommandMenuPrev,                         // Previous highlighted item
    CommandMenuSelect,                       // Select the highlighted item
    SelectMenuItem(usize),                   // Select by flat index (mouse)

    // --- Host Collaborators ---
    Navigate(Route),                 // Show the page for a route
    OpenActivitySidePanel(RecordId), // Open the drawer for a note
    CloseSidePanel,

    // --- Async Results ---
    // Each carries the search text it answers
    PeopleLoaded(String, Vec<Person>),
    CompaniesLoaded(String, Vec<Company>),
    ActivitiesLoaded(String, Vec<Activity>),
    SessionChanged,    // The token slot was written
    DataSourceChanged, // The backing workspace changed on disk
    // Fetch outcome, tagged with the tokens it was fetched for
    CurrentUserFetched(TokenPair, UserFetch),
    ErrorOccurred(String),
}
