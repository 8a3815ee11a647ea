use crate::domain::models::TokenPair;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Fan out the three section searches for this text
    Search(String),
    FetchCurrentUser(TokenPair),
    // Reload the data source, then search again if the menu is open
    Reload(Option<String>),
}
