use crate::domain::models::CurrentUser;

/// Outcome of the most recent current-user fetch.
///
/// The shared current-user slot only ever takes `Resolved` values; this
/// status is what tells a stale slot apart from a fresh one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserFetch {
    #[default]
    NoSession,
    Loading,
    Resolved(CurrentUser),
    Failed(String),
}

impl UserFetch {
    #[must_use]
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            UserFetch::Resolved(user) => Some(user),
            _ => None,
        }
    }
}
