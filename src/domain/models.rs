use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A logical destination resolved by the host into a visible page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(pub String);

impl Route {
    #[must_use]
    pub fn person(id: &RecordId) -> Self {
        Self(format!("/person/{id}"))
    }

    #[must_use]
    pub fn company(id: &RecordId) -> Self {
        Self(format!("/companies/{id}"))
    }
}

impl Default for Route {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Person {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub domain_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Untitled notes render with an empty label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl CurrentUser {
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_display_name_trims_missing_parts() {
        let person = Person {
            id: "p1".into(),
            first_name: "Ada".to_string(),
            last_name: String::new(),
        };
        assert_eq!(person.display_name(), "Ada");
    }

    #[test]
    fn test_detail_routes() {
        let id = RecordId::from("42");
        assert_eq!(Route::person(&id).0, "/person/42");
        assert_eq!(Route::company(&id).0, "/companies/42");
    }

    #[test]
    fn test_current_user_falls_back_to_email() {
        let user = CurrentUser {
            id: "u1".into(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
