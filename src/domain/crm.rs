use crate::domain::models::{Activity, Company, CurrentUser, Person, TokenPair};
use crate::domain::search::SearchQuery;
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmFacade: Send + Sync {
    // OR over first and last name
    async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Person>>;

    async fn search_companies(&self, query: &SearchQuery) -> Result<Vec<Company>>;

    // OR over title and body
    async fn search_activities(&self, query: &SearchQuery) -> Result<Vec<Activity>>;

    // Ok(None) means the token pair does not belong to any session
    async fn fetch_current_user(&self, tokens: &TokenPair) -> Result<Option<CurrentUser>>;

    // Re-read the backing data after an external change
    async fn refresh(&self) -> Result<()>;

    fn source_path(&self) -> Option<std::path::PathBuf>;
}
