use crate::domain::crm::CrmFacade;
use crate::domain::models::{Activity, Company, CurrentUser, Person, TokenPair};
use crate::domain::search::SearchQuery;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read workspace file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse workspace file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("workspace data lock poisoned")]
    Poisoned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub access_token: String,
    #[serde(flatten)]
    pub user: CurrentUser,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub people: Vec<Person>,
    pub companies: Vec<Company>,
    pub activities: Vec<Activity>,
    pub users: Vec<UserAccount>,
}

impl Workspace {
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DirectoryError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A `CrmFacade` answering searches from a TOML workspace file on disk.
pub struct LocalDirectory {
    path: Option<PathBuf>,
    workspace: RwLock<Workspace>,
}

impl LocalDirectory {
    /// Opens the workspace at `path`. A missing file yields an empty
    /// directory that picks up the file once it appears.
    pub fn open(path: PathBuf) -> Result<Self, DirectoryError> {
        let workspace = if path.exists() {
            Workspace::load(&path)?
        } else {
            tracing::warn!(path = %path.display(), "workspace file not found, starting empty");
            Workspace::default()
        };
        Ok(Self {
            path: Some(path),
            workspace: RwLock::new(workspace),
        })
    }

    #[must_use]
    pub fn in_memory(workspace: Workspace) -> Self {
        Self {
            path: None,
            workspace: RwLock::new(workspace),
        }
    }

    fn search<T: Clone>(
        &self,
        query: &SearchQuery,
        select: impl Fn(&Workspace) -> &Vec<T>,
        fields: impl Fn(&T) -> Vec<&str>,
    ) -> Result<Vec<T>, DirectoryError> {
        let workspace = self
            .workspace
            .read()
            .map_err(|_| DirectoryError::Poisoned)?;
        Ok(select(&*workspace)
            .iter()
            .filter(|record| query.matches_any(&fields(record)))
            .take(query.limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CrmFacade for LocalDirectory {
    async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Person>> {
        Ok(self.search(
            query,
            |w| &w.people,
            |p| vec![p.first_name.as_str(), p.last_name.as_str()],
        )?)
    }

    async fn search_companies(&self, query: &SearchQuery) -> Result<Vec<Company>> {
        Ok(self.search(query, |w| &w.companies, |c| vec![c.name.as_str()])?)
    }

    async fn search_activities(&self, query: &SearchQuery) -> Result<Vec<Activity>> {
        Ok(self.search(
            query,
            |w| &w.activities,
            |a| vec![a.title.as_deref().unwrap_or_default(), a.body.as_str()],
        )?)
    }

    async fn fetch_current_user(&self, tokens: &TokenPair) -> Result<Option<CurrentUser>> {
        let workspace = self
            .workspace
            .read()
            .map_err(|_| DirectoryError::Poisoned)?;
        Ok(workspace
            .users
            .iter()
            .find(|account| account.access_token == tokens.access_token)
            .map(|account| account.user.clone()))
    }

    async fn refresh(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let fresh = if path.exists() {
            Workspace::load(path)?
        } else {
            Workspace::default()
        };
        let mut workspace = self
            .workspace
            .write()
            .map_err(|_| DirectoryError::Poisoned)?;
        *workspace = fresh;
        tracing::info!(
            path = %path.display(),
            people = workspace.people.len(),
            companies = workspace.companies.len(),
            activities = workspace.activities.len(),
            "workspace reloaded"
        );
        Ok(())
    }

    fn source_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
