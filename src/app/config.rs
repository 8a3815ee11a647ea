use super::keymap::KeyConfig;
use crate::domain::logo::DEFAULT_LOGO_BASE_URL;
use crate::domain::models::TokenPair;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "ROLO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid key chord: {0:?}")]
    InvalidChord(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub logo_base_url: String,
    pub theme: PaletteType,
    pub session: Option<TokenPair>,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file: None,
            log_filter: None,
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
            theme: PaletteType::default(),
            session: None,
            keys: KeyConfig::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("rolo");
        path
    })
}

impl Config {
    /// Loads `$ROLO_CONFIG`, else `~/.config/rolo/config.toml`. A missing
    /// file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| config_dir().map(|dir| dir.join("config.toml")));
        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.keys.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .as_deref()
            .map(expand_home)
            .or_else(|| config_dir().map(|dir| dir.join("workspace.toml")))
            .unwrap_or_else(|| PathBuf::from("workspace.toml"))
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .as_deref()
            .map(expand_home)
            .or_else(|| config_dir().map(|dir| dir.join("rolo.log")))
            .unwrap_or_else(|| PathBuf::from("rolo.log"))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
