use super::config::Config;
use super::features::session::UserProvider;
use super::keymap::KeyMap;
use super::shared::SharedState;
use crate::domain::logo::DEFAULT_LOGO_BASE_URL;
use crate::domain::models::{Activity, Route};
use std::sync::Arc;
use std::time::Instant;

pub mod command_menu;
pub mod error;
pub mod input;
pub mod session;

// Re-exports
pub use command_menu::{CommandMenuState, SectionResults};
pub use error::{ErrorSeverity, ErrorState};
pub use input::SearchField;
pub use session::UserFetch;

#[derive(Debug, Clone, PartialEq)]
pub struct SidePanelState {
    pub activity: Activity,
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Shared Slots ---
    pub shared: SharedState,

    // --- Command Menu ---
    pub command_menu: CommandMenuState<'a>,

    // --- Host ---
    pub location: Route,
    pub side_panel: Option<SidePanelState>,

    // --- Session ---
    pub user_fetch: UserFetch,
    pub user_provider: UserProvider,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
    pub logo_base_url: String,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, shared: SharedState) -> Self {
        Self {
            shared,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            logo_base_url: config.logo_base_url.clone(),
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_command_menu_open(&self) -> bool {
        self.shared.overlay_open.get()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            shared: SharedState::default(),
            command_menu: CommandMenuState::default(),
            location: Route::default(),
            side_panel: None,
            user_fetch: UserFetch::default(),
            user_provider: UserProvider::default(),
            keymap: Arc::new(KeyMap::default()),
            theme: crate::theme::Theme::default(),
            logo_base_url: DEFAULT_LOGO_BASE_URL.to_string(),
        }
    }
}
