use super::{
    action::{Action, UpdateResult},
    command::Command,
    features::{command_menu, navigation, session},
    state::{AppState, ErrorSeverity, ErrorState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let UpdateResult::Handled(cmd) = command_menu::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = navigation::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = session::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Tick => {
            navigation::expire_status(state, Instant::now());
        }
        Action::Quit => {
            state.should_quit = true;
        }
        Action::DataSourceChanged => {
            let search = state
                .is_command_menu_open()
                .then(|| state.command_menu.search_text());
            return Some(Command::Reload(search));
        }
        Action::ErrorOccurred(message) => {
            tracing::error!(%message, "error reported");
            state.last_error = Some(ErrorState::new(message, ErrorSeverity::Error));
        }
        _ => {}
    }
    None
}
