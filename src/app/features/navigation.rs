use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, SidePanelState},
};
use crate::domain::models::{RecordId, Route};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(route) => {
            navigate(state, route.clone());
            UpdateResult::Handled(None)
        }
        Action::OpenActivitySidePanel(id) => {
            open_activity(state, id);
            UpdateResult::Handled(None)
        }
        Action::CloseSidePanel => {
            state.side_panel = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn navigate(state: &mut AppState, route: Route) {
    tracing::info!(%route, "navigating");
    set_status(state, format!("Opened {route}"));
    state.location = route;
}

/// Opens the drawer for a note from the current search results.
fn open_activity(state: &mut AppState, id: &RecordId) {
    let found = state
        .command_menu
        .activities
        .rows
        .iter()
        .find(|activity| activity.id == *id)
        .cloned();
    match found {
        Some(activity) => {
            tracing::info!(activity = %id, "opening side panel");
            state.side_panel = Some(SidePanelState { activity });
        }
        None => tracing::warn!(activity = %id, "note is no longer in the results"),
    }
}

pub fn set_status(state: &mut AppState, message: String) {
    state.status_message = Some(message);
    state.status_clear_time = Some(Instant::now() + STATUS_TTL);
}

/// Drops the status message once its time is up.
pub fn expire_status(state: &mut AppState, now: Instant) {
    if state.status_clear_time.is_some_and(|t| now >= t) {
        state.status_message = None;
        state.status_clear_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Activity;

    #[test]
    fn test_navigate_sets_location_and_status() {
        let mut state = AppState::default();
        update(&mut state, &Action::Navigate(Route::from("/tasks")));
        assert_eq!(state.location, Route::from("/tasks"));
        assert_eq!(state.status_message.as_deref(), Some("Opened /tasks"));
    }

    #[test]
    fn test_open_unknown_activity_is_ignored() {
        let mut state = AppState::default();
        update(&mut state, &Action::OpenActivitySidePanel("missing".into()));
        assert!(state.side_panel.is_none());
    }

    #[test]
    fn test_close_side_panel() {
        let mut state = AppState::default();
        state.command_menu.activities.rows = vec![Activity {
            id: "a1".into(),
            ..Default::default()
        }];
        update(&mut state, &Action::OpenActivitySidePanel("a1".into()));
        assert!(state.side_panel.is_some());

        update(&mut state, &Action::CloseSidePanel);
        assert!(state.side_panel.is_none());
    }

    #[test]
    fn test_status_expires() {
        let mut state = AppState::default();
        set_status(&mut state, "hello".to_string());
        expire_status(&mut state, Instant::now());
        assert!(state.status_message.is_some());

        expire_status(&mut state, Instant::now() + STATUS_TTL * 2);
        assert!(state.status_message.is_none());
    }
}
