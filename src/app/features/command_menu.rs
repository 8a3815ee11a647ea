use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    menu::{build_sections, flatten, MenuTarget},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenCommandMenu => {
            // Open is idempotent: the chord never closes the menu
            if !state.shared.overlay_open.set(true) {
                return UpdateResult::Handled(None);
            }
            state.command_menu.selected_index = 0;
            tracing::debug!("command menu opened");
            UpdateResult::Handled(Some(Command::Search(state.command_menu.search_text())))
        }
        Action::CloseCommandMenu => {
            if state.shared.overlay_open.set(false) {
                tracing::debug!("command menu closed");
            }
            UpdateResult::Handled(None)
        }
        Action::SearchInput(key) => {
            if !state.is_command_menu_open() || !state.command_menu.search.input(*key) {
                return UpdateResult::Handled(None);
            }
            state.command_menu.selected_index = 0;
            UpdateResult::Handled(Some(Command::Search(state.command_menu.search_text())))
        }
        Action::CommandMenuNext => {
            let len = item_count(state);
            if len > 0 {
                state.command_menu.selected_index = (state.command_menu.selected_index + 1) % len;
            }
            UpdateResult::Handled(None)
        }
        Action::CommandMenuPrev => {
            let len = item_count(state);
            if len > 0 {
                let menu = &mut state.command_menu;
                menu.selected_index = if menu.selected_index == 0 {
                    len - 1
                } else {
                    menu.selected_index - 1
                };
            }
            UpdateResult::Handled(None)
        }
        Action::CommandMenuSelect => {
            let index = state.command_menu.selected_index;
            UpdateResult::Handled(select(state, index))
        }
        Action::SelectMenuItem(index) => UpdateResult::Handled(select(state, *index)),
        Action::PeopleLoaded(search, rows) => {
            let current = state.command_menu.search_text();
            if !state
                .command_menu
                .people
                .accept(&current, search.clone(), rows.clone())
            {
                tracing::debug!(%search, "dropping stale people results");
            }
            clamp_selection(state);
            UpdateResult::Handled(None)
        }
        Action::CompaniesLoaded(search, rows) => {
            let current = state.command_menu.search_text();
            if !state
                .command_menu
                .companies
                .accept(&current, search.clone(), rows.clone())
            {
                tracing::debug!(%search, "dropping stale company results");
            }
            clamp_selection(state);
            UpdateResult::Handled(None)
        }
        Action::ActivitiesLoaded(search, rows) => {
            let current = state.command_menu.search_text();
            if !state
                .command_menu
                .activities
                .accept(&current, search.clone(), rows.clone())
            {
                tracing::debug!(%search, "dropping stale note results");
            }
            clamp_selection(state);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn item_count(state: &AppState) -> usize {
    flatten(&build_sections(&state.command_menu, &state.logo_base_url)).len()
}

fn clamp_selection(state: &mut AppState) {
    let len = item_count(state);
    let menu = &mut state.command_menu;
    menu.selected_index = menu.selected_index.min(len.saturating_sub(1));
}

// Closes the menu, then hands the target to the navigation feature.
fn select(state: &mut AppState, index: usize) -> Option<Command> {
    if !state.is_command_menu_open() {
        return None;
    }
    let sections = build_sections(&state.command_menu, &state.logo_base_url);
    let target = flatten(&sections).get(index).map(|item| item.target.clone())?;

    state.shared.overlay_open.set(false);
    let follow_up = match target {
        MenuTarget::Navigate(route) => Action::Navigate(route),
        MenuTarget::OpenActivity(id) => Action::OpenActivitySidePanel(id),
    };
    match super::navigation::update(state, &follow_up) {
        UpdateResult::Handled(cmd) => cmd,
        UpdateResult::NotHandled => None,
    }
}
