use crate::app::{action::Action, menu, state::AppState};
use crate::components::command_menu::{item_at, MenuLayout};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let menu_open = app_state.is_command_menu_open();
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, menu_open) {
                return Some(action);
            }
            // Everything else while the menu is open is typing
            menu_open.then_some(Action::SearchInput(key))
        }
        Event::Mouse(mouse) if menu_open => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                let sections = menu::build_sections(&app_state.command_menu, &app_state.logo_base_url);
                let rows = menu::rows(&sections);
                let layout = MenuLayout::new(area, rows.len());

                if !layout.contains(mouse.column, mouse.row) {
                    return Some(Action::CloseCommandMenu);
                }
                item_at(
                    &layout,
                    &rows,
                    app_state.command_menu.selected_index,
                    mouse.column,
                    mouse.row,
                )
                .map(Action::SelectMenuItem)
            }
            MouseEventKind::ScrollDown => Some(Action::CommandMenuNext),
            MouseEventKind::ScrollUp => Some(Action::CommandMenuPrev),
            _ => None,
        },
        _ => None,
    }
}
