use crate::app::state::AppState;
use crate::components::command_menu::CommandMenuModal;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::helpers::dim_area;
use crate::components::page::Page;
use crate::components::side_panel::SidePanel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub main: Vec<Rect>,
    pub body: Vec<Rect>,
}

pub fn get_layout(area: Rect, side_panel_open: bool) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if side_panel_open {
            [Constraint::Percentage(60), Constraint::Percentage(40)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(main[1])
        .to_vec();

    AppLayout { main, body }
}

fn has_area(area: Rect) -> bool {
    area.width > 0 && area.height > 0
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if !has_area(f.area()) {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(f.area(), app_state.side_panel.is_some());

    // --- Header ---
    if has_area(layout.main[0]) {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.main[0],
        );
    }

    // --- Page ---
    if has_area(layout.body[0]) {
        f.render_widget(
            Page {
                app_state,
                theme,
            },
            layout.body[0],
        );
    }

    // --- Side Panel ---
    if let Some(panel) = &app_state.side_panel {
        if has_area(layout.body[1]) {
            f.render_widget(
                SidePanel {
                    state: panel,
                    theme,
                },
                layout.body[1],
            );
        }
    }

    // --- Footer ---
    if has_area(layout.main[2]) {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.main[2],
        );
    }

    // --- Command Menu ---
    if app_state.is_command_menu_open() {
        let area = f.area();
        dim_area(f.buffer_mut(), area);
        f.render_widget(
            CommandMenuModal {
                state: app_state,
                theme,
            },
            area,
        );
    }
}
