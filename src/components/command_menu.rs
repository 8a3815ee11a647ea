use super::helpers::{avatar_badge, centered_rect_fixed_height, draw_drop_shadow};
use crate::app::menu::{self, MenuIcon, MenuItem, MenuRow, EMPTY_STATE};
use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

pub const MAX_LIST_ROWS: usize = 12;

/// Where the menu's parts land for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub modal: Rect,
    pub input: Rect,
    pub list: Rect,
}

impl MenuLayout {
    #[must_use]
    pub fn new(area: Rect, row_count: usize) -> Self {
        let list_rows = row_count.clamp(1, MAX_LIST_ROWS) as u16;
        // Borders, input line and separator
        let modal = centered_rect_fixed_height(60, list_rows + 4, area);
        let inner = modal.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
        Self {
            modal,
            input: chunks[0],
            list: chunks[2],
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.modal.contains(Position::new(column, row))
    }
}

/// First visible row, chosen so the highlighted item stays in view.
#[must_use]
pub fn scroll_offset(rows: &[MenuRow], selected: usize, height: usize) -> usize {
    rows.iter()
        .position(|r| *r == MenuRow::Item(selected))
        .map_or(0, |pos| (pos + 1).saturating_sub(height))
}

/// The item under a click, if any.
#[must_use]
pub fn item_at(
    layout: &MenuLayout,
    rows: &[MenuRow],
    selected: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !layout.list.contains(Position::new(column, row)) {
        return None;
    }
    let offset = scroll_offset(rows, selected, layout.list.height as usize);
    match rows.get(offset + (row - layout.list.y) as usize) {
        Some(MenuRow::Item(index)) => Some(*index),
        _ => None,
    }
}

pub struct CommandMenuModal<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl CommandMenuModal<'_> {
    fn item_line<'b>(&self, item: &'b MenuItem, selected: bool) -> Line<'b> {
        let theme = self.theme;
        let style = if selected {
            theme.list_selected
        } else {
            theme.list_item
        };

        let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, style)];
        match &item.icon {
            MenuIcon::None => {}
            MenuIcon::Avatar {
                placeholder,
                color_seed,
                ..
            } => {
                spans.push(avatar_badge(placeholder, color_seed, theme));
                spans.push(Span::raw(" "));
            }
            MenuIcon::Notes => spans.push(Span::styled("≡ ", theme.dimmed)),
        }
        spans.push(Span::styled(item.label.as_str(), style));
        for shortcut in &item.shortcuts {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {shortcut} "), theme.shortcut));
        }
        Line::from(spans)
    }
}

impl Widget for CommandMenuModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let menu_state = &self.state.command_menu;
        let sections = menu::build_sections(menu_state, &self.state.logo_base_url);
        let rows = menu::rows(&sections);
        let items = menu::flatten(&sections);

        let layout = MenuLayout::new(area, rows.len());
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let mut block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEARCH ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        // Logo source for the highlighted company
        if let Some(MenuIcon::Avatar {
            image_url: Some(url),
            ..
        }) = items.get(menu_state.selected_index).map(|item| &item.icon)
        {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {url} "),
                self.theme.dimmed,
            )));
        }
        block.render(layout.modal, buf);

        // Query line
        let [prompt_area, field_area] =
            Layout::horizontal([Constraint::Length(3), Constraint::Min(0)]).areas(layout.input);
        buf.set_string(prompt_area.x, prompt_area.y, " > ", self.theme.footer_key);
        (&menu_state.search).render(field_area, buf);

        let separator_y = layout.input.y + 1;
        if separator_y < layout.list.y {
            buf.set_string(
                layout.input.x,
                separator_y,
                "─".repeat(layout.input.width as usize),
                self.theme.border,
            );
        }

        let height = layout.list.height as usize;
        let offset = scroll_offset(&rows, menu_state.selected_index, height);
        for (i, row) in rows.iter().skip(offset).take(height).enumerate() {
            let y = layout.list.y + i as u16;
            let line = match row {
                MenuRow::Heading(kind) => {
                    Line::from(Span::styled(kind.heading(), self.theme.section_heading))
                }
                MenuRow::Item(index) => match items.get(*index) {
                    Some(item) => self.item_line(item, *index == menu_state.selected_index),
                    None => continue,
                },
                MenuRow::Empty => Line::from(Span::styled(
                    format!("  {EMPTY_STATE}"),
                    self.theme.list_item.add_modifier(Modifier::DIM),
                )),
            };
            buf.set_line(layout.list.x, y, &line, layout.list.width);
        }
    }
}
