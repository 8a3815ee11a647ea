use crate::app::commands::navigation_commands;
use crate::app::state::AppState;
use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Human title for a route: the navigation label, or the record kind and id.
#[must_use]
pub fn page_title(route: &Route) -> String {
    if let Some(cmd) = navigation_commands().iter().find(|c| c.to == route.0) {
        return cmd.label.trim_start_matches("Go to ").to_string();
    }
    match route.0.trim_start_matches('/').split_once('/') {
        Some(("person", id)) => format!("Person {id}"),
        Some(("companies", id)) => format!("Company {id}"),
        _ if route.0 == "/" => "Home".to_string(),
        _ => route.0.clone(),
    }
}

/// The host page for the current location.
pub struct Page<'a> {
    pub app_state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(page_title(&self.app_state.location), self.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                self.app_state.location.to_string(),
                self.theme.list_item,
            )),
            Line::from(""),
        ];
        if !self.app_state.keymap.open_hint.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    format!(" {} ", self.app_state.keymap.open_hint),
                    self.theme.footer_key,
                ),
                Span::raw(" to search people, companies and notes"),
            ]));
        }

        let height = lines.len() as u16;
        let centered_area = Rect {
            x: inner.x,
            y: (inner.y + inner.height / 2).saturating_sub(height / 2),
            width: inner.width,
            height: height.min(inner.height),
        };
        if centered_area.width > 0 && centered_area.height > 0 {
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(centered_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title(&Route::default()), "Home");
        assert_eq!(page_title(&Route::from("/people")), "People");
        assert_eq!(page_title(&Route::from("/settings/profile")), "Settings");
        assert_eq!(page_title(&Route::person(&"p1".into())), "Person p1");
        assert_eq!(page_title(&Route::company(&"c1".into())), "Company c1");
        assert_eq!(page_title(&Route::from("/elsewhere")), "/elsewhere");
    }
}
