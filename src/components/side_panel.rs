use crate::app::state::SidePanelState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct SidePanel<'a> {
    pub state: &'a SidePanelState,
    pub theme: &'a Theme,
}

impl Widget for SidePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let activity = &self.state.activity;
        let title = if activity.label().is_empty() {
            "Untitled"
        } else {
            activity.label()
        };

        Clear.render(area, buf);
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.panel_title),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Esc", self.theme.footer_key),
                Span::raw(": close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let created = activity.created_at.map_or_else(
            || "No date".to_string(),
            |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );
        let mut lines = vec![
            Line::from(Span::styled(created, self.theme.dimmed)),
            Line::from(""),
        ];
        lines.extend(
            activity
                .body
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), self.theme.list_item))),
        );

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
