use crate::app::state::{AppState, UserFetch};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Header<'_> {
    fn user_span(&self) -> Span<'static> {
        // The slot wins over the fetch status: it keeps the last known user
        if let Some(user) = self.state.shared.current_user.get() {
            return Span::styled(format!(" {} ", user.display_name()), self.theme.header_user);
        }
        match &self.state.user_fetch {
            UserFetch::NoSession => Span::styled(" signed out ", self.theme.header),
            UserFetch::Loading => Span::styled(" signing in... ", self.theme.header_warn),
            UserFetch::Resolved(user) => {
                Span::styled(format!(" {} ", user.display_name()), self.theme.header_user)
            }
            UserFetch::Failed(_) => Span::styled(" offline ", self.theme.header_warn),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let location_bg = self.theme.header_location.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let user = self.user_span();
        let mut spans = vec![
            Span::styled(" ROLO ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(location_bg)),
            Span::styled(
                format!(" {} ", self.state.location),
                self.theme.header_location,
            ),
            Span::styled(SEP_RIGHT, Style::default().fg(location_bg).bg(base_bg)),
        ];

        let used: usize = spans.iter().map(Span::width).sum();
        let padding = (area.width as usize).saturating_sub(used + user.width());
        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        spans.push(user);

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
