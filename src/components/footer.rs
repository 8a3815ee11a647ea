use crate::app::state::{AppState, ErrorSeverity};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: String,
    pub desc: &'static str,
}

impl FooterItem {
    fn new(key: impl Into<String>, desc: &'static str) -> Self {
        Self {
            key: key.into(),
            desc,
        }
    }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

fn hints(state: &AppState) -> Vec<FooterItem> {
    if state.is_command_menu_open() {
        return vec![
            FooterItem::new("↑↓", "move"),
            FooterItem::new("Enter", "select"),
            FooterItem::new("Esc", "close"),
        ];
    }
    let mut items = Vec::new();
    if !state.keymap.open_hint.is_empty() {
        items.push(FooterItem::new(state.keymap.open_hint.clone(), "search"));
    }
    if state.side_panel.is_some() {
        items.push(FooterItem::new("Esc", "close panel"));
    }
    items.push(FooterItem::new("q", "quit"));
    items
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            let (label, style) = match err.severity {
                ErrorSeverity::Warning => ("WARN", theme.status_warn),
                ErrorSeverity::Error => ("ERROR", theme.status_error),
            };
            Span::styled(
                format!(
                    "  {label} {}: {}  ",
                    err.timestamp.format("%H:%M:%S"),
                    err.message
                ),
                style,
            )
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw("  ")];
        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for item in hints(state) {
            let key_span = Span::styled(format!(" {} ", item.key), theme.footer_key);
            let desc_span = Span::styled(format!(" {} ", item.desc), theme.footer_val);
            let item_width = key_span.width() + desc_span.width() + 1;
            if current_width + item_width > available_width {
                break;
            }
            spans.push(key_span);
            spans.push(desc_span);
            spans.push(Span::raw(" "));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
