use crate::domain::models::RecordId;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }
}

/// Horizontally centred rect of fixed height, pinned near the top third.
pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 3),
            Constraint::Length(height.min(r.height)),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height,
    }
    .intersection(terminal_area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

/// Stable FNV-1a hash so a record keeps its colour across runs.
fn color_index(seed: &RecordId, len: usize) -> usize {
    let hash = seed
        .0
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
            (acc ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
    (hash % len as u64) as usize
}

#[must_use]
pub fn avatar_color(seed: &RecordId, theme: &Theme) -> Color {
    if theme.avatar_colors.is_empty() {
        return Color::Reset;
    }
    theme.avatar_colors[color_index(seed, theme.avatar_colors.len())]
}

/// One-letter badge used in place of a picture.
#[must_use]
pub fn avatar_badge<'a>(placeholder: &str, seed: &RecordId, theme: &Theme) -> Span<'a> {
    let letter = placeholder
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or('?', |c| c.to_ascii_uppercase());
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .bg(avatar_color(seed, theme))
            .fg(theme.avatar_text)
            .add_modifier(Modifier::BOLD),
    )
}
