use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_location: Style,
    pub header_user: Style,
    pub header_warn: Style,
    pub header: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub footer_key: Style,
    pub footer_val: Style,
    pub footer: Style,

    pub section_heading: Style,
    pub shortcut: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
    pub panel_title: Style,

    // Avatar badge backgrounds, picked by record id
    pub avatar_colors: Vec<Color>,
    pub avatar_text: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Slate,
    Paper,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Slate => Self::from_palette(&palette::SLATE),
            PaletteType::Paper => Self::from_palette(&palette::PAPER),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface1),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_location: Style::default().bg(p.surface1).fg(p.text),
            header_user: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.crust).fg(p.subtext0),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            section_heading: Style::default()
                .fg(p.subtext0)
                .add_modifier(Modifier::BOLD),
            shortcut: Style::default().bg(p.surface0).fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            panel_title: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),

            avatar_colors: vec![p.red, p.green, p.yellow, p.blue, p.mauve, p.teal, p.peach],
            avatar_text: p.crust,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}
