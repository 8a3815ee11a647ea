use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::Deref;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backing the command-menu search box.
#[derive(Default)]
pub struct SearchField<'a>(TextArea<'a>);

impl SearchField<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    /// Feeds a key to the field. Returns whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        // Line breaks would split the search text
        if matches!(key.code, KeyCode::Enter) {
            return false;
        }
        let changed = self.0.input(key);
        if self.0.lines().len() > 1 {
            let text = self.text();
            self.set_text(&text);
        }
        changed
    }

    pub fn set_text(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.move_cursor(CursorMove::End);
        self.0 = area;
    }
}

impl Clone for SearchField<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for SearchField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for SearchField<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Widget for &SearchField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
