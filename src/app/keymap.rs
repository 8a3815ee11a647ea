use super::action::Action;
use super::config::ConfigError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub open_command_menu: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            open_command_menu: vec!["ctrl+k".to_string(), "super+k".to_string()],
        }
    }
}

impl KeyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for chord in &self.open_command_menu {
            parse_chord(chord)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct KeyMap {
    // Main view
    pub global: HashMap<KeyEvent, Action>,
    // Checked first while the command menu is open
    pub command_menu: HashMap<KeyEvent, Action>,
    // First open chord, as typed in the config
    pub open_hint: String,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut command_menu = HashMap::new();

        for chord in &config.open_command_menu {
            match parse_chord(chord) {
                Ok(event) => {
                    global.insert(event, Action::OpenCommandMenu);
                    command_menu.insert(event, Action::OpenCommandMenu);
                }
                Err(err) => tracing::warn!(%err, "skipping key binding"),
            }
        }

        // --- Main View ---
        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Esc), Action::CloseSidePanel);

        // --- Command Menu ---
        command_menu.insert(ctrl('c'), Action::Quit);
        command_menu.insert(key(KeyCode::Esc), Action::CloseCommandMenu);
        command_menu.insert(key(KeyCode::Down), Action::CommandMenuNext);
        command_menu.insert(ctrl('n'), Action::CommandMenuNext);
        command_menu.insert(key(KeyCode::Up), Action::CommandMenuPrev);
        command_menu.insert(ctrl('p'), Action::CommandMenuPrev);
        command_menu.insert(key(KeyCode::Enter), Action::CommandMenuSelect);

        Self {
            global,
            command_menu,
            open_hint: config.open_command_menu.first().cloned().unwrap_or_default(),
        }
    }

    pub fn get_action(&self, event: KeyEvent, menu_open: bool) -> Option<Action> {
        let event = normalize(event);
        if menu_open {
            self.command_menu.get(&event).cloned()
        } else {
            self.global.get(&event).cloned()
        }
    }
}

/// Parses chords such as `ctrl+k` or `super+shift+p`.
pub fn parse_chord(chord: &str) -> Result<KeyEvent, ConfigError> {
    let invalid = || ConfigError::InvalidChord(chord.to_string());
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = chord.split('+').map(str::trim).collect();
    let key_part = parts.pop().filter(|p| !p.is_empty()).ok_or_else(invalid)?;

    for part in parts {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            _ => return Err(invalid()),
        };
    }

    let code = match key_part.to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(invalid()),
            }
        }
    };

    Ok(normalize(KeyEvent::new(code, modifiers)))
}

// Lookups ignore event kind/state; SHIFT is folded into the character.
fn normalize(event: KeyEvent) -> KeyEvent {
    match event.code {
        KeyCode::Char(c) if event.modifiers == KeyModifiers::SHIFT => {
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
        }
        KeyCode::Char(c) if !event.modifiers.is_empty() => {
            KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), event.modifiers)
        }
        code => KeyEvent::new(code, event.modifiers),
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
