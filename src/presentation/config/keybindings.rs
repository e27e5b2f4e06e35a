use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::IntoStaticStr;

/// What a key press asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Action {
    Quit,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Open,
    Back,
}

#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Looks up the action bound to `key`, ignoring the shift state of characters
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.0.get(&normalize(*key)).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Drops everything but the key code and the modifiers that matter for lookup
fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    let code = match key.code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::Char(c.to_ascii_uppercase())
        }
        code => code,
    };
    KeyEvent::new(code, modifiers)
}

/// Parses `<ctrl-c>`, `<enter>`, `j` and the like
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(raw);
    if raw.is_empty() {
        return Err("Empty key".to_string());
    }
    let (remaining, modifiers) = extract_modifiers(raw);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, modifiers: KeyModifiers) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => c
            .chars()
            .next()
            .map(KeyCode::Char)
            .ok_or_else(|| format!("Unable to parse {raw}"))?,
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(normalize(KeyEvent::new(code, modifiers)))
}
