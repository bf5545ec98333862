use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A key as reported by the host. Only keys the application binds are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Shift,
    Enter,
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("escape"),
            Key::Shift => f.write_str("shift"),
            Key::Enter => f.write_str("enter"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "esc" | "escape" => Ok(Key::Escape),
            "shift" => Ok(Key::Shift),
            "enter" | "return" => Ok(Key::Enter),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(InputError::UnknownKey(s.to_string())),
                }
            }
        }
    }
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

impl InputEvent {
    pub fn key(&self) -> Key {
        match *self {
            InputEvent::Pressed(k) | InputEvent::Released(k) => k,
        }
    }

    pub fn is_press_of(&self, key: Key) -> bool {
        *self == InputEvent::Pressed(key)
    }
}

/// Keys currently held down, polled once per frame.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Pressed(k) => {
                self.keys.insert(k);
            }
            InputEvent::Released(k) => {
                self.keys.remove(&k);
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
