use std::fmt;
use std::str::FromStr;

use iced::keyboard::{self, Modifiers};

use super::errors::ShortcutError;

/// A keyboard shortcut such as `ctrl+shift+t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shortcut {
    modifiers: Modifiers,
    key: char,
}

impl Shortcut {
    /// Whether a key press with the given modifiers triggers this shortcut.
    ///
    /// Modifiers must match exactly; character comparison ignores case so
    /// that shift-modified layouts still match.
    pub(crate) fn matches(
        &self,
        key: &keyboard::Key,
        modifiers: Modifiers,
    ) -> bool {
        let keyboard::Key::Character(pressed) = key else {
            return false;
        };

        let mut chars = pressed.chars();
        let (Some(pressed), None) = (chars.next(), chars.next()) else {
            return false;
        };

        modifiers == self.modifiers && pressed.eq_ignore_ascii_case(&self.key)
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        if literal.trim().is_empty() {
            return Err(ShortcutError::Empty);
        }

        let tokens: Vec<&str> = literal.split('+').map(str::trim).collect();
        let Some((key, prefix)) = tokens.split_last() else {
            return Err(ShortcutError::Empty);
        };

        let mut modifiers = Modifiers::empty();
        for token in prefix {
            match parse_modifier(token) {
                Some(modifier) => modifiers |= modifier,
                None if token.chars().count() == 1 => {
                    return Err(ShortcutError::MultipleKeys);
                },
                None => {
                    return Err(ShortcutError::UnknownModifier(
                        (*token).to_string(),
                    ));
                },
            }
        }

        if key.is_empty() || parse_modifier(key).is_some() {
            return Err(ShortcutError::MissingKey);
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) if key.is_ascii_graphic() => Ok(Self {
                modifiers,
                key: key.to_ascii_lowercase(),
            }),
            _ => Err(ShortcutError::UnsupportedKey((*key).to_string())),
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::LOGO, "Logo"),
        ];

        for (modifier, label) in labels {
            if self.modifiers.contains(modifier) {
                write!(f, "{label}+")?;
            }
        }

        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

fn parse_modifier(token: &str) -> Option<Modifiers> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" => Some(Modifiers::ALT),
        "logo" | "meta" | "super" => Some(Modifiers::LOGO),
        _ => None,
    }
}
