//! Keyboard input for the widget.
//!
//! Keys arrive from whatever front end hosts the widget (a terminal, a
//! window) and are normalized here before the keymap sees them.

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
}

impl Key {
    /// Name used in configuration files and key scripts.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Char(' ') => "Space".to_owned(),
            Self::Char(c) => c.to_string(),
            Self::Enter => "Enter".to_owned(),
            Self::Escape => "Escape".to_owned(),
            Self::Backspace => "Backspace".to_owned(),
            Self::Delete => "Delete".to_owned(),
            Self::Tab => "Tab".to_owned(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Key {
    type Err = UiError;

    /// Parses a single character or a named key (`Enter`, `Esc`, `BS`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }
        match s.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(Self::Enter),
            "escape" | "esc" => Ok(Self::Escape),
            "backspace" | "bs" => Ok(Self::Backspace),
            "delete" | "del" => Ok(Self::Delete),
            "tab" => Ok(Self::Tab),
            "space" => Ok(Self::Char(' ')),
            _ => Err(UiError::UnknownKey(s.to_owned())),
        }
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Alt key is held.
    pub alt: bool,
}

impl Modifiers {
    /// True when Ctrl or Alt is held. Such presses are shortcuts for the
    /// host, not calculator input.
    #[must_use]
    pub fn is_chord(self) -> bool {
        self.ctrl || self.alt
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A press without modifiers.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

impl FromStr for KeyEvent {
    type Err = UiError;

    /// Parses a key name with optional `C-`, `A-` and `S-` prefixes
    /// (`C-c`, `S-Tab`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::default();
        let mut rest = s;
        while rest.len() > 2 {
            let flag = match rest.get(..2) {
                Some("C-" | "c-") => &mut modifiers.ctrl,
                Some("A-" | "a-") => &mut modifiers.alt,
                Some("S-" | "s-") => &mut modifiers.shift,
                _ => break,
            };
            *flag = true;
            rest = &rest[2..];
        }
        let key = rest.parse::<Key>()?;
        Ok(Self { key, modifiers })
    }
}

/// Splits a typed line into key presses.
///
/// Every character is one key; `<Name>` spells a named key or chord, e.g.
/// `"12<BS>3<Enter>"` or `"<C-c>"`. An unterminated or unknown `<…>` is
/// typed literally.
#[must_use]
pub fn parse_key_script(line: &str) -> Vec<KeyEvent> {
    let mut keys = Vec::new();
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(close) = rest.find('>') {
                if close > 2 {
                    if let Ok(event) = rest[1..close].parse::<KeyEvent>() {
                        keys.push(event);
                        rest = &rest[close + 1..];
                        continue;
                    }
                }
            }
        }
        keys.push(KeyEvent::plain(Key::Char(c)));
        rest = &rest[c.len_utf8()..];
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Enter".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("esc".parse::<Key>(), Ok(Key::Escape));
        assert_eq!("BS".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("c".parse::<Key>(), Ok(Key::Char('c')));
        assert!("Hyper".parse::<Key>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for key in [Key::Enter, Key::Escape, Key::Backspace, Key::Char('7'), Key::Char(' ')] {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_key_script() {
        let plain = |keys: &[Key]| keys.iter().copied().map(KeyEvent::plain).collect::<Vec<_>>();
        assert_eq!(
            parse_key_script("1<BS>2<Enter>"),
            plain(&[Key::Char('1'), Key::Backspace, Key::Char('2'), Key::Enter])
        );
        assert_eq!(
            parse_key_script("<x>"),
            plain(&[Key::Char('<'), Key::Char('x'), Key::Char('>')])
        );
        assert_eq!(parse_key_script("3<"), plain(&[Key::Char('3'), Key::Char('<')]));
    }

    #[test]
    fn test_chords() {
        let ctrl_c = KeyEvent {
            key: Key::Char('c'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert_eq!("C-c".parse::<KeyEvent>(), Ok(ctrl_c));
        assert_eq!(parse_key_script("<C-c>5"), vec![ctrl_c, KeyEvent::plain(Key::Char('5'))]);

        let alt_shift_tab = "A-S-Tab".parse::<KeyEvent>().unwrap();
        assert_eq!(alt_shift_tab.key, Key::Tab);
        assert!(alt_shift_tab.modifiers.alt && alt_shift_tab.modifiers.shift);
        assert!(alt_shift_tab.modifiers.is_chord());

        let shift_tab = "S-Tab".parse::<KeyEvent>().unwrap();
        assert!(!shift_tab.modifiers.is_chord());
        assert_eq!("C-".parse::<KeyEvent>(), Err(UiError::UnknownKey("C-".to_owned())));
    }
}
