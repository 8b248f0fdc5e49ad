//! Keyboard shortcuts.
//!
//! Default bindings:
//!
//! | Keys | Input |
//! |---|---|
//! | `0`–`9` | digit |
//! | `.` | decimal point |
//! | `+` `-` `*` `/` | operators |
//! | `=`, Enter | equals |
//! | Escape, `c`, `C` | clear |
//! | Backspace | backspace |

use std::collections::HashMap;

use tally_core::{Digit, Input, Operator};

use crate::error::{UiError, UiResult};
use crate::input::{Key, KeyEvent};

/// Command name that removes a default binding.
pub const UNBIND: &str = "none";

/// Maps keys to engine inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<Key, Input>,
}

impl Keymap {
    /// A keymap with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `input`, replacing any previous binding.
    pub fn bind(&mut self, key: Key, input: Input) -> Option<Input> {
        self.bindings.insert(key, input)
    }

    /// Removes the binding of `key`.
    pub fn unbind(&mut self, key: Key) -> Option<Input> {
        self.bindings.remove(&key)
    }

    /// Input bound to a key press.
    ///
    /// Unbound keys and Ctrl/Alt chords yield `None`; Shift is ignored so
    /// `+` and `*` work on layouts that need it.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Input> {
        if event.modifiers.is_chord() {
            return None;
        }
        self.bindings.get(&event.key).copied()
    }

    /// Applies `key name → command name` overrides on top of this keymap.
    ///
    /// The command [`UNBIND`] removes the key's binding.
    ///
    /// # Errors
    ///
    /// Fails on the first key or command name that does not parse.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> UiResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key_name, command) in overrides {
            let key = key_name.parse::<Key>()?;
            if command == UNBIND {
                tracing::debug!(key = %key, "unbinding key");
                self.unbind(key);
                continue;
            }
            let input = command.parse::<Input>().map_err(|_| UiError::UnknownCommand {
                key: key_name.to_owned(),
                command: command.to_owned(),
            })?;
            if let Some(previous) = self.bind(key, input) {
                if previous != input {
                    tracing::debug!(key = %key, from = previous.name(), to = input.name(), "rebinding key");
                }
            }
        }
        Ok(self)
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        for value in 0..=9 {
            if let Some(digit) = Digit::new(value) {
                keymap.bind(Key::Char(digit.as_char()), Input::Digit(digit));
            }
        }
        keymap.bind(Key::Char('.'), Input::DecimalPoint);
        keymap.bind(Key::Char('+'), Input::Operator(Operator::Add));
        keymap.bind(Key::Char('-'), Input::Operator(Operator::Sub));
        keymap.bind(Key::Char('*'), Input::Operator(Operator::Mul));
        keymap.bind(Key::Char('/'), Input::Operator(Operator::Div));
        keymap.bind(Key::Char('='), Input::Equals);
        keymap.bind(Key::Enter, Input::Equals);
        keymap.bind(Key::Escape, Input::Clear);
        keymap.bind(Key::Char('c'), Input::Clear);
        keymap.bind(Key::Char('C'), Input::Clear);
        keymap.bind(Key::Backspace, Input::Backspace);
        keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keymap: &Keymap, key: Key) -> Option<Input> {
        keymap.lookup(KeyEvent::plain(key))
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(press(&keymap, Key::Char('4')), Some(Input::Digit(Digit::new(4).unwrap())));
        assert_eq!(press(&keymap, Key::Char('/')), Some(Input::Operator(Operator::Div)));
        assert_eq!(press(&keymap, Key::Enter), Some(Input::Equals));
        assert_eq!(press(&keymap, Key::Char('C')), Some(Input::Clear));
        assert_eq!(press(&keymap, Key::Escape), Some(Input::Clear));
        assert_eq!(press(&keymap, Key::Backspace), Some(Input::Backspace));
        assert_eq!(press(&keymap, Key::Char('x')), None);
        assert_eq!(keymap.len(), 21);
    }

    #[test]
    fn test_chords_are_not_calculator_input() {
        let keymap = Keymap::default();
        let ctrl_c = "C-c".parse::<KeyEvent>().unwrap();
        let alt_five = "A-5".parse::<KeyEvent>().unwrap();
        let shift_plus = "S-+".parse::<KeyEvent>().unwrap();
        assert_eq!(keymap.lookup(ctrl_c), None);
        assert_eq!(keymap.lookup(alt_five), None);
        assert_eq!(keymap.lookup(shift_plus), Some(Input::Operator(Operator::Add)));
    }

    #[test]
    fn test_overrides() {
        let keymap = Keymap::default()
            .with_overrides([("x", "mul"), ("c", UNBIND), ("Delete", "clear")])
            .unwrap();
        assert_eq!(press(&keymap, Key::Char('x')), Some(Input::Operator(Operator::Mul)));
        assert_eq!(press(&keymap, Key::Char('c')), None);
        assert_eq!(press(&keymap, Key::Delete), Some(Input::Clear));
    }

    #[test]
    fn test_bad_overrides_are_rejected() {
        assert_eq!(
            Keymap::default().with_overrides([("Hyper", "clear")]),
            Err(UiError::UnknownKey("Hyper".to_owned()))
        );
        assert_eq!(
            Keymap::default().with_overrides([("x", "sqrt")]),
            Err(UiError::UnknownCommand {
                key: "x".to_owned(),
                command: "sqrt".to_owned()
            })
        );
    }
}
