//! # UI Error Types

use thiserror::Error;

/// Errors raised while building the widget from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A keymap entry names a key that does not exist.
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),

    /// A keymap entry names a command that does not exist.
    #[error("unknown command {command:?} bound to key {key:?}")]
    UnknownCommand {
        /// Key the command was bound to.
        key: String,
        /// The unrecognized command name.
        command: String,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
