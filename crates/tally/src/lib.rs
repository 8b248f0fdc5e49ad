//! # TALLY
//!
//! Keyboard-driven terminal front end for the TALLY calculator.
//!
//! Type keys and press Enter: every character is a key press
//! (`12+3<Enter>`). Named keys go in angle brackets (`<Esc>`, `<BS>`),
//! `:click seven` presses a pad button by name and `:q` quits.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod config;
pub mod events;
pub mod logging;

pub use app::App;
pub use config::{ConfigError, TallyConfig};
pub use events::AppEvent;
