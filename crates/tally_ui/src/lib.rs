//! # TALLY UI
//!
//! Widget layer around the calculator engine:
//! - Keyboard shortcuts with configurable bindings
//! - Pad buttons addressed by class name
//! - Press highlight and readout fade-in
//! - Plain-text frames for terminal front ends
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     WIDGET PIPELINE                     │
//! ├────────────────────────────────────────────────────────┤
//! │  Key / Click → Keymap / PadButton → Session → Frame     │
//! │                     ↓                  ↓        ↓       │
//! │               PressFeedback       Timeline   render     │
//! └────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod button;
pub mod error;
pub mod feedback;
pub mod input;
pub mod keymap;
pub mod render;
pub mod widget;

pub use animation::{Animation, Easing};
pub use button::{ButtonKind, PadButton};
pub use error::{UiError, UiResult};
pub use feedback::PressFeedback;
pub use input::{parse_key_script, Key, KeyEvent, Modifiers};
pub use keymap::Keymap;
pub use render::Frame;
pub use widget::{CalculatorWidget, WidgetConfig};
