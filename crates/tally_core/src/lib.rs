//! # TALLY Core
//!
//! Calculator engine for the TALLY widget:
//! - Digit entry with leading-zero and single-separator rules
//! - Left-to-right operator chaining
//! - Noise-free result formatting
//! - Transient divide-by-zero error with a scheduled reset
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      ENGINE FLOW                        │
//! ├────────────────────────────────────────────────────────┤
//! │  Input → Calculator → Step { Display, Effect }          │
//! │                              ↓           ↓              │
//! │                        presentation   Timeline          │
//! │                                          ↓              │
//! │                            Session::advance(now)        │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{Calculator, Digit, Input, Operator};
//!
//! let mut calc = Calculator::default();
//! calc.apply(Input::Digit(Digit::new(5).unwrap()));
//! calc.apply(Input::Operator(Operator::Add));
//! calc.apply(Input::Digit(Digit::new(3).unwrap()));
//! let step = calc.apply(Input::Equals);
//! assert_eq!(step.display.primary, "8");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod operator;
pub mod session;
pub mod timer;

pub use engine::{Calculator, CalculatorState, Display, Effect, EngineConfig, Phase, Step};
pub use error::{CalcError, CalcResult};
pub use format::{format_number, format_outcome, parse_operand, ERROR_SENTINEL};
pub use input::{Digit, Input, UnknownCommand};
pub use operator::{Operator, UnknownOperator};
pub use session::{Session, Transition};
pub use timer::{Timeline, TimerId};
