//! Text rendering of the widget.
//!
//! A [`Frame`] is a snapshot of everything visible: both display lines,
//! the fade-in level of the readout and the lit pad buttons. It renders to
//! a box-drawn block of text of fixed width.

use std::fmt::Write as _;

use crate::button::PadButton;

/// Width of one pad cell, including brackets.
const CELL_WIDTH: usize = 5;

/// Snapshot of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Expression trace line.
    pub secondary: String,
    /// Main readout line.
    pub primary: String,
    /// Fade-in level of the readout (0 = invisible, 1 = opaque).
    pub primary_opacity: f32,
    /// Buttons currently highlighted.
    pub lit: Vec<PadButton>,
}

impl Frame {
    /// Renders the frame as text, `width` columns inside the border.
    #[must_use]
    pub fn render_text(&self, width: usize) -> String {
        let width = width.max(CELL_WIDTH * 4);
        let rule = "─".repeat(width + 2);
        let mut out = String::new();

        let _ = writeln!(out, "┌{rule}┐");
        let _ = writeln!(out, "│ {} │", fit_right(&self.secondary, width));
        let _ = writeln!(out, "│ {} │", fit_right(&self.primary, width));
        let _ = writeln!(out, "├{rule}┤");
        for row in PadButton::layout() {
            let mut cells = String::new();
            for button in row {
                let label = button.label();
                if self.lit.contains(&button) {
                    let _ = write!(cells, "[{label:^3}]");
                } else {
                    let _ = write!(cells, " {label:^3} ");
                }
            }
            let _ = writeln!(out, "│ {cells:<width$} │");
        }
        let _ = write!(out, "└{rule}┘");
        out
    }
}

/// Right-aligns `text` in `width` columns, keeping its tail if too long.
fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:>width$}");
    }
    text.chars().skip(len - width).collect()
}
