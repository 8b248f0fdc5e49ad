//! The event loop.
//!
//! Waits for the next input event or the next timer deadline, whichever
//! comes first, feeds the widget, and redraws when the rendered text
//! changed.

use std::io::Write;
use std::time::Instant;

use anyhow::Context as _;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use tally_ui::CalculatorWidget;

use crate::config::TallyConfig;
use crate::events::AppEvent;

/// Terminal calculator application.
pub struct App {
    widget: CalculatorWidget,
    width: usize,
    last_frame: Option<String>,
}

impl App {
    /// Builds the application from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the keymap overrides are invalid.
    pub fn new(config: &TallyConfig) -> anyhow::Result<Self> {
        let keymap = config.keymap().context("building keymap")?;
        if keymap.is_empty() {
            tracing::warn!("every key is unbound, only :click input will work");
        } else {
            tracing::debug!(bindings = keymap.len(), "keymap ready");
        }
        Ok(Self {
            widget: CalculatorWidget::new(config.engine(), config.widget(), keymap),
            width: config.display.width,
            last_frame: None,
        })
    }

    /// The widget.
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        &self.widget
    }

    /// Handles one event. Returns false when the loop should stop.
    pub fn handle(&mut self, event: AppEvent, now: Instant) -> bool {
        match event {
            AppEvent::Key(key) => {
                self.widget.key_down(key, now);
            }
            AppEvent::Click(class_name) => {
                self.widget.click_class(&class_name, now);
            }
            AppEvent::Quit => return false,
        }
        true
    }

    /// Writes the current frame to `out` if it differs from the last one.
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` fails.
    pub fn redraw<W: Write>(&mut self, out: &mut W, now: Instant) -> anyhow::Result<bool> {
        let text = self.widget.frame(now).render_text(self.width);
        if self.last_frame.as_deref() == Some(text.as_str()) {
            return Ok(false);
        }
        writeln!(out, "{text}").context("writing frame")?;
        out.flush().context("flushing output")?;
        self.last_frame = Some(text);
        Ok(true)
    }

    /// Runs until [`AppEvent::Quit`] or until every sender is gone.
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` fails.
    pub fn run<W: Write>(&mut self, events: &Receiver<AppEvent>, out: &mut W) -> anyhow::Result<()> {
        tracing::info!(width = self.width, "calculator ready");
        self.redraw(out, Instant::now())?;

        loop {
            let received = match self.widget.next_deadline() {
                Some(deadline) => events.recv_deadline(deadline),
                None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            let now = Instant::now();
            match received {
                Ok(event) => {
                    if !self.handle(event, now) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("event channel closed");
                    break;
                }
            }

            self.widget.tick(now);
            self.redraw(out, now)?;
        }

        tracing::info!("calculator closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{channel, parse_line};

    fn send_line(sender: &crossbeam_channel::Sender<AppEvent>, line: &str) {
        for event in parse_line(line) {
            sender.send(event).unwrap();
        }
    }

    #[test]
    fn test_run_until_quit() {
        let mut app = App::new(&TallyConfig::default()).unwrap();
        let (sender, receiver) = channel(64);
        send_line(&sender, "5+3=");
        send_line(&sender, ":q");

        let mut out = Vec::new();
        app.run(&receiver, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("5 + 3 ="), "{text}");
        assert_eq!(app.widget().display().primary, "8");
    }

    #[test]
    fn test_stops_when_senders_drop() {
        let mut app = App::new(&TallyConfig::default()).unwrap();
        let (sender, receiver) = channel(8);
        send_line(&sender, ":click nine");
        drop(sender);

        let mut out = Vec::new();
        app.run(&receiver, &mut out).unwrap();
        assert_eq!(app.widget().display().primary, "9");
    }

    #[test]
    fn test_redraw_skips_identical_frames() {
        let mut app = App::new(&TallyConfig::default()).unwrap();
        let now = Instant::now();
        let mut out = Vec::new();
        assert!(app.redraw(&mut out, now).unwrap());
        assert!(!app.redraw(&mut out, now).unwrap());
    }
}
