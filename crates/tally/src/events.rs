//! # Event Channel
//!
//! Input sources run on their own threads and hand events to the event
//! loop over a bounded crossbeam channel.
//!
//! ```text
//! ┌──────────────┐      ┌─────────────┐      ┌──────────────┐
//! │ stdin reader │─────>│   Event     │─────>│  event loop  │
//! │   (thread)   │      │   Channel   │      │ (App::run)   │
//! └──────────────┘      └─────────────┘      └──────────────┘
//! ```

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tally_ui::{parse_key_script, KeyEvent};

/// Line that ends the session.
pub const QUIT_COMMAND: &str = ":q";

/// Events delivered to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// A pad button was clicked, identified by class name.
    Click(String),
    /// Input ended or the user asked to quit.
    Quit,
}

/// Creates a bounded event channel.
#[must_use]
pub fn channel(capacity: usize) -> (Sender<AppEvent>, Receiver<AppEvent>) {
    bounded(capacity)
}

/// Translates one input line into events.
///
/// `:q` quits, `:click <name>` clicks a pad button, anything else is a key
/// script (see [`parse_key_script`]).
#[must_use]
pub fn parse_line(line: &str) -> Vec<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim() == QUIT_COMMAND {
        return vec![AppEvent::Quit];
    }
    if let Some(names) = line.trim().strip_prefix(":click") {
        return names
            .split_whitespace()
            .map(|name| AppEvent::Click(name.to_owned()))
            .collect();
    }
    parse_key_script(line).into_iter().map(AppEvent::Key).collect()
}

/// Reads lines from `reader` on a new thread and forwards them as events.
///
/// Sends [`AppEvent::Quit`] when the input ends. Stops early if the event
/// loop has gone away.
pub fn spawn_reader<R>(reader: R, sender: Sender<AppEvent>) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("tally-input".to_owned())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        tracing::warn!(error = %err, "input read failed");
                        break;
                    }
                };
                for event in parse_line(&line) {
                    let quit = event == AppEvent::Quit;
                    if sender.send(event).is_err() || quit {
                        return;
                    }
                }
            }
            tracing::debug!("input closed");
            if sender.send(AppEvent::Quit).is_err() {
                tracing::trace!("event loop already stopped");
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally_ui::Key;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("1+<Esc>"),
            vec![
                AppEvent::Key(KeyEvent::plain(Key::Char('1'))),
                AppEvent::Key(KeyEvent::plain(Key::Char('+'))),
                AppEvent::Key(KeyEvent::plain(Key::Escape)),
            ]
        );
        assert_eq!(parse_line(" :q "), vec![AppEvent::Quit]);
        assert_eq!(
            parse_line(":click seven plus"),
            vec![AppEvent::Click("seven".into()), AppEvent::Click("plus".into())]
        );
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn test_reader_forwards_and_quits() {
        let (sender, receiver) = channel(16);
        let handle = spawn_reader(Cursor::new("12\n"), sender).unwrap();
        handle.join().unwrap();
        let events: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![
                AppEvent::Key(KeyEvent::plain(Key::Char('1'))),
                AppEvent::Key(KeyEvent::plain(Key::Char('2'))),
                AppEvent::Quit,
            ]
        );
    }

    #[test]
    fn test_reader_stops_at_quit() {
        let (sender, receiver) = channel(16);
        let handle = spawn_reader(Cursor::new(":q\n5\n"), sender).unwrap();
        handle.join().unwrap();
        assert_eq!(receiver.try_iter().collect::<Vec<_>>(), vec![AppEvent::Quit]);
    }

    #[test]
    fn test_reader_exits_when_loop_is_gone() {
        let (sender, receiver) = channel(16);
        drop(receiver);
        let handle = spawn_reader(Cursor::new(""), sender).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_parse_line_keeps_chords() {
        let events = parse_line("<C-c>");
        assert_eq!(events, vec![AppEvent::Key("C-c".parse::<KeyEvent>().unwrap())]);
        match &events[0] {
            AppEvent::Key(event) => assert!(event.modifiers.ctrl),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
