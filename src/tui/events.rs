//! Dashboard input events
//!
//! Terminal input is translated into dashboard-level events right here, so
//! the main loop only ever sees the actions the dashboard understands. The
//! pump task interleaves a UI tick with a non-blocking poll of the key
//! queue and pushes everything through one unbounded channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Leave the dashboard
    Quit,
    /// Re-run the market analysis
    Refresh,
    /// Move the card cursor up
    SelectPrevious,
    /// Move the card cursor down
    SelectNext,
    /// Periodic redraw
    Tick,
    Error(String),
}

/// Map a terminal key to its dashboard action, if it has one.
///
/// Release/repeat events and unbound keys map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Event::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Event::Refresh),
        KeyCode::Up => Some(Event::SelectPrevious),
        KeyCode::Down => Some(Event::SelectNext),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let _task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            debug!("Event channel closed, stopping tick pump");
                            break;
                        }
                    }
                    _ = tokio::time::sleep(Duration::from_millis(1)) => {
                        match poll_key() {
                            Ok(Some(key)) => {
                                if let Some(action) = map_key(key) {
                                    if tx.send(action).is_err() {
                                        debug!("Event channel closed, stopping input pump");
                                        break;
                                    }
                                }
                            }
                            Ok(None) => {}
                            Err(e) => {
                                error!("Failed to read terminal event: {}", e);
                                let _ = tx.send(Event::Error(format!("Terminal read error: {}", e)));
                            }
                        }
                    }
                }
            }

            debug!("Event pump task ended");
        });

        Self { rx, _task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Non-blocking read of the next key event, if any is queued.
fn poll_key() -> std::io::Result<Option<KeyEvent>> {
    if !event::poll(Duration::from_millis(0))? {
        return Ok(None);
    }
    match event::read()? {
        CrosstermEvent::Key(key) => Ok(Some(key)),
        // Resize, mouse and focus events only matter on the next redraw
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Event::Quit));
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Some(Event::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Event::Quit));
    }

    #[test]
    fn test_refresh_and_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Event::Refresh));
        assert_eq!(map_key(press(KeyCode::Char('R'))), Some(Event::Refresh));
        assert_eq!(map_key(press(KeyCode::Up)), Some(Event::SelectPrevious));
        assert_eq!(map_key(press(KeyCode::Down)), Some(Event::SelectNext));
    }

    #[test]
    fn test_unbound_keys_map_to_nothing() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
