//! Event Handling
//!
//! Maps keyboard and timer events to application actions.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,
    /// Enter: search from the input, select from the results
    Submit,
    /// Switch focus between input and results
    ToggleFocus,
    /// Move the result cursor up
    Up,
    /// Move the result cursor down
    Down,
    /// Dismiss the newest notification, else clear the selection
    Escape,
    /// Delete the last query character
    Backspace,
    /// A typed character
    Input(char),
    /// Timer tick for spinner and notification expiry
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppAction>,
    _tx: mpsc::Sender<AppAction>,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let tx_clone = tx.clone();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                let tick = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                tokio::select! {
                    _ = tick => {
                        if tx_clone.send(AppAction::Tick).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(evt)) = crossterm_event => {
                        if let Some(action) = map_event(&evt) {
                            if tx_clone.send(action).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Wait for the next action
    pub async fn next(&mut self) -> Option<AppAction> {
        self.rx.recv().await
    }
}

/// Map a crossterm event to an app action
#[must_use]
pub fn map_event(event: &Event) -> Option<AppAction> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key_event(*key),
        _ => None,
    }
}

/// Map a key event to an app action
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<AppAction> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(AppAction::Quit),
        (KeyModifiers::SHIFT, KeyCode::BackTab) => Some(AppAction::ToggleFocus),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
            KeyCode::Esc => Some(AppAction::Escape),
            KeyCode::Enter => Some(AppAction::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(AppAction::ToggleFocus),
            KeyCode::Up => Some(AppAction::Up),
            KeyCode::Down => Some(AppAction::Down),
            KeyCode::Backspace => Some(AppAction::Backspace),
            KeyCode::Char(c) => Some(AppAction::Input(c)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_shortcuts() {
        assert_eq!(map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(AppAction::Quit));
        assert_eq!(map_key_event(key(KeyCode::Char('q'), KeyModifiers::CONTROL)), Some(AppAction::Quit));
    }

    #[test]
    fn test_plain_and_shifted_characters_are_input() {
        assert_eq!(map_key_event(key(KeyCode::Char('g'), KeyModifiers::NONE)), Some(AppAction::Input('g')));
        assert_eq!(map_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), Some(AppAction::Input('G')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), Some(AppAction::Submit));
        assert_eq!(map_key_event(key(KeyCode::Tab, KeyModifiers::NONE)), Some(AppAction::ToggleFocus));
        assert_eq!(map_key_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(AppAction::ToggleFocus));
        assert_eq!(map_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Some(AppAction::Escape));
    }

    #[test]
    fn test_other_control_chords_are_ignored() {
        assert_eq!(map_key_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_key_event(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }
}
