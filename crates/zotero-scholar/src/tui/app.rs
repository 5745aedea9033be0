//! Application State
//!
//! Wraps the [`SearchController`] with the bits only the terminal view needs:
//! focus, the result cursor, and the spinner frame.

use std::time::Instant;

use crate::controller::{Completion, CompletionSender, SearchController};
use crate::tui::event::AppAction;

/// Spinner frames shown while a search is in flight.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input.
    #[default]
    Input,
    /// The results list.
    Results,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Search state and lookups.
    pub controller: SearchController,

    /// Focused widget.
    pub focus: Focus,

    /// Highlighted result.
    pub cursor: usize,

    /// Set when the user asked to quit.
    pub should_quit: bool,

    spinner: usize,
    completions: CompletionSender,
}

impl App {
    /// Create a new application instance
    #[must_use]
    pub fn new(controller: SearchController, completions: CompletionSender) -> Self {
        Self {
            controller,
            focus: Focus::Input,
            cursor: 0,
            should_quit: false,
            spinner: 0,
            completions,
        }
    }

    /// Current spinner glyph.
    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()]
    }

    /// Handle one user action.
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Tick => self.tick(Instant::now()),
            AppAction::Escape => self.escape(Instant::now()),
            AppAction::ToggleFocus => self.toggle_focus(),
            AppAction::Submit => self.submit(),
            AppAction::Up => {
                if self.focus == Focus::Results {
                    self.cursor = self.cursor.saturating_sub(1);
                }
            }
            AppAction::Down => {
                if self.focus == Focus::Results {
                    let last = self.controller.state().results().len().saturating_sub(1);
                    self.cursor = (self.cursor + 1).min(last);
                }
            }
            AppAction::Backspace => {
                self.focus = Focus::Input;
                self.controller.state_mut().pop_char();
            }
            AppAction::Input(c) => {
                self.focus = Focus::Input;
                self.controller.state_mut().push_char(c);
            }
        }
    }

    /// Apply a finished lookup.
    pub fn apply(&mut self, completion: Completion) {
        self.controller.apply(completion);
        let len = self.controller.state().results().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Advance the spinner and drop expired notifications.
    pub fn tick(&mut self, now: Instant) {
        if self.controller.state().is_loading() {
            self.spinner = self.spinner.wrapping_add(1);
        }
        self.controller.notifications_mut().prune_expired(now);
    }

    /// Dismiss the newest notification, or clear the selection once none are left.
    pub fn escape(&mut self, now: Instant) {
        let newest = self.controller.notifications().newest_active(now).map(|n| n.id);
        match newest {
            Some(id) => {
                self.controller.notifications_mut().dismiss(id);
            }
            None => self.controller.state_mut().clear_selection(),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.controller.state().results().is_empty() => Focus::Results,
            _ => Focus::Input,
        };
    }

    fn submit(&mut self) {
        match self.focus {
            Focus::Input => {
                self.cursor = 0;
                self.controller.spawn_search(&self.completions);
            }
            Focus::Results => {
                self.controller.spawn_select_index(self.cursor, &self.completions);
            }
        }
    }
}
