use ratatui::widgets::ListState;

use crate::clipboard::CopyHandle;

// ============================================================================
// TERMINAL UI APP STATE
// ============================================================================

pub struct App {
    pub list_state: ListState,
    pub should_quit: bool,
    pub pending_copy: Option<CopyHandle>,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            list_state: ListState::default(),
            should_quit: false,
            pending_copy: None,
        };
        app.list_state.select(Some(0));
        app
    }

    pub fn next(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        let i = self
            .list_state
            .selected()
            .map(|i| if i >= max - 1 { 0 } else { i + 1 })
            .unwrap_or(0);
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        let i = self
            .list_state
            .selected()
            .map(|i| if i == 0 { max - 1 } else { i - 1 })
            .unwrap_or(0);
        self.list_state.select(Some(i));
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Poll the in-flight clipboard copy, clearing it once resolved.
    pub fn poll_copy(&mut self) -> Option<bool> {
        let done = self.pending_copy.as_ref().and_then(CopyHandle::try_resolve);
        if done.is_some() {
            self.pending_copy = None;
        }
        done
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        let mut app = App::new();
        app.previous(3);
        assert_eq!(app.selected(), Some(2));
        app.next(3);
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn navigation_on_an_empty_list_keeps_selection() {
        let mut app = App::new();
        app.next(0);
        app.previous(0);
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn poll_copy_is_none_without_a_pending_copy() {
        let mut app = App::new();
        assert_eq!(app.poll_copy(), None);
    }
}
