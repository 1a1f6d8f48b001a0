//! The screen surface the utility layer works against.
//!
//! Mirrors the converter page: a messages area for transient notices, a
//! navigation panel with its toggle control, and a one-shot bootstrap. Every
//! part is optional; operations on an absent part are silent no-ops.

use std::time::Instant;

use log::info;

use crate::models::{Notice, Severity};

/// Holds the notices currently on screen. Notices expire five seconds after
/// posting; `prune` is driven from the UI tick.
#[derive(Debug, Default)]
pub struct MessageBoard {
    notices: Vec<Notice>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// The navigation panel, hidden until toggled.
#[derive(Debug, Default)]
pub struct NavPanel {
    visible: bool,
}

impl NavPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// The control that flips the navigation panel. Only its presence matters;
/// wiring happens in [`Screen::init_nav_menu`].
#[derive(Debug, Default)]
pub struct MenuToggle;

pub struct Screen {
    pub messages: Option<MessageBoard>,
    pub menu_toggle: Option<MenuToggle>,
    pub nav_panel: Option<NavPanel>,
    menu_wired: bool,
    ready: bool,
}

impl Screen {
    /// The full converter screen with every part present.
    pub fn new() -> Self {
        Self {
            messages: Some(MessageBoard::new()),
            menu_toggle: Some(MenuToggle),
            nav_panel: Some(NavPanel::new()),
            menu_wired: false,
            ready: false,
        }
    }

    /// A screen with no parts at all.
    pub fn bare() -> Self {
        Self {
            messages: None,
            menu_toggle: None,
            nav_panel: None,
            menu_wired: false,
            ready: false,
        }
    }

    /// Post a notice to the messages area. No-op when the screen has none.
    pub fn show_message(&mut self, text: impl Into<String>, severity: Severity) {
        if let Some(board) = self.messages.as_mut() {
            board.push(Notice::new(text, severity));
        }
    }

    pub fn prune_messages(&mut self, now: Instant) {
        if let Some(board) = self.messages.as_mut() {
            board.prune(now);
        }
    }

    /// Wire the menu toggle to the navigation panel. Requires both parts;
    /// otherwise nothing happens.
    pub fn init_nav_menu(&mut self) {
        if self.menu_toggle.is_some() && self.nav_panel.is_some() {
            self.menu_wired = true;
        }
    }

    /// A click on the menu toggle. Flips panel visibility once wired.
    pub fn click_menu_toggle(&mut self) {
        if !self.menu_wired {
            return;
        }
        if let Some(panel) = self.nav_panel.as_mut() {
            panel.toggle();
        }
    }

    pub fn nav_visible(&self) -> bool {
        self.nav_panel.as_ref().is_some_and(NavPanel::is_visible)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// One-shot startup: wire the menu, then announce readiness. Later calls
    /// do nothing.
    pub fn bootstrap(&mut self) {
        if self.ready {
            return;
        }
        self.init_nav_menu();
        self.ready = true;
        info!("audio-to-text converter UI ready");
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Post a message to a screen's messages area.
pub fn show_message(screen: &mut Screen, text: impl Into<String>, severity: Severity) {
    screen.show_message(text, severity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn show_inserts_exactly_one_notice_per_severity() {
        let mut screen = Screen::new();
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Success,
        ] {
            let before = screen.messages.as_ref().unwrap().len();
            screen.show_message("upload finished", severity);
            assert_eq!(screen.messages.as_ref().unwrap().len(), before + 1);
        }
    }

    #[test]
    fn notices_are_gone_within_five_seconds() {
        let t0 = Instant::now();
        let mut board = MessageBoard::new();
        board.push(Notice::posted("saved", Severity::Success, t0));

        board.prune(t0 + Duration::from_millis(4999));
        assert_eq!(board.len(), 1);

        board.prune(t0 + Duration::from_millis(5000));
        assert!(board.is_empty());
    }

    #[test]
    fn show_without_a_messages_area_is_a_no_op() {
        let mut screen = Screen::bare();
        screen.show_message("nobody hears this", Severity::Error);
        assert!(screen.messages.is_none());
    }

    #[test]
    fn menu_toggle_flips_visibility_on_and_back_off() {
        let mut screen = Screen::new();
        screen.init_nav_menu();

        assert!(!screen.nav_visible());
        screen.click_menu_toggle();
        assert!(screen.nav_visible());
        screen.click_menu_toggle();
        assert!(!screen.nav_visible());
    }

    #[test]
    fn init_without_toggle_or_panel_does_nothing() {
        let mut missing_toggle = Screen::new();
        missing_toggle.menu_toggle = None;
        missing_toggle.init_nav_menu();
        missing_toggle.click_menu_toggle();
        assert!(!missing_toggle.nav_visible());

        let mut missing_panel = Screen::new();
        missing_panel.nav_panel = None;
        missing_panel.init_nav_menu();
        missing_panel.click_menu_toggle();
        assert!(!missing_panel.nav_visible());
    }

    #[test]
    fn unwired_clicks_are_ignored() {
        let mut screen = Screen::new();
        screen.click_menu_toggle();
        assert!(!screen.nav_visible());
    }

    #[test]
    fn bootstrap_wires_the_menu_and_runs_once() {
        let mut screen = Screen::new();
        assert!(!screen.is_ready());

        screen.bootstrap();
        assert!(screen.is_ready());

        screen.click_menu_toggle();
        assert!(screen.nav_visible());

        // second bootstrap must not reset anything
        screen.bootstrap();
        assert!(screen.nav_visible());
    }
}
