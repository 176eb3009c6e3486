use crossterm::event::KeyEvent;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Smooth-scroll the page to a section anchor
    ScrollToAnchor(&'static str),
    MoveUp,
    MoveDown,
    Select,
    OpenLink,
    Back,
    ScrollDown,
    ScrollUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    let binding = KeyBinding::from_event(&key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};
    use folio_core::AppConfig;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys_scroll_to_anchors() {
        let app = App::new(Arc::new(AppConfig::default()));
        let keymap = Keymap::default();

        let anchors: Vec<Action> = ['1', '2', '3', '4']
            .into_iter()
            .map(|c| handle_key_event(key(KeyCode::Char(c), KeyModifiers::NONE), &app, &keymap))
            .collect();
        assert_eq!(
            anchors,
            [
                Action::ScrollToAnchor("home"),
                Action::ScrollToAnchor("portfolio"),
                Action::ScrollToAnchor("contact"),
                Action::ScrollToAnchor("projects"),
            ]
        );
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = App::new(Arc::new(AppConfig::default()));
        let keymap = Keymap::default();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app, &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let mut app = App::new(Arc::new(AppConfig::default()));
        app.mode = Mode::Help;
        let keymap = Keymap::default();
        let q = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(q, &app, &keymap), Action::ExitMode);
    }

    #[test]
    fn test_unbound_key() {
        let app = App::new(Arc::new(AppConfig::default()));
        let keymap = Keymap::default();
        let z = key(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(z, &app, &keymap), Action::None);
    }
}
