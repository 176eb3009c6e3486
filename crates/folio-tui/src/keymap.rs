use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Binding for a pressed key
    ///
    /// Shifted symbols ('?', '!', ...) arrive with SHIFT on some terminals
    /// and without it on others; they are matched without it.
    pub fn from_event(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() && key.modifiers == KeyModifiers::SHIFT => {
                Self::simple(key.code)
            }
            _ => Self::new(key.code, key.modifiers),
        }
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    /// Primary key bindings
    bindings: HashMap<KeyBinding, Action>,
    /// Action of the "gg" sequence, if configured
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut pending_g_action = None;

        let mut add_binding = |key_str: &str, action: Action| {
            if key_str == "gg" {
                pending_g_action = Some(action);
                return;
            }

            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.goto_home, Action::ScrollToAnchor("home"));
        add_binding(&config.goto_portfolio, Action::ScrollToAnchor("portfolio"));
        add_binding(&config.goto_contact, Action::ScrollToAnchor("contact"));
        add_binding(&config.goto_projects, Action::ScrollToAnchor("projects"));
        add_binding(&config.move_down, Action::MoveDown);
        add_binding(&config.move_up, Action::MoveUp);
        add_binding(&config.select, Action::Select);
        add_binding(&config.open_link, Action::OpenLink);
        add_binding(&config.back, Action::Back);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.jump_to_top, Action::JumpToTop);
        add_binding(&config.jump_to_bottom, Action::JumpToBottom);
        add_binding(&config.help, Action::Help);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // Arrow and paging keys as alternatives
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::MoveUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::MoveDown);
        bindings.entry(KeyBinding::simple(KeyCode::PageDown)).or_insert(Action::ScrollDown);
        bindings.entry(KeyBinding::simple(KeyCode::PageUp)).or_insert(Action::ScrollUp);

        Self {
            bindings,
            pending_g_action,
        }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Get the action for completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Check if a single 'g' press should start a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", "1", "?"
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-d>", "<C-u>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Up>", "<PageDown>", ...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.starts_with('<') && s.ends_with('>') && s.len() > 2 {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    // Uppercase letters are Shift+letter
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "d" in "<C-d>")
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("1"),
            Some(KeyBinding::simple(KeyCode::Char('1')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
        assert_eq!(parse_key_binding("jk"), None);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
        assert_eq!(
            parse_key_binding("<C-U>"),
            Some(KeyBinding::ctrl(KeyCode::Char('u')))
        );
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<Esc>"),
            Some(KeyBinding::simple(KeyCode::Esc))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<PageDown>"),
            Some(KeyBinding::simple(KeyCode::PageDown))
        );
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_shifted_symbol_matches_plain_binding() {
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyBinding::from_event(&event),
            KeyBinding::simple(KeyCode::Char('?'))
        );

        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyBinding::from_event(&event),
            KeyBinding::shift(KeyCode::Char('G'))
        );
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::from_config(&KeymapConfig::default());

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('4'))),
            Some(&Action::ScrollToAnchor("projects"))
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('d'))),
            Some(&Action::ScrollDown)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Enter)),
            Some(&Action::Select)
        );
        assert_eq!(keymap.get_pending_g_action(), Some(&Action::JumpToTop));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            goto_home: "q".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
    }
}
