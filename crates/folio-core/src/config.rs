use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the floating preview next to the selected project
    #[serde(default = "default_true")]
    pub show_preview: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_preview: default_true(),
        }
    }
}

/// Easing curve applied to scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Constant velocity
    Linear,
    /// Quadratic ease-in-out: 2t² for the first half, -1 + (4 - 2t)t after
    #[default]
    EaseInOutQuad,
    /// Cubic ease-in: t³
    EaseIn,
    /// Cubic ease-out: 1 - (1-t)³
    EaseOut,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate anchor jumps instead of moving instantly
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Time budget of one anchor animation in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows moved by one manual scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Anchor navigation
    /// Scroll to the home anchor
    #[serde(default = "default_key_goto_home")]
    pub goto_home: String,
    /// Scroll to the portfolio anchor
    #[serde(default = "default_key_goto_portfolio")]
    pub goto_portfolio: String,
    /// Scroll to the contact anchor
    #[serde(default = "default_key_goto_contact")]
    pub goto_contact: String,
    /// Scroll to the projects section
    #[serde(default = "default_key_goto_projects")]
    pub goto_projects: String,

    // Project list
    /// Select next project
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Select previous project
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    /// Open project details
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Open the project image in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Leave the detail view
    #[serde(default = "default_key_back")]
    pub back: String,

    // Manual scrolling
    /// Scroll down by `scroll.scroll_lines`
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up by `scroll.scroll_lines`
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Jump to the top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    /// Show key help
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            goto_home: default_key_goto_home(),
            goto_portfolio: default_key_goto_portfolio(),
            goto_contact: default_key_goto_contact(),
            goto_projects: default_key_goto_projects(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            select: default_key_select(),
            open_link: default_key_open_link(),
            back: default_key_back(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            help: default_key_help(),
        }
    }
}

impl ScrollConfig {
    /// Animation duration as Duration
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Interval between frames while an animation runs
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            // Never below 1ms, so frame timestamps always advance
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }

    /// Check if smooth scrolling is effectively enabled
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.duration_ms > 0
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_goto_home() -> String { "1".to_string() }
fn default_key_goto_portfolio() -> String { "2".to_string() }
fn default_key_goto_contact() -> String { "3".to_string() }
fn default_key_goto_projects() -> String { "4".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_back() -> String { "<Esc>".to_string() }
fn default_key_scroll_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_up() -> String { "<C-u>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    1000
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    3
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.scroll.duration_ms, 1000);
        assert_eq!(config.scroll.easing, EasingType::EaseInOutQuad);
        assert_eq!(config.keymap.goto_home, "1");
    }

    #[test]
    fn test_frame_interval() {
        let mut config = ScrollConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        config.animation_fps = 0;
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        config.animation_fps = 20;
        assert_eq!(config.frame_interval(), Duration::from_millis(50));

        config.animation_fps = 2000;
        assert_eq!(config.frame_interval(), Duration::from_millis(1));

        config.animation_fps = u32::MAX;
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_partial_scroll_section() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            duration_ms = 400
            easing = "ease-out"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.duration_ms, 400);
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.scroll.animation_fps, 60);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let err = AppConfig::from_toml("[scroll]\nduration_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_survives_save_format() {
        let mut config = AppConfig::default();
        config.keymap.quit = "<C-q>".to_string();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.keymap.quit, "<C-q>");
    }
}
