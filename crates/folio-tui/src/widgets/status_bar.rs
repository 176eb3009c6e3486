use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::config::KeymapConfig;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Page => "PAGE",
            Mode::Detail(_) => "PROJECT",
            Mode::Help => "HELP",
        };

        let offset = app.viewport.offset();
        let section = app
            .page
            .section_at(offset)
            .map(|s| s.id.to_uppercase())
            .unwrap_or_default();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let motion = if app.is_animating() {
                format!(" | scrolling ({})", app.viewport.active_animations())
            } else {
                String::new()
            };
            format!(
                " {} | {} | row {:.0}/{:.0}{}",
                mode_str,
                section,
                offset,
                app.viewport.max_offset(),
                motion
            )
        };

        let help_hint = help_hint(&app.config.keymap);
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Key hints, read from the configured keymap
fn help_hint(keymap: &KeymapConfig) -> String {
    format!(
        " {}:quit {}/{}/{}/{}:sections {}/{}:projects {}:help ",
        keymap.quit,
        keymap.goto_home,
        keymap.goto_portfolio,
        keymap.goto_contact,
        keymap.goto_projects,
        keymap.move_down,
        keymap.move_up,
        keymap.help
    )
}
