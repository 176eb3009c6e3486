use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popup::centered_rect;
use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key help popup from the configured keymap
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;

        let entries: [(&str, &str); 14] = [
            (keymap.goto_home.as_str(), "scroll to home"),
            (keymap.goto_portfolio.as_str(), "scroll to portfolio"),
            (keymap.goto_contact.as_str(), "scroll to contact"),
            (keymap.goto_projects.as_str(), "scroll to projects"),
            (keymap.move_down.as_str(), "next project"),
            (keymap.move_up.as_str(), "previous project"),
            (keymap.select.as_str(), "open project"),
            (keymap.open_link.as_str(), "open image in browser"),
            (keymap.back.as_str(), "back"),
            (keymap.scroll_down.as_str(), "scroll down"),
            (keymap.scroll_up.as_str(), "scroll up"),
            (keymap.jump_to_top.as_str(), "top of page"),
            (keymap.jump_to_bottom.as_str(), "bottom of page"),
            (keymap.quit.as_str(), "quit"),
        ];

        let area = centered_rect(44, entries.len() as u16 + 4, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:>8}  ", key),
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  any key to close",
            Style::default().fg(theme.grey0),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
