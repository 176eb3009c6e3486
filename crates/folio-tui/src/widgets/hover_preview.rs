use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popup::{rect_around, truncate_str};
use crate::app::{App, Mode};

const PREVIEW_WIDTH: u16 = 30;
const PREVIEW_HEIGHT: u16 = 7;

/// Card that follows the pointer while a project is hovered
pub struct HoverPreviewWidget;

impl HoverPreviewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if app.mode != Mode::Page {
            return;
        }
        let Some(project) = app.preview.hovered() else {
            return;
        };

        let (x, y) = app.preview.position();
        let popup = rect_around(x, y, PREVIEW_WIDTH, PREVIEW_HEIGHT, area);
        frame.render_widget(Clear, popup);

        let theme = &app.theme;
        let block = Block::default()
            .title(format!(" {} ", project.number))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let url_width = inner.width as usize;
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                project.title,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                truncate_str(&project.preview_url(), url_width),
                Style::default().fg(theme.grey1),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
