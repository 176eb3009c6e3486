use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::popup::truncate_str;
use crate::app::App;

pub struct ProjectDetailWidget;

impl ProjectDetailWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            area,
        );

        let Some(project) = app.current_project() else {
            let missing = Paragraph::new("Loading...").style(Style::default().fg(theme.grey1));
            frame.render_widget(missing, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(12), // Image
                Constraint::Min(2),    // Description
                Constraint::Length(1), // Hint
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(format!("{}  ", project.number), Style::default().fg(theme.grey0)),
            Span::styled(
                project.title,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(title, chunks[0]);

        let image = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .title(" 600 × 400 ");
        let image_inner = image.inner(chunks[1]);
        frame.render_widget(image, chunks[1]);
        let url = truncate_str(&project.image_url(), image_inner.width as usize);
        frame.render_widget(
            Paragraph::new(vec![Line::default(), Line::from(url)])
                .style(Style::default().fg(theme.grey1))
                .alignment(Alignment::Center),
            image_inner,
        );

        let description = Paragraph::new(project.description)
            .style(Style::default().fg(theme.fg1))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[2]);

        let keymap = &app.config.keymap;
        let hint = format!(
            "{}: open image  {}: back  {}: home",
            keymap.open_link, keymap.back, keymap.goto_home
        );
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(theme.grey0)),
            chunks[3],
        );
    }
}
