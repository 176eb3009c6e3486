use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::motion::HeroMotion;
use folio_core::portfolio::{self, page, Section};

use crate::app::App;
use crate::theme::Theme;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("1", "HOME"),
    ("2", "PORTFOLIO"),
    ("3", "CONTACT"),
    ("4", "PROJECTS"),
];

/// Hovered titles drop to this opacity
const HOVER_OPACITY: f64 = 0.3;

pub struct PageViewWidget;

impl PageViewWidget {
    /// Render the whole page and show the rows under the scroll offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let motion = app.hero_motion();
        let width = area.width as usize;
        let mut lines: Vec<Line> = Vec::new();

        for section in app.page.sections() {
            let mut block = match section.id {
                "hero" => hero_lines(width, &motion, &app.theme),
                "subtitle" => subtitle_lines(width, &motion, &app.theme),
                "projects" => showreel_lines(section, width, &motion, &app.theme),
                "project-list" => project_lines(width, app),
                _ => Vec::new(),
            };
            block.resize(section.height as usize, Line::default());
            lines.extend(block);
        }

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(app.theme.bg0).fg(app.theme.fg0))
            .scroll((app.scroll_row(), 0));
        frame.render_widget(paragraph, area);
    }
}

fn hero_lines(width: usize, motion: &HeroMotion, theme: &Theme) -> Vec<Line<'static>> {
    let mut nav: Vec<Span> = Vec::new();
    for (key, label) in NAV_ITEMS {
        nav.push(Span::styled(format!(" {} ", key), Style::default().fg(theme.grey0)));
        nav.push(Span::styled(
            format!("{}   ", label),
            Style::default().fg(theme.fg1),
        ));
    }

    // Scale is shown as letter spacing: 2 columns at full size, none at 0.7
    let gap = ((motion.title_scale - 0.7) / 0.3 * 2.0).round().max(0.0) as usize;
    let title: String = "MARTIN"
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(&" ".repeat(gap));

    vec![
        Line::default(),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(theme.grey0),
        )),
        Line::from(nav),
        Line::default(),
        Line::default(),
        centered(
            &title,
            width,
            Style::default()
                .fg(theme.faded(motion.title_opacity))
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

/// Location, roles and social links, side by side as one row
const SUBTITLE: [[&str; 3]; 2] = [
    ["* BASED IN SKOPJE,", "FRONTEND DEVELOPER", "FB IN LN GIT DRB"],
    ["AVAILABLE EVERYWHERE", "UI DESIGNER | GRAPHIC DESIGNER", ""],
];

fn subtitle_lines(width: usize, motion: &HeroMotion, theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme.faded(motion.subtitle_opacity));
    let mut lines = vec![Line::default()];
    for [left, center, right] in SUBTITLE {
        lines.push(Line::from(Span::styled(spread(left, center, right, width), style)));
    }
    lines
}

/// Left-, center- and right-aligned text on one line
fn spread(left: &str, center: &str, right: &str, width: usize) -> String {
    let margin = 2;
    let center_col = width.saturating_sub(center.width()) / 2;
    let right_col = width.saturating_sub(right.width() + margin);

    let mut line = format!("{}{}", " ".repeat(margin), left);
    let gap = center_col.saturating_sub(line.width()).max(2);
    line.push_str(&" ".repeat(gap));
    line.push_str(center);
    if !right.is_empty() {
        let gap = right_col.saturating_sub(line.width()).max(2);
        line.push_str(&" ".repeat(gap));
        line.push_str(right);
    }
    line
}

fn showreel_lines(
    section: &Section,
    width: usize,
    motion: &HeroMotion,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let inner = ((width as f64) * motion.showreel_scale).round() as usize;
    let inner = inner.clamp(2, width.max(2));
    let pad = " ".repeat(width.saturating_sub(inner) / 2);
    let style = Style::default().fg(theme.faded(motion.showreel_opacity));
    let rows = (section.height as usize).saturating_sub(1);

    (0..rows)
        .map(|row| {
            let body = if row == 0 {
                format!("┌{}┐", "─".repeat(inner - 2))
            } else if row + 1 == rows {
                format!("└{}┘", "─".repeat(inner - 2))
            } else if row == rows / 2 {
                let label = "▶ SHOWREEL";
                let room = inner - 2;
                let left = room.saturating_sub(label.width()) / 2;
                let right = room.saturating_sub(left + label.width());
                format!("│{}{}{}│", " ".repeat(left), label, " ".repeat(right))
            } else {
                format!("│{}│", "░".repeat(inner - 2))
            };
            Line::from(Span::styled(format!("{}{}", pad, body), style))
        })
        .collect()
}

fn project_lines(width: usize, app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = vec![Line::default()];

    if !app.projects_in_view.seen() {
        return lines;
    }

    lines.push(centered("OUR PROJECTS", width, Style::default().fg(theme.fg1)));
    lines.resize(page::PROJECT_HEADER_ROWS as usize, Line::default());

    let hovered = app.preview.hovered().map(|p| p.id);
    for (index, project) in portfolio::projects().iter().enumerate() {
        let selected = index == app.selected_project;
        let marker = if selected { "› " } else { "  " };
        let title_style = if hovered == Some(project.id) {
            Style::default().fg(theme.faded(HOVER_OPACITY))
        } else {
            Style::default().fg(theme.fg0)
        }
        .add_modifier(Modifier::BOLD);

        lines.push(Line::from(vec![
            Span::styled(format!("    {}", marker), Style::default().fg(theme.accent)),
            Span::styled(format!("{}  ", project.number), Style::default().fg(theme.faded(0.5))),
            Span::styled(project.title.to_string(), title_style),
        ]));
        lines.push(Line::default());
        lines.push(Line::default());
    }

    lines
}

fn centered(text: &str, width: usize, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(text.width()) / 2;
    Line::from(Span::styled(format!("{}{}", " ".repeat(pad), text), style))
}
