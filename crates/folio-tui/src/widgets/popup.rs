use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Rect of the given size centered in `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Rect of the given size centered on a point, shifted to stay inside `area`
pub(crate) fn rect_around(x: u16, y: u16, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    let x = x.saturating_sub(width / 2).clamp(area.x, max_x);
    let y = y.saturating_sub(height / 2).clamp(area.y, max_y);
    Rect::new(x, y, width, height)
}

/// Truncate a string to a display width, with ellipsis
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 3 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    format!("{}...", out)
}
