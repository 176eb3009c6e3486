use std::sync::Arc;
use std::time::Instant;

use folio_core::motion::{HeroMotion, InView};
use folio_core::portfolio::{self, HoverPreview, PageLayout, Project};
use folio_core::scroll::{FrameReport, FrameTime, ScrollOutcome, Viewport};
use folio_core::AppConfig;

use crate::theme::Theme;

/// Approximate pixel height of one terminal row, for pixel-based motion ranges
pub const PX_PER_ROW: f64 = 20.0;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the portfolio page
    Page,
    /// Project page for the given project id
    Detail(&'static str),
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Owner of the page scroll offset
    pub viewport: Viewport,
    pub page: PageLayout,
    /// Origin of frame timestamps
    clock: Instant,
    /// Index into the project catalog
    pub selected_project: usize,
    pub mode: Mode,
    /// Status message
    pub status_message: Option<String>,
    pub preview: HoverPreview,
    /// Latched once the project list has been on screen
    pub projects_in_view: InView,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal width in columns
    pub width: u16,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let viewport = Viewport::new(&config.scroll);
        let mut app = Self {
            config,
            theme: Theme::default(),
            viewport,
            page: PageLayout::new(24),
            clock: Instant::now(),
            selected_project: 0,
            mode: Mode::Page,
            status_message: None,
            preview: HoverPreview::new(),
            projects_in_view: InView::default(),
            pending_key: None,
            should_quit: false,
            width: 80,
        };
        app.resize(80, 24);
        app
    }

    /// Rebuild the page for a new terminal size
    ///
    /// One row is reserved for the status bar.
    pub fn resize(&mut self, width: u16, height: u16) {
        let rows = height.saturating_sub(1).max(1);
        self.width = width;
        self.page = PageLayout::new(rows);
        self.viewport
            .set_extent(self.page.content_height(), f64::from(rows));
        self.update_in_view();
    }

    /// Timestamp of the current frame
    pub fn now(&self) -> FrameTime {
        self.clock.elapsed()
    }

    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    /// Run one animation frame and refresh scroll-dependent state
    pub fn on_frame(&mut self) -> FrameReport {
        let report = self.viewport.run_frame(self.now());
        self.update_in_view();
        report
    }

    fn update_in_view(&mut self) {
        if let Some(section) = self.page.section("project-list") {
            self.projects_in_view.update(
                section.top,
                section.height,
                self.viewport.offset(),
                f64::from(self.page.viewport_rows()),
            );
        }
    }

    /// Hero transforms at the current offset
    pub fn hero_motion(&self) -> HeroMotion {
        HeroMotion::at(self.viewport.offset(), PX_PER_ROW)
    }

    /// First page row on screen, rounded for drawing
    pub fn scroll_row(&self) -> u16 {
        self.viewport.offset().round().clamp(0.0, f64::from(u16::MAX)) as u16
    }

    /// Smooth-scroll the page to a section; leaves the detail view first
    pub fn scroll_to_anchor(&mut self, anchor: &str) -> ScrollOutcome {
        self.mode = Mode::Page;
        self.viewport.scroll_to_anchor(&self.page, anchor)
    }

    /// Project the selection and detail view refer to
    pub fn current_project(&self) -> Option<&'static Project> {
        match self.mode {
            Mode::Detail(id) => portfolio::find(id).ok(),
            _ => portfolio::projects().get(self.selected_project),
        }
    }

    pub fn move_down(&mut self) {
        if !self.projects_in_view.seen() {
            return;
        }
        let last = portfolio::projects().len().saturating_sub(1);
        self.selected_project = (self.selected_project + 1).min(last);
        self.sync_preview();
        self.place_preview_at_selection();
    }

    pub fn move_up(&mut self) {
        if !self.projects_in_view.seen() {
            return;
        }
        self.selected_project = self.selected_project.saturating_sub(1);
        self.sync_preview();
        self.place_preview_at_selection();
    }

    /// Keyboard selection has no pointer; pin the preview beside the entry
    fn place_preview_at_selection(&mut self) {
        let Some(top) = self.page.project_top(self.selected_project) else {
            return;
        };
        let row = top - f64::from(self.scroll_row());
        if row >= 0.0 && row < f64::from(self.page.viewport_rows()) {
            self.preview.move_to(self.width / 3 * 2, row as u16);
        }
    }

    /// Point the preview at the selected project
    fn sync_preview(&mut self) {
        match portfolio::projects().get(self.selected_project) {
            Some(project)
                if self.config.ui.show_preview
                    && self.mode == Mode::Page
                    && self.projects_in_view.seen() =>
            {
                self.preview.hover(project)
            }
            _ => self.preview.leave(),
        }
    }

    /// Open the selected project's page
    pub fn open_detail(&mut self) {
        if let Some(project) = portfolio::projects().get(self.selected_project) {
            self.mode = Mode::Detail(project.id);
            self.preview.leave();
        }
    }

    /// Leave the detail view or help overlay
    pub fn back(&mut self) {
        match self.mode {
            Mode::Detail(_) | Mode::Help => self.mode = Mode::Page,
            Mode::Page => self.preview.leave(),
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Page,
            _ => Mode::Help,
        };
    }

    pub fn scroll_down(&mut self) {
        if self.mode == Mode::Page {
            self.viewport
                .scroll_by(f64::from(self.config.scroll.scroll_lines));
            self.update_in_view();
        }
    }

    pub fn scroll_up(&mut self) {
        if self.mode == Mode::Page {
            self.viewport
                .scroll_by(-f64::from(self.config.scroll.scroll_lines));
            self.update_in_view();
        }
    }

    pub fn jump_to_top(&mut self) {
        self.mode = Mode::Page;
        self.viewport.scroll_to(0.0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.mode = Mode::Page;
        let bottom = self.viewport.max_offset();
        self.viewport.scroll_to(bottom);
    }

    /// Pointer moved to a screen cell; hovering a project previews it.
    /// Returns the index of the project under the pointer, if any.
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> Option<usize> {
        self.preview.move_to(column, row);
        if self.mode != Mode::Page {
            return None;
        }
        // The list is not drawn until it has come into view
        if !self.projects_in_view.seen() {
            self.preview.leave();
            return None;
        }

        let page_row = f64::from(self.scroll_row()) + f64::from(row);
        let hit = self.page.project_at(page_row);
        match hit {
            Some(index) => {
                self.selected_project = index;
                self.sync_preview();
            }
            None => self.preview.leave(),
        }
        hit
    }

    /// Click on a screen cell; clicking a project opens it
    pub fn pointer_clicked(&mut self, column: u16, row: u16) {
        if self.pointer_moved(column, row).is_some() {
            self.open_detail();
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()));
        app.resize(80, 41);
        app
    }

    fn scroll_to_bottom(app: &mut App) {
        let bottom = app.viewport.max_offset();
        app.viewport.set_offset(bottom);
        app.on_frame();
    }

    #[test]
    fn test_resize_sets_extent() {
        let app = app();
        assert_eq!(app.page.viewport_rows(), 40);
        assert_eq!(
            app.viewport.max_offset(),
            app.page.content_height() - 40.0
        );
    }

    #[test]
    fn test_scroll_to_anchor_leaves_detail() {
        let mut app = app();
        app.open_detail();
        assert_eq!(app.mode, Mode::Detail("01"));

        let outcome = app.scroll_to_anchor("contact");
        assert!(outcome.is_started());
        assert_eq!(app.mode, Mode::Page);
        assert!(app.is_animating());
    }

    #[test]
    fn test_unknown_anchor_does_nothing() {
        let mut app = app();
        assert_eq!(app.scroll_to_anchor("about"), ScrollOutcome::TargetNotFound);
        assert!(!app.is_animating());
        assert_eq!(app.viewport.offset(), 0.0);
    }

    #[test]
    fn test_selection_is_clamped_and_previewed() {
        let mut app = app();
        scroll_to_bottom(&mut app);
        app.move_up();
        assert_eq!(app.selected_project, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_project, 4);
        assert_eq!(app.preview.hovered().map(|p| p.id), Some("05"));
        assert_eq!(app.current_project().map(|p| p.title), Some("CREATIVE DIRECTR"));
    }

    #[test]
    fn test_preview_disabled_by_config() {
        let mut config = AppConfig::default();
        config.ui.show_preview = false;
        let mut app = App::new(Arc::new(config));
        app.resize(80, 41);
        scroll_to_bottom(&mut app);
        app.move_down();
        assert_eq!(app.selected_project, 1);
        assert!(!app.preview.is_visible());
    }

    #[test]
    fn test_back_from_detail() {
        let mut app = app();
        scroll_to_bottom(&mut app);
        app.move_down();
        app.open_detail();
        assert_eq!(app.current_project().map(|p| p.id), Some("02"));
        assert!(!app.preview.is_visible());

        app.back();
        assert_eq!(app.mode, Mode::Page);
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        let mut app = app();
        app.scroll_up();
        assert_eq!(app.viewport.offset(), 0.0);
        app.scroll_down();
        assert_eq!(app.viewport.offset(), 3.0);
    }

    #[test]
    fn test_pointer_over_project_selects_it() {
        let mut app = app();
        scroll_to_bottom(&mut app);

        let row = app.page.project_top(2).unwrap() - f64::from(app.scroll_row());
        assert_eq!(app.pointer_moved(10, row as u16), Some(2));
        assert_eq!(app.selected_project, 2);
        assert_eq!(app.preview.position(), (10, row as u16));

        assert_eq!(app.pointer_moved(10, 0), None);
        assert!(!app.preview.is_visible());
    }

    #[test]
    fn test_click_opens_project() {
        let mut app = app();
        scroll_to_bottom(&mut app);

        let row = app.page.project_top(3).unwrap() - f64::from(app.scroll_row());
        app.pointer_clicked(4, row as u16);
        assert_eq!(app.mode, Mode::Detail("04"));
    }

    #[test]
    fn test_click_opens_project_without_preview() {
        let mut config = AppConfig::default();
        config.ui.show_preview = false;
        let mut app = App::new(Arc::new(config));
        app.resize(80, 41);
        scroll_to_bottom(&mut app);

        let row = app.page.project_top(3).unwrap() - f64::from(app.scroll_row());
        app.pointer_clicked(4, row as u16);
        assert!(!app.preview.is_visible());
        assert_eq!(app.mode, Mode::Detail("04"));
    }

    #[test]
    fn test_undrawn_list_ignores_pointer_and_keys() {
        let mut app = app();
        // Only 6 of the list's 40 rows are on screen
        app.viewport.set_offset(8.0);
        app.on_frame();
        assert!(!app.projects_in_view.seen());

        let row = app.page.project_top(0).unwrap() - f64::from(app.scroll_row());
        assert!(row < 40.0);
        assert_eq!(app.pointer_moved(5, row as u16), None);
        assert!(!app.preview.is_visible());

        app.pointer_clicked(5, row as u16);
        assert_eq!(app.mode, Mode::Page);

        app.move_down();
        assert_eq!(app.selected_project, 0);
        assert!(!app.preview.is_visible());
    }
}
