//! Vertical layout of the portfolio page in terminal rows

use crate::scroll::AnchorResolver;

use super::projects;

/// Navigation bar and the large title
pub const HERO_ROWS: f64 = 10.0;
/// Subtitle row: two lines of text plus padding
pub const SUBTITLE_ROWS: f64 = 4.0;
/// Heading above the project list
pub const PROJECT_HEADER_ROWS: f64 = 4.0;
/// One entry of the project list
pub const PROJECT_ROWS: f64 = 3.0;
/// Share of the viewport taken by the showreel block
pub const SHOWREEL_SHARE: f64 = 0.7;

/// Anchors laid out side by side on the subtitle row
pub const SUBTITLE_ANCHORS: [&str; 3] = ["home", "portfolio", "contact"];

/// One block of the page, addressable by its id
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: &'static str,
    /// Absolute row of the first line
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, row: f64) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// The page as an ordered column of sections
///
/// Heights depend on the viewport, so the layout is rebuilt on resize.
/// The showreel block carries the `projects` anchor; the list below it is
/// `project-list`.
#[derive(Debug, Clone)]
pub struct PageLayout {
    viewport_rows: u16,
    sections: Vec<Section>,
}

impl PageLayout {
    pub fn new(viewport_rows: u16) -> Self {
        let viewport = f64::from(viewport_rows);
        let showreel = (viewport * SHOWREEL_SHARE).round().max(3.0);
        let list = PROJECT_HEADER_ROWS + PROJECT_ROWS * projects().len() as f64 + 1.0;

        let heights = [
            ("hero", HERO_ROWS),
            ("subtitle", SUBTITLE_ROWS),
            ("projects", showreel),
            ("project-list", list.max(viewport)),
        ];

        let mut top = 0.0;
        let sections = heights
            .into_iter()
            .map(|(id, height)| {
                let section = Section { id, top, height };
                top += height;
                section
            })
            .collect();

        Self {
            viewport_rows,
            sections,
        }
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section an anchor points into
    ///
    /// The subtitle anchors share one row, so they resolve to the same top.
    pub fn anchor_section(&self, anchor: &str) -> Option<&Section> {
        if SUBTITLE_ANCHORS.contains(&anchor) {
            self.section("subtitle")
        } else {
            self.section(anchor)
        }
    }

    /// Every anchor name that resolves
    pub fn anchors(&self) -> Vec<&'static str> {
        SUBTITLE_ANCHORS
            .into_iter()
            .chain(
                self.sections
                    .iter()
                    .map(|s| s.id)
                    .filter(|id| *id != "subtitle"),
            )
            .collect()
    }

    /// Total height of the page
    pub fn content_height(&self) -> f64 {
        self.sections.last().map(Section::bottom).unwrap_or(0.0)
    }

    /// Section covering the given absolute row
    pub fn section_at(&self, row: f64) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(row))
    }

    /// Absolute row of the project entry at `index`
    pub fn project_top(&self, index: usize) -> Option<f64> {
        if index >= projects().len() {
            return None;
        }
        let list = self.section("project-list")?;
        Some(list.top + PROJECT_HEADER_ROWS + PROJECT_ROWS * index as f64)
    }

    /// Index of the project entry covering the given absolute row
    pub fn project_at(&self, row: f64) -> Option<usize> {
        let first = self.project_top(0)?;
        if row < first {
            return None;
        }
        let index = ((row - first) / PROJECT_ROWS).floor() as usize;
        (index < projects().len()).then_some(index)
    }
}

impl AnchorResolver for PageLayout {
    fn client_top(&self, anchor_id: &str, scroll_offset: f64) -> Option<f64> {
        self.anchor_section(anchor_id).map(|s| s.top - scroll_offset)
    }
}
