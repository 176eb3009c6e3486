//! Floating image preview that follows the pointer over the project list

use super::Project;

#[derive(Debug, Clone, Default)]
pub struct HoverPreview {
    hovered: Option<&'static Project>,
    position: (u16, u16),
}

impl HoverPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start previewing a project; the position is kept
    pub fn hover(&mut self, project: &'static Project) {
        self.hovered = Some(project);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Pointer moved to column `x`, row `y`
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.position = (x, y);
    }

    pub fn hovered(&self) -> Option<&'static Project> {
        self.hovered
    }

    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.hovered.is_some()
    }
}
