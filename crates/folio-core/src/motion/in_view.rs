//! In-view detection for page sections

/// Visibility threshold for one section
///
/// A section counts as in view when at least `amount` of its height lies
/// inside the viewport. With `once` set, the first positive answer sticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InView {
    amount: f64,
    once: bool,
    seen: bool,
}

impl Default for InView {
    fn default() -> Self {
        Self::new(0.2, true)
    }
}

impl InView {
    pub fn new(amount: f64, once: bool) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            once,
            seen: false,
        }
    }

    /// Update with the section's extent and the current viewport window
    ///
    /// Returns whether the section is considered in view.
    pub fn update(&mut self, section_top: f64, section_height: f64, view_top: f64, view_height: f64) -> bool {
        if self.once && self.seen {
            return true;
        }
        let visible = visible_fraction(section_top, section_height, view_top, view_height);
        let in_view = visible > 0.0 && visible >= self.amount;
        if in_view {
            self.seen = true;
        }
        in_view
    }

    /// Whether the section has ever been in view
    pub fn seen(&self) -> bool {
        self.seen
    }
}

/// Fraction of `[top, top + height)` covered by the viewport window
pub fn visible_fraction(top: f64, height: f64, view_top: f64, view_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    ((end - start) / height).clamp(0.0, 1.0)
}
