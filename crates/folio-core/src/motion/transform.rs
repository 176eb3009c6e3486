//! Scroll-linked transforms
//!
//! A transform maps a scroll offset range onto an output range linearly and
//! clamps outside it: before the input range the first output holds, after
//! it the last output holds.

use crate::scroll::timing::lerp;

/// Clamped linear mapping from scroll offset to a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Value at scroll offset `offset`
    pub fn sample(&self, offset: f64) -> f64 {
        let (lo, hi) = self.input;
        let span = hi - lo;
        if span == 0.0 {
            return if offset < lo { self.output.0 } else { self.output.1 };
        }
        let t = ((offset - lo) / span).clamp(0.0, 1.0);
        lerp(self.output.0, self.output.1, t)
    }
}

/// Transforms driving the hero section, with ranges in pixels
pub mod hero {
    use super::ScrollTransform;

    pub const TITLE_SCALE: ScrollTransform = ScrollTransform::new((0.0, 600.0), (1.0, 0.7));
    pub const TITLE_OPACITY: ScrollTransform = ScrollTransform::new((0.0, 600.0), (1.0, 0.3));
    pub const SUBTITLE_OPACITY: ScrollTransform = ScrollTransform::new((0.0, 600.0), (1.0, 0.0));
    pub const SHOWREEL_SCALE: ScrollTransform = ScrollTransform::new((100.0, 1400.0), (1.0, 0.7));
    pub const SHOWREEL_OPACITY: ScrollTransform = ScrollTransform::new((100.0, 1400.0), (1.0, 0.3));
}

/// Hero values sampled at one scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    pub title_scale: f64,
    pub title_opacity: f64,
    pub subtitle_opacity: f64,
    pub showreel_scale: f64,
    pub showreel_opacity: f64,
}

impl HeroMotion {
    /// Sample every hero transform at `offset` rows, `px_per_row` pixels each
    pub fn at(offset: f64, px_per_row: f64) -> Self {
        let px = offset * px_per_row;
        Self {
            title_scale: hero::TITLE_SCALE.sample(px),
            title_opacity: hero::TITLE_OPACITY.sample(px),
            subtitle_opacity: hero::SUBTITLE_OPACITY.sample(px),
            showreel_scale: hero::SHOWREEL_SCALE.sample(px),
            showreel_opacity: hero::SHOWREEL_OPACITY.sample(px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_interpolates_inside_range() {
        let t = hero::TITLE_SCALE;
        assert!((t.sample(0.0) - 1.0).abs() < 1e-12);
        assert!((t.sample(300.0) - 0.85).abs() < 1e-12);
        assert!((t.sample(600.0) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_sample_clamps_outside_range() {
        let t = hero::SHOWREEL_OPACITY;
        assert_eq!(t.sample(0.0), 1.0);
        assert!((t.sample(5_000.0) - 0.3).abs() < 1e-12);
        assert_eq!(hero::SUBTITLE_OPACITY.sample(-50.0), 1.0);
    }

    #[test]
    fn test_degenerate_input_range_steps() {
        let t = ScrollTransform::new((10.0, 10.0), (0.0, 1.0));
        assert_eq!(t.sample(9.0), 0.0);
        assert_eq!(t.sample(10.0), 1.0);
    }

    #[test]
    fn test_hero_motion_at_top_is_identity() {
        let motion = HeroMotion::at(0.0, 20.0);
        assert_eq!(motion.title_scale, 1.0);
        assert_eq!(motion.title_opacity, 1.0);
        assert_eq!(motion.subtitle_opacity, 1.0);
        assert_eq!(motion.showreel_scale, 1.0);
    }

    #[test]
    fn test_hero_motion_fades_subtitle_first() {
        let motion = HeroMotion::at(30.0, 20.0); // 600px
        assert!(motion.subtitle_opacity.abs() < 1e-12);
        assert!(motion.showreel_opacity > 0.3);
    }
}
