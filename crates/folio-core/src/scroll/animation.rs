//! One anchor scroll animation
//!
//! An animation is created with its start offset and distance fixed. The
//! first frame it receives stamps the start time; every frame after that
//! re-samples elapsed time against the same stamp. Once elapsed time reaches
//! the duration the animation completes and asks for nothing further.

use std::time::Duration;

use crate::config::EasingType;

use super::scheduler::FrameTime;
use super::timing::{is_complete, lerp, progress};

/// Lifecycle of a [`ScrollAnimation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Created, waiting for its first frame
    NotStarted,
    /// At least one frame ran and elapsed time is below the duration
    Running,
    /// Elapsed time reached the duration. Terminal.
    Completed,
}

/// What one frame produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Time since the first frame
    pub elapsed: Duration,
    /// Clamped progress fraction in [0, 1]
    pub progress: f64,
    /// Progress after easing
    pub eased: f64,
    /// Offset to write: `start_offset + distance * eased`
    pub offset: f64,
    /// Whether another frame is needed
    pub reschedule: bool,
}

/// Transient scroll animation from one offset to another
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    start_offset: f64,
    target_offset: f64,
    distance: f64,
    duration: Duration,
    easing: EasingType,
    start_timestamp: Option<FrameTime>,
    state: AnimationState,
}

impl ScrollAnimation {
    pub fn new(start_offset: f64, target_offset: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            start_offset,
            target_offset,
            distance: target_offset - start_offset,
            duration,
            easing,
            start_timestamp: None,
            state: AnimationState::NotStarted,
        }
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    /// Signed distance, negative when scrolling up
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Timestamp of the first frame, once one has run
    pub fn start_timestamp(&self) -> Option<FrameTime> {
        self.start_timestamp
    }

    pub fn is_complete(&self) -> bool {
        self.state == AnimationState::Completed
    }

    /// Advance the animation to the frame at `now`
    ///
    /// Returns `None` once the animation has completed; a completed
    /// animation never writes again. A timestamp earlier than the first
    /// frame counts as zero elapsed time.
    pub fn step(&mut self, now: FrameTime) -> Option<FrameSample> {
        if self.state == AnimationState::Completed {
            return None;
        }
        let start = *self.start_timestamp.get_or_insert(now);
        self.state = AnimationState::Running;

        let elapsed = now.saturating_sub(start);
        let t = progress(elapsed, self.duration);
        let eased = self.easing.apply(t);
        let offset = lerp(self.start_offset, self.target_offset, eased);
        let reschedule = !is_complete(elapsed, self.duration);

        if !reschedule {
            self.state = AnimationState::Completed;
        }

        Some(FrameSample {
            elapsed,
            progress: t,
            eased,
            offset,
            reschedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn home_from_800() -> ScrollAnimation {
        ScrollAnimation::new(800.0, 0.0, ms(1000), EasingType::EaseInOutQuad)
    }

    #[test]
    fn test_fields_fixed_at_creation() {
        let anim = home_from_800();
        assert_eq!(anim.start_offset(), 800.0);
        assert_eq!(anim.distance(), -800.0);
        assert_eq!(anim.state(), AnimationState::NotStarted);
        assert_eq!(anim.start_timestamp(), None);
    }

    #[test]
    fn test_first_frame_stamps_start_once() {
        let mut anim = home_from_800();
        let sample = anim.step(ms(5_000)).unwrap();
        assert_eq!(sample.elapsed, Duration::ZERO);
        assert_eq!(sample.offset, 800.0);
        assert!(sample.reschedule);
        assert_eq!(anim.start_timestamp(), Some(ms(5_000)));

        anim.step(ms(5_100)).unwrap();
        assert_eq!(anim.start_timestamp(), Some(ms(5_000)));
    }

    #[test]
    fn test_home_scenario_offsets() {
        let mut anim = home_from_800();
        assert_eq!(anim.step(ms(0)).unwrap().offset, 800.0);

        let mid = anim.step(ms(500)).unwrap();
        assert!((mid.eased - 0.5).abs() < 1e-12);
        assert!((mid.offset - 400.0).abs() < 1e-9);

        let last = anim.step(ms(1000)).unwrap();
        assert!(last.offset.abs() < 1e-9);
        assert!(!last.reschedule);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_long_pause_clamps_progress() {
        let mut anim = ScrollAnimation::new(0.0, 300.0, ms(1000), EasingType::EaseInOutQuad);
        anim.step(ms(0));
        let sample = anim.step(ms(4_000)).unwrap();
        assert_eq!(sample.progress, 1.0);
        assert!((sample.offset - 300.0).abs() < 1e-9);
        assert!(!sample.reschedule);
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut anim = home_from_800();
        anim.step(ms(0));
        anim.step(ms(1200));
        assert!(anim.is_complete());
        assert!(anim.step(ms(1300)).is_none());
        assert_eq!(anim.state(), AnimationState::Completed);
        assert_eq!(anim.start_timestamp(), Some(ms(0)));
    }

    #[test]
    fn test_last_frame_before_deadline_stays_running() {
        let mut anim = home_from_800();
        anim.step(ms(0));
        let sample = anim.step(ms(999)).unwrap();
        assert!(sample.reschedule);
        assert!(sample.eased < 1.0);
        assert_eq!(anim.state(), AnimationState::Running);
    }

    #[test]
    fn test_zero_duration_completes_on_first_frame() {
        let mut anim = ScrollAnimation::new(10.0, 50.0, Duration::ZERO, EasingType::EaseInOutQuad);
        let sample = anim.step(ms(42)).unwrap();
        assert_eq!(sample.offset, 50.0);
        assert!(!sample.reschedule);
        assert!(anim.is_complete());
    }
}
