//! Time calculation utilities for scroll animations
//!
//! Pure functions over elapsed time; the caller owns the clock.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// # Returns
/// Progress clamped to [0.0, 1.0]. A zero duration is immediately complete.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.min(1.0)
}

/// Check if an animation with the given elapsed time has run its course
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(800.0, 0.0, 0.5) - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_is_clamped_after_long_pause() {
        let duration = Duration::from_millis(1000);
        assert!((progress(Duration::from_millis(250), duration) - 0.25).abs() < 1e-9);
        assert_eq!(progress(Duration::from_millis(5000), duration), 1.0);
    }

    #[test]
    fn test_is_complete_at_boundary() {
        let duration = Duration::from_millis(1000);
        assert!(!is_complete(Duration::from_millis(999), duration));
        assert!(is_complete(Duration::from_millis(1000), duration));
    }
}
