//! Pure easing curves mapping progress [0, 1] to displacement [0, 1]

use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// `t` is clamped to [0, 1] before the curve is evaluated.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOutQuad => ease_in_out_quad(t),
            EasingType::EaseIn => t * t * t,
            EasingType::EaseOut => cubic_ease_out(t),
        }
    }
}

/// Quadratic ease-in-out
///
/// Accelerates over the first half of progress and decelerates over the
/// second, symmetric around t = 0.5:
/// f(t) = 2t² for t < 0.5, -1 + (4 - 2t)t otherwise.
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseInOutQuad,
        EasingType::EaseIn,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-12, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=1000 {
                let t = i as f64 / 1000.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_quad_piecewise_definition() {
        for i in 0..=50 {
            let t = i as f64 / 100.0;
            assert!((ease_in_out_quad(t) - 2.0 * t * t).abs() < 1e-12, "t={}", t);
        }
        for i in 51..=100 {
            let t = i as f64 / 100.0;
            let expected = -1.0 + (4.0 - 2.0 * t) * t;
            assert!((ease_in_out_quad(t) - expected).abs() < 1e-12, "t={}", t);
        }
    }

    #[test]
    fn test_quad_is_continuous_and_symmetric() {
        // Both branches meet at the midpoint.
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-12);
        let eps = 1e-9;
        assert!((ease_in_out_quad(0.5 - eps) - ease_in_out_quad(0.5 + eps)).abs() < 1e-6);

        // f(t) + f(1 - t) == 1
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let sum = ease_in_out_quad(t) + ease_in_out_quad(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12, "t={}", t);
        }
    }

    #[test]
    fn test_apply_clamps_out_of_range_progress() {
        assert_eq!(EasingType::EaseInOutQuad.apply(-0.5), 0.0);
        assert_eq!(EasingType::EaseInOutQuad.apply(3.0), 1.0);
    }
}
