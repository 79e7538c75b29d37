// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The easing curve used for section transitions.

/// Cubic ease-out: `1 - (1 - p)^3`.
///
/// `p` is clamped to `[0, 1]` first, so `ease_out_cubic(0) == 0`,
/// `ease_out_cubic(1) == 1`, and the curve is non-decreasing in between.
/// Non-finite input is treated as zero progress.
#[inline]
#[must_use]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert_eq!(ease_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn curve_is_monotonic() {
        let mut prev = ease_out_cubic(0.0);
        for step in 1..=1000 {
            let p = f64::from(step) / 1000.0;
            let v = ease_out_cubic(p);
            assert!(v >= prev, "eased({p}) = {v} fell below {prev}");
            prev = v;
        }
    }

    #[test]
    fn front_loaded() {
        // Ease-out covers most of the distance early.
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }
}
