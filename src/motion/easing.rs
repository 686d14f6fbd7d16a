//! Easing curves shared by the scroll-driven timelines.
//!
//! Every curve maps a clamped [0, 1] input to [0, 1] output, so timeline
//! code can compose them with `lerp` without re-checking bounds.

pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp01(t)
}

pub fn power2_in(t: f64) -> f64 {
    let t = clamp01(t);
    t * t
}

pub fn power1_in_out(t: f64) -> f64 {
    let t = clamp01(t);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn power3_out(t: f64) -> f64 {
    let t = clamp01(t);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Maps a value within a sub-window of a larger timeline to local [0, 1]
/// progress. Returns 0 before the window and 1 after it.
pub fn window_progress(t: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if t >= end { 1.0 } else { 0.0 };
    }
    clamp01((t - start) / (end - start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for f in [power2_in, power1_in_out, power3_out] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
            // out-of-range inputs clamp rather than extrapolate
            assert_eq!(f(-2.0), 0.0);
            assert_eq!(f(3.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for f in [power2_in, power1_in_out, power3_out] {
            let mut prev = f(0.0);
            for i in 1..=100 {
                let v = f(i as f64 / 100.0);
                assert!(v >= prev, "curve decreased at step {}", i);
                prev = v;
            }
        }
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, -1.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 2.0), 20.0);
    }

    #[test]
    fn window_progress_brackets() {
        assert_eq!(window_progress(0.1, 0.3, 0.8), 0.0);
        assert_eq!(window_progress(0.9, 0.3, 0.8), 1.0);
        let mid = window_progress(0.55, 0.3, 0.8);
        assert!((mid - 0.5).abs() < 1e-9);
        // degenerate window behaves like a step
        assert_eq!(window_progress(0.2, 0.5, 0.5), 0.0);
        assert_eq!(window_progress(0.5, 0.5, 0.5), 1.0);
    }
}
