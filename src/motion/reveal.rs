//! Viewport-position driven reveal poses.
//!
//! The scroll handler only reads element positions and flips poses; the
//! actual animation is a CSS transition on the element. Because the pose
//! is a pure function of position, scrolling an element in, out and back
//! in again always lands on the same pose.

/// Fraction of the viewport height an element's top edge must cross
/// (scrolling down) before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.85;

/// Horizontal variant, used by the carousel cards entering from the right.
pub const REVEAL_THRESHOLD_X: f64 = 0.9;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealPose {
    Hidden,
    Shown,
}

impl RevealPose {
    /// Vertical reveal: shown once the element's top edge is above
    /// `REVEAL_THRESHOLD` of the viewport height.
    pub fn for_top(top_px: f64, viewport_h: f64) -> Self {
        if top_px < viewport_h * REVEAL_THRESHOLD {
            RevealPose::Shown
        } else {
            RevealPose::Hidden
        }
    }

    /// Horizontal reveal for cards in a sideways-scrolling strip.
    pub fn for_left(left_px: f64, viewport_w: f64) -> Self {
        if left_px < viewport_w * REVEAL_THRESHOLD_X {
            RevealPose::Shown
        } else {
            RevealPose::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, RevealPose::Shown)
    }
}

/// Decorative parallax: as an element travels from entering the viewport
/// bottom to leaving at the top, its inner image drifts up to -10% of its
/// own height. Progress 0 at `top == viewport_h`, 1 at `top == -height`.
pub fn parallax_percent(top_px: f64, height_px: f64, viewport_h: f64) -> f64 {
    let travel = viewport_h + height_px;
    if travel <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_h - top_px) / travel).clamp(0.0, 1.0);
    -10.0 * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_below_threshold_line() {
        let vh = 1000.0;
        assert_eq!(RevealPose::for_top(849.0, vh), RevealPose::Shown);
        assert_eq!(RevealPose::for_top(851.0, vh), RevealPose::Hidden);
    }

    #[test]
    fn oscillation_is_stable() {
        // scroll down past the trigger, back up above it, then down again:
        // the same positions must give the same poses every pass.
        let vh = 800.0;
        let down = RevealPose::for_top(500.0, vh);
        let up = RevealPose::for_top(700.0, vh);
        let down_again = RevealPose::for_top(500.0, vh);
        assert_eq!(down, RevealPose::Shown);
        assert_eq!(up, RevealPose::Shown); // 700 < 0.85 * 800
        assert_eq!(RevealPose::for_top(790.0, vh), RevealPose::Hidden);
        assert_eq!(down, down_again);
    }

    #[test]
    fn horizontal_variant_uses_wider_threshold() {
        let vw = 1000.0;
        assert_eq!(RevealPose::for_left(899.0, vw), RevealPose::Shown);
        assert_eq!(RevealPose::for_left(901.0, vw), RevealPose::Hidden);
    }

    #[test]
    fn parallax_spans_zero_to_minus_ten() {
        let vh = 900.0;
        let h = 300.0;
        assert_eq!(parallax_percent(vh, h, vh), 0.0);
        assert_eq!(parallax_percent(-h, h, vh), -10.0);
        let mid = parallax_percent((vh - h) / 2.0, h, vh);
        assert!(mid < 0.0 && mid > -10.0);
        // positions outside the viewport clamp
        assert_eq!(parallax_percent(vh + 500.0, h, vh), 0.0);
        assert_eq!(parallax_percent(-h - 500.0, h, vh), -10.0);
    }
}
