//! Hero image-card fan, scrubbed by the first stretch of page scroll.
//!
//! Cards start stacked in a face-down deck and fan out to their target
//! offsets/rotations on a shared staggered timeline. Same contract as the
//! sequencer: the pose is a pure function of scroll progress.

use crate::motion::easing::{clamp01, lerp, power1_in_out, power3_out};

/// Scroll distance (px) over which the fan plays out.
pub const FAN_SCRUB_DISTANCE: f64 = 800.0;

/// Upward settle of the whole card container once every card is fanned.
pub const CONTAINER_SETTLE_Y: f64 = -8.0;

const STAGGER_BASE: f64 = 0.12;
const STAGGER_STEP: f64 = 0.28;
const CARD_DURATION: f64 = 1.0;
const SETTLE_DURATION: f64 = 0.3;

/// Where a card ends up once fully fanned.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FanTarget {
    pub x: f64,
    pub rotate_deg: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FanPose {
    pub alpha: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
    pub z_index: i32,
}

impl FanPose {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translate({:.1}px, {:.1}px) rotate({:.2}deg) scale({:.4}); z-index: {}; visibility: {};",
            self.alpha,
            self.x,
            self.y,
            self.rotate_deg,
            self.scale,
            self.z_index,
            if self.alpha <= 0.0 { "hidden" } else { "visible" },
        )
    }
}

pub fn fan_progress(scroll_y: f64) -> f64 {
    clamp01(scroll_y / FAN_SCRUB_DISTANCE)
}

/// Point on the timeline where the last card has landed and the
/// container settle begins.
fn settle_start(count: usize) -> f64 {
    STAGGER_BASE + count.saturating_sub(1) as f64 * STAGGER_STEP + CARD_DURATION
}

fn timeline_len(count: usize) -> f64 {
    settle_start(count) + SETTLE_DURATION
}

pub fn card_pose(index: usize, count: usize, target: FanTarget, progress: f64) -> FanPose {
    if count == 0 {
        return deck_pose(0, 0);
    }
    let start = STAGGER_BASE + index as f64 * STAGGER_STEP;
    let time = clamp01(progress) * timeline_len(count);
    let t = power3_out(clamp01(time - start));

    if t <= 0.0 {
        return deck_pose(index, count);
    }
    FanPose {
        alpha: lerp(0.0, 1.0, t),
        scale: lerp(0.72, 1.0, t),
        x: lerp(0.0, target.x, t),
        y: lerp(46.0, 0.0, t),
        rotate_deg: lerp(0.0, target.rotate_deg, t),
        // cards rise above the remaining deck as they fan out
        z_index: (count + index) as i32,
    }
}

/// TranslateY of the card container at `progress`: still while the cards
/// fan out, then a short eased drift to `CONTAINER_SETTLE_Y` at the tail
/// of the timeline.
pub fn container_y(count: usize, progress: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let time = clamp01(progress) * timeline_len(count);
    let t = power1_in_out(clamp01((time - settle_start(count)) / SETTLE_DURATION));
    lerp(0.0, CONTAINER_SETTLE_Y, t)
}

fn deck_pose(index: usize, count: usize) -> FanPose {
    FanPose {
        alpha: 0.0,
        scale: 0.72,
        x: 0.0,
        y: 46.0,
        rotate_deg: 0.0,
        z_index: count.saturating_sub(index) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: FanTarget = FanTarget {
        x: 260.0,
        rotate_deg: 12.0,
    };

    #[test]
    fn zero_progress_keeps_cards_in_the_deck() {
        for i in 0..4 {
            let pose = card_pose(i, 4, TARGET, 0.0);
            assert_eq!(pose.alpha, 0.0);
            assert_eq!(pose.scale, 0.72);
            assert_eq!(pose.x, 0.0);
        }
    }

    #[test]
    fn full_progress_reaches_every_target() {
        for i in 0..4 {
            let pose = card_pose(i, 4, TARGET, 1.0);
            assert_eq!(pose.alpha, 1.0);
            assert_eq!(pose.scale, 1.0);
            assert_eq!(pose.x, TARGET.x);
            assert_eq!(pose.rotate_deg, TARGET.rotate_deg);
            assert_eq!(pose.y, 0.0);
        }
    }

    #[test]
    fn later_cards_lag_earlier_ones() {
        let p = 0.35;
        let first = card_pose(0, 4, TARGET, p);
        let last = card_pose(3, 4, TARGET, p);
        assert!(first.alpha > last.alpha);
    }

    #[test]
    fn pose_is_reversible() {
        let mid = card_pose(1, 4, TARGET, 0.5);
        for p in [0.9, 0.2, 1.0, 0.0] {
            let _ = card_pose(1, 4, TARGET, p);
        }
        assert_eq!(card_pose(1, 4, TARGET, 0.5), mid);
    }

    #[test]
    fn container_settles_after_the_cards() {
        assert_eq!(container_y(4, 0.0), 0.0);
        // still mid-fan: the container has not started drifting
        assert_eq!(container_y(4, 0.5), 0.0);
        assert_eq!(container_y(4, 1.0), CONTAINER_SETTLE_Y);
        let tail = container_y(4, 0.95);
        assert!(tail < 0.0 && tail > CONTAINER_SETTLE_Y);
        assert_eq!(container_y(0, 1.0), 0.0);
    }

    #[test]
    fn scrub_distance_maps_to_unit_progress() {
        assert_eq!(fan_progress(0.0), 0.0);
        assert_eq!(fan_progress(FAN_SCRUB_DISTANCE), 1.0);
        assert_eq!(fan_progress(FAN_SCRUB_DISTANCE * 3.0), 1.0);
        assert_eq!(fan_progress(-100.0), 0.0);
    }
}
