//! Pinned panel sequencer.
//!
//! While a section is pinned, scroll progress is mapped to a continuous
//! position `p` in [0, n-1] over an ordered list of panels, and `sample`
//! interpolates the crossfade between consecutive panels. Everything here
//! is a pure function of `p`, which is what makes scrubbing backwards
//! exactly reverse the transition: the same scroll offset always produces
//! the same set of poses.

use crate::motion::easing::{lerp, power2_in, power3_out, window_progress};

/// Visual state of one panel at a given progress. Alpha 0 implies the
/// panel is also hidden from hit-testing (visibility: hidden), matching
/// the usual autoAlpha treatment.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PanelPose {
    pub text_alpha: f64,
    /// Text translateY in px. Negative is upward (outgoing), positive is
    /// the below-rest entry offset (incoming).
    pub text_y: f64,
    pub image_alpha: f64,
    pub image_scale: f64,
    /// Progress-indicator bar scaleX in [0, 1].
    pub bar_scale_x: f64,
    pub bar_alpha: f64,
}

impl PanelPose {
    /// Panel fully on screen, bar full and bright.
    pub fn active() -> Self {
        PanelPose {
            text_alpha: 1.0,
            text_y: 0.0,
            image_alpha: 1.0,
            image_scale: 1.0,
            bar_scale_x: 1.0,
            bar_alpha: 1.0,
        }
    }

    /// Terminal pose of a panel that has already been scrolled past.
    pub fn exited() -> Self {
        PanelPose {
            text_alpha: 0.0,
            text_y: -30.0,
            image_alpha: 0.0,
            image_scale: 1.06,
            bar_scale_x: 0.0,
            bar_alpha: 0.3,
        }
    }

    /// Resting pose of a panel that has not entered yet.
    pub fn waiting() -> Self {
        PanelPose {
            text_alpha: 0.0,
            text_y: 40.0,
            image_alpha: 0.0,
            image_scale: 1.04,
            bar_scale_x: 0.0,
            bar_alpha: 0.3,
        }
    }

    pub fn text_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px); visibility: {};",
            self.text_alpha,
            self.text_y,
            visibility(self.text_alpha),
        )
    }

    pub fn image_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: scale({:.4}); visibility: {};",
            self.image_alpha,
            self.image_scale,
            visibility(self.image_alpha),
        )
    }

    pub fn bar_style(&self) -> String {
        format!(
            "transform: scaleX({:.4}); opacity: {:.4};",
            self.bar_scale_x, self.bar_alpha,
        )
    }
}

fn visibility(alpha: f64) -> &'static str {
    if alpha <= 0.0 {
        "hidden"
    } else {
        "visible"
    }
}

/// Crossfade windows within one unit segment i -> i+1. The incoming
/// windows start before every outgoing window has finished so the two
/// panels overlap and no blank frame can occur.
const TEXT_OUT_END: f64 = 0.5;
const IMAGE_OUT_END: f64 = 0.55;
const BAR_OUT_END: f64 = 0.45;
const IN_START: f64 = 0.3;
const TEXT_IN_END: f64 = 0.85;
const IMAGE_IN_END: f64 = 0.9;
const BAR_IN_END: f64 = 0.85;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PanelSequencer {
    n: usize,
}

impl PanelSequencer {
    pub fn new(n: usize) -> Self {
        PanelSequencer { n }
    }

    /// Scroll distance the section stays pinned for, in px. Zero for a
    /// single panel: nothing to transition through, nothing to pin.
    pub fn pin_distance(&self, viewport_h: f64) -> f64 {
        if self.n <= 1 {
            0.0
        } else {
            self.n as f64 * viewport_h
        }
    }

    /// Maps an absolute scroll offset to progress in [0, n-1]. Monotonic
    /// in `scroll_y`; clamps outside the pinned range.
    pub fn progress(&self, scroll_y: f64, section_top: f64, viewport_h: f64) -> f64 {
        let distance = self.pin_distance(viewport_h);
        if distance <= 0.0 {
            return 0.0;
        }
        let raw = (scroll_y - section_top) / distance;
        raw.clamp(0.0, 1.0) * (self.n as f64 - 1.0)
    }

    /// Poses for every panel at progress `p`.
    pub fn sample(&self, p: f64) -> Vec<PanelPose> {
        if self.n == 0 {
            return Vec::new();
        }
        if self.n == 1 {
            return vec![PanelPose::active()];
        }

        let p = p.clamp(0.0, self.n as f64 - 1.0);
        // segment index and local progress within it; the last segment
        // owns its endpoint so t reaches 1.0 there
        let i = (p.floor() as usize).min(self.n - 2);
        let t = p - i as f64;

        (0..self.n)
            .map(|j| {
                if j == i {
                    Self::outgoing(t)
                } else if j == i + 1 {
                    Self::incoming(t)
                } else if j < i {
                    PanelPose::exited()
                } else {
                    PanelPose::waiting()
                }
            })
            .collect()
    }

    fn outgoing(t: f64) -> PanelPose {
        let text = power2_in(window_progress(t, 0.0, TEXT_OUT_END));
        let image = power2_in(window_progress(t, 0.0, IMAGE_OUT_END));
        let bar = window_progress(t, 0.0, BAR_OUT_END);
        PanelPose {
            text_alpha: lerp(1.0, 0.0, text),
            text_y: lerp(0.0, -30.0, text),
            image_alpha: lerp(1.0, 0.0, image),
            image_scale: lerp(1.0, 1.06, image),
            bar_scale_x: lerp(1.0, 0.0, bar),
            bar_alpha: lerp(1.0, 0.3, bar),
        }
    }

    fn incoming(t: f64) -> PanelPose {
        let text = power3_out(window_progress(t, IN_START, TEXT_IN_END));
        let image = power3_out(window_progress(t, IN_START, IMAGE_IN_END));
        let bar = window_progress(t, IN_START, BAR_IN_END);
        PanelPose {
            text_alpha: lerp(0.0, 1.0, text),
            text_y: lerp(40.0, 0.0, text),
            image_alpha: lerp(0.0, 1.0, image),
            image_scale: lerp(1.04, 1.0, image),
            bar_scale_x: lerp(0.0, 1.0, bar),
            bar_alpha: lerp(0.3, 1.0, bar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_active(pose: &PanelPose) {
        assert_eq!(pose.text_alpha, 1.0);
        assert_eq!(pose.text_y, 0.0);
        assert_eq!(pose.image_alpha, 1.0);
        assert_eq!(pose.image_scale, 1.0);
        assert_eq!(pose.bar_scale_x, 1.0);
        assert_eq!(pose.bar_alpha, 1.0);
    }

    fn assert_hidden(pose: &PanelPose) {
        assert_eq!(pose.text_alpha, 0.0);
        assert_eq!(pose.image_alpha, 0.0);
        assert_eq!(pose.bar_scale_x, 0.0);
    }

    #[test]
    fn initial_state_shows_only_panel_zero() {
        let seq = PanelSequencer::new(3);
        let poses = seq.sample(0.0);
        assert_active(&poses[0]);
        assert_hidden(&poses[1]);
        assert_hidden(&poses[2]);
    }

    #[test]
    fn integer_progress_shows_exactly_one_panel() {
        let seq = PanelSequencer::new(3);
        let poses = seq.sample(1.0);
        assert_hidden(&poses[0]);
        assert_active(&poses[1]);
        assert_hidden(&poses[2]);
    }

    #[test]
    fn terminal_state_mirrors_initial_for_last_panel() {
        let seq = PanelSequencer::new(4);
        let poses = seq.sample(3.0);
        assert_active(&poses[3]);
        for pose in &poses[..3] {
            assert_hidden(pose);
        }
    }

    #[test]
    fn round_trip_restores_initial_state() {
        let seq = PanelSequencer::new(3);
        let initial = seq.sample(0.0);
        // scrub forward to the end and back through arbitrary stops
        for p in [0.4, 1.3, 2.0, 1.7, 0.9, 0.2, 0.0] {
            let _ = seq.sample(p);
        }
        assert_eq!(seq.sample(0.0), initial);
    }

    #[test]
    fn sample_is_deterministic_at_every_point() {
        let seq = PanelSequencer::new(5);
        for i in 0..=400 {
            let p = i as f64 / 100.0;
            assert_eq!(seq.sample(p), seq.sample(p));
        }
    }

    #[test]
    fn transition_never_leaves_a_blank_frame() {
        let seq = PanelSequencer::new(3);
        for i in 0..=200 {
            let p = i as f64 / 100.0;
            let poses = seq.sample(p);
            let max_image_alpha = poses
                .iter()
                .map(|pose| pose.image_alpha)
                .fold(0.0_f64, f64::max);
            assert!(
                max_image_alpha > 0.2,
                "blank frame at p = {p}: max image alpha {max_image_alpha}"
            );
        }
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let seq = PanelSequencer::new(3);
        let vh = 900.0;
        let top = 2000.0;
        let mut prev = seq.progress(0.0, top, vh);
        assert_eq!(prev, 0.0);
        for y in (0..8000).step_by(50) {
            let p = seq.progress(y as f64, top, vh);
            assert!(p >= prev);
            assert!((0.0..=2.0).contains(&p));
            prev = p;
        }
        // past the pinned range the progress stays at the end
        assert_eq!(seq.progress(1e9, top, vh), 2.0);
    }

    #[test]
    fn pin_distance_is_n_viewports() {
        let vh = 800.0;
        assert_eq!(PanelSequencer::new(5).pin_distance(vh), 4000.0);
        assert_eq!(PanelSequencer::new(3).pin_distance(vh), 2400.0);
    }

    #[test]
    fn single_panel_degrades_to_static() {
        let seq = PanelSequencer::new(1);
        assert_eq!(seq.pin_distance(900.0), 0.0);
        assert_eq!(seq.progress(12345.0, 100.0, 900.0), 0.0);
        let poses = seq.sample(0.7);
        assert_eq!(poses.len(), 1);
        assert_active(&poses[0]);
    }

    #[test]
    fn empty_sequence_yields_no_poses() {
        assert!(PanelSequencer::new(0).sample(0.0).is_empty());
    }

    #[test]
    fn styles_render_hidden_panels_invisible() {
        let pose = PanelPose::waiting();
        assert!(pose.text_style().contains("visibility: hidden"));
        assert!(pose.image_style().contains("visibility: hidden"));
        let active = PanelPose::active();
        assert!(active.text_style().contains("visibility: visible"));
        assert!(active.bar_style().contains("scaleX(1.0000)"));
    }
}
