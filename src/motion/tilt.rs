//! Pointer-following 3D tilt for card-like elements.
//!
//! The pose math is pure; `TiltBinding` wires it to the DOM. Rapid
//! pointermove events are coalesced through a single pending
//! animation-frame token so each frame applies at most one transform
//! write. Pointerleave drops any pending write and releases the inline
//! transform entirely, handing the property back to the stylesheet.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, MouseEvent};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TiltConfig {
    /// Max rotation around the X axis, in degrees, reached at the
    /// element's top/bottom edge.
    pub max_rx_deg: f64,
    /// Max rotation around the Y axis, reached at the left/right edge.
    pub max_ry_deg: f64,
    /// Uniform scale-up applied while the pointer is over the element.
    pub scale: f64,
    pub perspective_px: f64,
}

impl TiltConfig {
    /// Grid tiles: subtle tilt.
    pub const GRID: TiltConfig = TiltConfig {
        max_rx_deg: 4.0,
        max_ry_deg: 6.0,
        scale: 1.03,
        perspective_px: 800.0,
    };

    /// Carousel cards: stronger tilt, tighter perspective.
    pub const CARD: TiltConfig = TiltConfig {
        max_rx_deg: 6.0,
        max_ry_deg: 8.0,
        scale: 1.03,
        perspective_px: 700.0,
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TiltPose {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    perspective_px: f64,
}

impl TiltPose {
    pub fn identity(cfg: TiltConfig) -> Self {
        TiltPose {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            perspective_px: cfg.perspective_px,
        }
    }

    /// Pose for a pointer at (x, y) within an element of the given size,
    /// both in px relative to the element's top-left corner.
    pub fn from_pointer(cfg: TiltConfig, width: f64, height: f64, x: f64, y: f64) -> Self {
        let cx = width / 2.0;
        let cy = height / 2.0;
        if cx <= 0.0 || cy <= 0.0 {
            return Self::identity(cfg);
        }
        let rotate_y = (((x - cx) / cx) * cfg.max_ry_deg).clamp(-cfg.max_ry_deg, cfg.max_ry_deg);
        let rotate_x = (((cy - y) / cy) * cfg.max_rx_deg).clamp(-cfg.max_rx_deg, cfg.max_rx_deg);
        TiltPose {
            rotate_x,
            rotate_y,
            scale: cfg.scale,
            perspective_px: cfg.perspective_px,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.perspective_px,
            self.rotate_x,
            self.rotate_y,
            s = self.scale,
        )
    }
}

/// Inline transform for the current hover pose. `None` once the pointer
/// has left: class-driven poses (the reveal offsets in particular) keep
/// control of the property, an inline identity would shadow them.
fn inline_transform(pose: Option<&TiltPose>) -> Option<String> {
    pose.map(TiltPose::transform)
}

fn write_transform(card: &HtmlElement, pose: Option<&TiltPose>) {
    match inline_transform(pose) {
        Some(transform) => {
            let _ = card.style().set_property("transform", &transform);
        }
        None => {
            let _ = card.style().remove_property("transform");
        }
    }
}

/// Live tilt listeners over every element matching `selector` inside a
/// container. Hold on to the binding for the lifetime of the section and
/// call [`TiltBinding::detach`] in the effect destructor.
pub struct TiltBinding {
    cards: Vec<Element>,
    on_enter: Closure<dyn FnMut(MouseEvent)>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
    raf_id: Rc<Cell<Option<i32>>>,
    // kept alive for the pending animation frame
    _apply: Rc<Closure<dyn FnMut()>>,
}

impl TiltBinding {
    pub fn attach(container: &Element, selector: &str, cfg: TiltConfig) -> Result<TiltBinding, JsValue> {
        let nodes = container.query_selector_all(selector)?;
        let mut cards = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                cards.push(el);
            }
        }
        if cards.is_empty() {
            warn!("tilt: no elements matched {:?}", selector);
        }

        // One pending (element, pose) pair shared by all cards; the frame
        // callback applies whichever write came in last.
        let pending: Rc<RefCell<Option<(HtmlElement, TiltPose)>>> = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let apply: Rc<Closure<dyn FnMut()>> = {
            let pending = pending.clone();
            let raf_id = raf_id.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                raf_id.set(None);
                if let Some((card, pose)) = pending.borrow_mut().take() {
                    write_transform(&card, Some(&pose));
                }
            }) as Box<dyn FnMut()>))
        };

        let on_enter = Closure::wrap(Box::new(move |e: MouseEvent| {
            if let Some(card) = event_card(&e) {
                let _ = card.class_list().add_1("is-hovering");
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let on_move = {
            let pending = pending.clone();
            let raf_id = raf_id.clone();
            let apply = apply.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let card = match event_card(&e) {
                    Some(card) => card,
                    None => return,
                };
                let rect = card.get_bounding_client_rect();
                let pose = TiltPose::from_pointer(
                    cfg,
                    rect.width(),
                    rect.height(),
                    f64::from(e.client_x()) - rect.left(),
                    f64::from(e.client_y()) - rect.top(),
                );
                *pending.borrow_mut() = Some((card, pose));
                if raf_id.get().is_none() {
                    if let Some(window) = web_sys::window() {
                        if let Ok(id) =
                            window.request_animation_frame(apply.as_ref().as_ref().unchecked_ref())
                        {
                            raf_id.set(Some(id));
                        }
                    }
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let on_leave = {
            let pending = pending.clone();
            let raf_id = raf_id.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                // Drop any pending move so a queued frame cannot re-tilt
                // the card after the pointer has left.
                pending.borrow_mut().take();
                if let Some(id) = raf_id.take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(id);
                    }
                }
                if let Some(card) = event_card(&e) {
                    let _ = card.class_list().remove_1("is-hovering");
                    write_transform(&card, None);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        for card in &cards {
            card.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
            card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        }

        Ok(TiltBinding {
            cards,
            on_enter,
            on_move,
            on_leave,
            raf_id,
            _apply: apply,
        })
    }

    pub fn detach(self) {
        for card in &self.cards {
            let _ = card.remove_event_listener_with_callback(
                "mouseenter",
                self.on_enter.as_ref().unchecked_ref(),
            );
            let _ = card.remove_event_listener_with_callback(
                "mousemove",
                self.on_move.as_ref().unchecked_ref(),
            );
            let _ = card.remove_event_listener_with_callback(
                "mouseleave",
                self.on_leave.as_ref().unchecked_ref(),
            );
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

fn event_card(e: &MouseEvent) -> Option<HtmlElement> {
    e.current_target()?.dyn_into::<HtmlElement>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pointer_yields_zero_rotation() {
        let pose = TiltPose::from_pointer(TiltConfig::GRID, 200.0, 100.0, 100.0, 50.0);
        assert_eq!(pose.rotate_x, 0.0);
        assert_eq!(pose.rotate_y, 0.0);
        assert_eq!(pose.scale, TiltConfig::GRID.scale);
    }

    #[test]
    fn right_edge_mid_height_yields_max_positive_y_rotation() {
        let cfg = TiltConfig::CARD;
        let pose = TiltPose::from_pointer(cfg, 300.0, 400.0, 300.0, 200.0);
        assert_eq!(pose.rotate_y, cfg.max_ry_deg);
        assert_eq!(pose.rotate_x, 0.0);
    }

    #[test]
    fn top_edge_tilts_away_from_pointer() {
        let cfg = TiltConfig::GRID;
        let pose = TiltPose::from_pointer(cfg, 200.0, 200.0, 100.0, 0.0);
        assert_eq!(pose.rotate_x, cfg.max_rx_deg);
        assert_eq!(pose.rotate_y, 0.0);
    }

    #[test]
    fn pointer_outside_bounds_is_clamped() {
        let cfg = TiltConfig::GRID;
        let pose = TiltPose::from_pointer(cfg, 200.0, 200.0, 500.0, -80.0);
        assert_eq!(pose.rotate_y, cfg.max_ry_deg);
        assert_eq!(pose.rotate_x, cfg.max_rx_deg);
    }

    #[test]
    fn identity_transform_is_neutral() {
        let t = TiltPose::identity(TiltConfig::CARD).transform();
        assert!(t.contains("rotateX(0.00deg)"));
        assert!(t.contains("rotateY(0.00deg)"));
        assert!(t.contains("scale3d(1, 1, 1)"));
    }

    #[test]
    fn pointer_leave_releases_the_inline_transform() {
        let pose = TiltPose::from_pointer(TiltConfig::GRID, 200.0, 200.0, 150.0, 40.0);
        assert!(inline_transform(Some(&pose)).unwrap().contains("rotateX"));
        // no inline value after leave: a once-hovered card must still
        // follow its class-driven reveal pose
        assert_eq!(inline_transform(None), None);
    }

    #[test]
    fn degenerate_element_size_is_identity() {
        let pose = TiltPose::from_pointer(TiltConfig::GRID, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(pose, TiltPose::identity(TiltConfig::GRID));
    }
}
