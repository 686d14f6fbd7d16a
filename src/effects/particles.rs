//! Ambient particle field behind the hero.
//!
//! A handful of slow-drifting dots that shy away from the pointer. The
//! simulation is plain math over a `Vec<Particle>`; the component owns
//! the rAF loop, the resize re-measure and the pointermove listener, and
//! tears all three down with the effect.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

const MAX_PARTICLES: usize = 50;
const AREA_PER_PARTICLE: f64 = 20_000.0;
const REPEL_RADIUS: f64 = 100.0;
const REPEL_STRENGTH: f64 = 0.4;
const WRAP_MARGIN: f64 = 4.0;

/// Pointer position treated as "nowhere" until the first move event.
pub const POINTER_AWAY: (f64, f64) = (-9999.0, -9999.0);

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

impl Particle {
    /// Spawns from a uniform [0, 1) source so the simulation stays
    /// deterministic under test.
    pub fn spawn(w: f64, h: f64, rng: &mut impl FnMut() -> f64) -> Self {
        Particle {
            x: rng() * w,
            y: rng() * h,
            radius: rng() * 1.2 + 0.3,
            dx: (rng() - 0.5) * 0.15,
            dy: (rng() - 0.5) * 0.15,
            opacity: rng() * 0.3 + 0.08,
        }
    }

    /// One simulation step: pointer repulsion, drift, toroidal wrap.
    pub fn advance(&mut self, w: f64, h: f64, pointer: (f64, f64)) {
        let mdx = self.x - pointer.0;
        let mdy = self.y - pointer.1;
        let dist = (mdx * mdx + mdy * mdy).sqrt();
        if dist > 0.0 && dist < REPEL_RADIUS {
            let force = ((REPEL_RADIUS - dist) / REPEL_RADIUS) * REPEL_STRENGTH;
            self.x += (mdx / dist) * force;
            self.y += (mdy / dist) * force;
        }
        self.x += self.dx;
        self.y += self.dy;
        if self.x < -WRAP_MARGIN {
            self.x = w + WRAP_MARGIN;
        }
        if self.x > w + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
        }
        if self.y < -WRAP_MARGIN {
            self.y = h + WRAP_MARGIN;
        }
        if self.y > h + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
        }
    }
}

/// Particle count scales with area, capped at `MAX_PARTICLES`.
pub fn spawn_count(w: f64, h: f64) -> usize {
    ((w * h / AREA_PER_PARTICLE) as usize).min(MAX_PARTICLES)
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match setup(&canvas_ref) {
                    Some(d) => d,
                    None => {
                        log::warn!("particles: canvas not available, effect disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas"></canvas>
    }
}

fn js_rng() -> impl FnMut() -> f64 {
    || web_sys::js_sys::Math::random()
}

fn respawn(particles: &Rc<RefCell<Vec<Particle>>>, canvas: &HtmlCanvasElement) {
    let w = canvas.offset_width() as f64;
    let h = canvas.offset_height() as f64;
    let mut rng = js_rng();
    let mut list = particles.borrow_mut();
    list.clear();
    for _ in 0..spawn_count(w, h) {
        list.push(Particle::spawn(w, h, &mut rng));
    }
}

fn resize_backing_buffer(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
    let dpr = web_sys::window().map_or(1.0, |win| win.device_pixel_ratio());
    canvas.set_width((canvas.offset_width() as f64 * dpr) as u32);
    canvas.set_height((canvas.offset_height() as f64 * dpr) as u32);
    // draw in CSS pixels from here on
    let _ = ctx.scale(dpr, dpr);
}

fn setup(canvas_ref: &NodeRef) -> Option<Box<dyn FnOnce()>> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let window = web_sys::window()?;

    let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(Vec::new()));
    let pointer = Rc::new(Cell::new(POINTER_AWAY));

    resize_backing_buffer(&canvas, &ctx);
    respawn(&particles, &canvas);

    let resize_callback = {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let particles = particles.clone();
        Closure::wrap(Box::new(move || {
            resize_backing_buffer(&canvas, &ctx);
            respawn(&particles, &canvas);
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        .ok()?;

    let move_callback = {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            pointer.set((
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
            ));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas
        .add_event_listener_with_callback("pointermove", move_callback.as_ref().unchecked_ref())
        .ok()?;

    let raf_id = Rc::new(Cell::new(None::<i32>));
    let draw: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let draw_handle = draw.clone();
        let raf_id = raf_id.clone();
        let particles = particles.clone();
        let pointer = pointer.clone();
        let canvas = canvas.clone();
        *draw.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let w = canvas.offset_width() as f64;
            let h = canvas.offset_height() as f64;
            ctx.clear_rect(0.0, 0.0, w, h);
            for p in particles.borrow_mut().iter_mut() {
                p.advance(w, h, pointer.get());
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
                ctx.set_fill_style_str(&format!("rgba(255,255,255,{:.4})", p.opacity));
                ctx.fill();
            }
            if let (Some(window), Some(cb)) = (web_sys::window(), draw_handle.borrow().as_ref()) {
                raf_id.set(
                    window
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut()>));
    }

    if let Some(cb) = draw.borrow().as_ref() {
        raf_id.set(
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok(),
        );
    }

    Some(Box::new(move || {
        if let Some(id) = raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                resize_callback.as_ref().unchecked_ref(),
            );
        }
        let _ = canvas.remove_event_listener_with_callback(
            "pointermove",
            move_callback.as_ref().unchecked_ref(),
        );
        draw.borrow_mut().take();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or(0.5)
    }

    #[test]
    fn spawn_count_scales_with_area_and_caps() {
        assert_eq!(spawn_count(0.0, 0.0), 0);
        assert_eq!(spawn_count(200.0, 200.0), 2);
        assert_eq!(spawn_count(4000.0, 4000.0), MAX_PARTICLES);
    }

    #[test]
    fn drift_moves_particles_without_pointer() {
        let mut p = Particle {
            x: 50.0,
            y: 50.0,
            radius: 1.0,
            dx: 0.1,
            dy: -0.05,
            opacity: 0.2,
        };
        p.advance(200.0, 200.0, POINTER_AWAY);
        assert!((p.x - 50.1).abs() < 1e-12);
        assert!((p.y - 49.95).abs() < 1e-12);
    }

    #[test]
    fn wraps_around_every_edge() {
        let (w, h) = (100.0, 100.0);
        let mut p = Particle {
            x: w + WRAP_MARGIN - 0.01,
            y: 50.0,
            radius: 1.0,
            dx: 1.0,
            dy: 0.0,
            opacity: 0.2,
        };
        p.advance(w, h, POINTER_AWAY);
        assert_eq!(p.x, -WRAP_MARGIN);

        p.dx = -1.0;
        p.x = -WRAP_MARGIN + 0.01;
        p.advance(w, h, POINTER_AWAY);
        assert_eq!(p.x, w + WRAP_MARGIN);
    }

    #[test]
    fn pointer_repels_nearby_particles() {
        let mut p = Particle {
            x: 60.0,
            y: 50.0,
            radius: 1.0,
            dx: 0.0,
            dy: 0.0,
            opacity: 0.2,
        };
        // pointer 10px to the left: particle pushed right
        p.advance(500.0, 500.0, (50.0, 50.0));
        assert!(p.x > 60.0);
        assert_eq!(p.y, 50.0);

        // out of range: no push
        let mut far = p;
        let before = far.x;
        far.advance(500.0, 500.0, (before - REPEL_RADIUS - 50.0, 50.0));
        assert_eq!(far.x, before);
    }

    #[test]
    fn spawned_particles_land_inside_the_field() {
        let mut rng = fixed_rng(vec![0.0, 0.25, 0.5, 0.75, 0.99]);
        for _ in 0..20 {
            let p = Particle::spawn(300.0, 200.0, &mut rng);
            assert!((0.0..300.0).contains(&p.x));
            assert!((0.0..200.0).contains(&p.y));
            assert!(p.radius >= 0.3 && p.radius <= 1.5);
            assert!(p.opacity >= 0.08 && p.opacity <= 0.38);
        }
    }
}
