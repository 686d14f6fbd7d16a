//! Radiating-lines canvas backdrop for the hero.
//!
//! 110 hairline rays fan out from a point just above the hero's center,
//! each wobbling slightly around its base angle while its alpha pulses.
//! The redraw loop runs on requestAnimationFrame and is cancelled in the
//! effect destructor; resize re-measures the backing buffer before the
//! next frame.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const LINE_COUNT: usize = 110;
const TIME_STEP: f64 = 0.0015;

/// Base angle plus a small time-dependent wobble for ray `i`.
pub fn ray_angle(time: f64, i: usize, count: usize) -> f64 {
    let base = (i as f64 / count as f64) * PI * 2.0;
    base + (time + i as f64 * 0.35).sin() * 0.008
}

/// Pulsing stroke alpha for ray `i`.
pub fn ray_alpha(time: f64, i: usize) -> f64 {
    0.06 + (time * 1.5 + i as f64).sin() * 0.02
}

fn resize_backing_buffer(canvas: &HtmlCanvasElement) {
    let dpr = web_sys::window().map_or(1.0, |win| win.device_pixel_ratio());
    canvas.set_width((canvas.offset_width() as f64 * dpr) as u32);
    canvas.set_height((canvas.offset_height() as f64 * dpr) as u32);
}

fn draw_frame(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, time: f64) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let dpr = web_sys::window().map_or(1.0, |win| win.device_pixel_ratio());
    ctx.clear_rect(0.0, 0.0, w, h);

    let cx = w / 2.0;
    let cy = h * 0.48;
    let max_len = w.max(h) * 1.2;

    ctx.set_shadow_blur(6.0 * dpr);
    ctx.set_shadow_color("rgba(170,160,255,0.06)");
    ctx.set_line_width(1.2 * dpr);

    for i in 0..LINE_COUNT {
        let a = ray_angle(time, i, LINE_COUNT);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + a.cos() * max_len, cy + a.sin() * max_len);
        ctx.set_stroke_style_str(&format!("rgba(255,255,255,{:.4})", ray_alpha(time, i)));
        ctx.stroke();
    }
}

#[function_component(RadiatingLines)]
pub fn radiating_lines() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match setup(&canvas_ref) {
                    Some(d) => d,
                    None => {
                        log::warn!("rays: canvas not available, effect disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="rays-canvas"></canvas>
    }
}

fn setup(canvas_ref: &NodeRef) -> Option<Box<dyn FnOnce()>> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let window = web_sys::window()?;

    resize_backing_buffer(&canvas);

    let resize_callback = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            resize_backing_buffer(&canvas);
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        .ok()?;

    let raf_id = Rc::new(Cell::new(None::<i32>));
    let time = Rc::new(Cell::new(0.0_f64));
    // self-scheduling frame callback; the outer Rc keeps it alive until
    // the destructor drops it
    let draw: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let draw_handle = draw.clone();
        let raf_id = raf_id.clone();
        let time = time.clone();
        *draw.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            time.set(time.get() + TIME_STEP);
            draw_frame(&ctx, &canvas, time.get());
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
        draw.borrow_mut().take();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_stays_within_visible_band() {
        for i in 0..LINE_COUNT {
            for step in 0..100 {
                let a = ray_alpha(step as f64 * 0.1, i);
                assert!((0.0399..=0.0801).contains(&a), "alpha {} out of band", a);
            }
        }
    }

    #[test]
    fn rays_cover_the_full_circle() {
        let first = ray_angle(0.0, 0, LINE_COUNT);
        let last = ray_angle(0.0, LINE_COUNT - 1, LINE_COUNT);
        assert!(last - first > PI * 2.0 * 0.95);
    }

    #[test]
    fn wobble_is_bounded() {
        for i in 0..LINE_COUNT {
            let base = (i as f64 / LINE_COUNT as f64) * PI * 2.0;
            for step in 0..50 {
                let delta = ray_angle(step as f64 * 0.2, i, LINE_COUNT) - base;
                assert!(delta.abs() <= 0.008 + 1e-12);
            }
        }
    }
}
