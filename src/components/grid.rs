//! Category image grid: reversible scroll reveal per tile, pointer tilt,
//! a slow image parallax, and click-to-preview.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::content::GRID_ITEMS;
use crate::motion::reveal::{parallax_percent, RevealPose};
use crate::motion::tilt::{TiltBinding, TiltConfig};
use crate::preview::{PreviewHandle, PreviewItem};

fn apply_scroll_state(grid: &Element) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if viewport_h <= 0.0 {
        return;
    }

    if let Ok(items) = grid.query_selector_all(".grid-item") {
        for i in 0..items.length() {
            let item = match items.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(item) => item,
                None => continue,
            };
            let rect = item.get_bounding_client_rect();
            if RevealPose::for_top(rect.top(), viewport_h).is_shown() {
                let _ = item.class_list().add_1("revealed");
            } else {
                let _ = item.class_list().remove_1("revealed");
            }

            if let Ok(Some(img)) = item.query_selector(".grid-image") {
                if let Ok(img) = img.dyn_into::<HtmlElement>() {
                    let pct = parallax_percent(rect.top(), rect.height(), viewport_h);
                    let _ = img
                        .style()
                        .set_property("transform", &format!("translateY({:.3}%)", pct));
                }
            }
        }
    }
}

#[function_component(MainGrid)]
pub fn main_grid() -> Html {
    let grid_ref = use_node_ref();
    let preview = use_context::<PreviewHandle>();

    // pointer tilt over every tile
    {
        let grid_ref = grid_ref.clone();
        use_effect_with_deps(
            move |_| {
                let binding = grid_ref
                    .cast::<Element>()
                    .and_then(|grid| TiltBinding::attach(&grid, ".grid-item", TiltConfig::GRID).ok());
                move || {
                    if let Some(binding) = binding {
                        binding.detach();
                    }
                }
            },
            (),
        );
    }

    // reveal + parallax from the window scroll position
    {
        let grid_ref = grid_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (
                    web_sys::window(),
                    grid_ref.cast::<Element>(),
                ) {
                    (Some(window), Some(grid)) => {
                        let callback = {
                            let grid = grid.clone();
                            Closure::wrap(Box::new(move || {
                                apply_scroll_state(&grid);
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        apply_scroll_state(&grid);
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => {
                        log::warn!("grid: section not mounted, reveal disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <section id="products" class="main-grid" ref={grid_ref}>
            <style>{GRID_CSS}</style>
            {
                GRID_ITEMS.iter().map(|item| {
                    let onclick = preview.as_ref().map(|handle| {
                        let open = handle.open.clone();
                        let preview_item = PreviewItem::new(item.image, item.label);
                        Callback::from(move |_: MouseEvent| open.emit(preview_item.clone()))
                    });
                    html! {
                        <div key={item.label} class="grid-item" {onclick}>
                            <img
                                src={item.image}
                                alt={item.label}
                                class="grid-image"
                                loading="lazy"
                                draggable="false"
                            />
                            <div class="grid-overlay"></div>
                            <div class="grid-shine"></div>
                            <span class="grid-label">{ item.label }</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </section>
    }
}

const GRID_CSS: &str = r#"
    .main-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 14px;
        max-width: 1280px;
        margin: 0 auto;
        padding: 80px 24px;
    }
    .grid-item {
        position: relative;
        height: 320px;
        border-radius: 16px;
        overflow: hidden;
        cursor: pointer;
        opacity: 0;
        transform: translateY(60px) scale(0.95);
        transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1),
                    transform 0.8s cubic-bezier(0.16, 1, 0.3, 1),
                    box-shadow 0.4s ease;
        will-change: transform;
    }
    .grid-item.revealed {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
    .grid-item.is-hovering {
        z-index: 2;
        transition: box-shadow 0.4s ease;
        box-shadow: 0 24px 60px rgba(0, 0, 0, 0.55);
    }
    .grid-image {
        display: block;
        width: 100%;
        height: 112%;
        object-fit: cover;
        user-select: none;
    }
    .grid-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0,0,0,0.55), transparent 55%);
        transition: opacity 0.4s ease;
    }
    .grid-shine {
        position: absolute;
        inset: 0;
        background: linear-gradient(115deg, transparent 35%, rgba(255,255,255,0.08) 50%, transparent 65%);
        opacity: 0;
        transition: opacity 0.4s ease;
        pointer-events: none;
    }
    .grid-item.is-hovering .grid-shine { opacity: 1; }
    .grid-label {
        position: absolute;
        left: 20px;
        bottom: 18px;
        z-index: 2;
        font-size: 1.05rem;
        font-weight: 600;
        letter-spacing: 0.01em;
        color: #fff;
        text-shadow: 0 1px 6px rgba(0, 0, 0, 0.5);
    }
    @media (max-width: 1024px) {
        .main-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (max-width: 640px) {
        .main-grid { grid-template-columns: 1fr; padding: 48px 16px; }
        .grid-item { height: 260px; }
    }
"#;
