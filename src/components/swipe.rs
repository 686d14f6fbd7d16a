//! Horizontal catalogue carousel: button-driven smooth scrolling, cards
//! revealing from the right edge, pointer tilt and click-to-preview.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::CATALOGUES;
use crate::motion::reveal::{parallax_percent, RevealPose};
use crate::motion::tilt::{TiltBinding, TiltConfig};
use crate::preview::{PreviewHandle, PreviewItem};

const SCROLL_STEP_PX: f64 = 350.0;

/// Reveal state from the horizontal card positions, plus the slow zoom
/// on card images while the whole strip travels through the viewport.
fn apply_scroll_state(section: &Element) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let viewport_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return;
    }

    let section_rect = section.get_bounding_client_rect();
    // parallax_percent spans 0..-10 over the section's viewport travel;
    // remap to a 1.0..1.15 zoom
    let zoom = 1.0 - parallax_percent(section_rect.top(), section_rect.height(), viewport_h) * 0.015;

    if let Ok(cards) = section.query_selector_all(".swipe-card") {
        for i in 0..cards.length() {
            let card = match cards.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(card) => card,
                None => continue,
            };
            let rect = card.get_bounding_client_rect();
            if RevealPose::for_left(rect.left(), viewport_w).is_shown() {
                let _ = card.class_list().add_1("revealed");
            } else {
                let _ = card.class_list().remove_1("revealed");
            }
            if let Ok(Some(image)) = card.query_selector(".swipe-card-image") {
                if let Ok(image) = image.dyn_into::<HtmlElement>() {
                    let _ = image
                        .style()
                        .set_property("transform", &format!("scale({:.4})", zoom));
                }
            }
        }
    }
}

#[function_component(SwipeSection)]
pub fn swipe_section() -> Html {
    let section_ref = use_node_ref();
    let container_ref = use_node_ref();
    let preview = use_context::<PreviewHandle>();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let binding = section_ref.cast::<Element>().and_then(|section| {
                    TiltBinding::attach(&section, ".swipe-card", TiltConfig::CARD).ok()
                });
                move || {
                    if let Some(binding) = binding {
                        binding.detach();
                    }
                }
            },
            (),
        );
    }

    // Cards can enter the trigger zone from two scroll sources: the page
    // scrolling vertically and the strip scrolling horizontally.
    {
        let section_ref = section_ref.clone();
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (
                    web_sys::window(),
                    section_ref.cast::<Element>(),
                    container_ref.cast::<Element>(),
                ) {
                    (Some(window), Some(section), Some(container)) => {
                        let callback = {
                            let section = section.clone();
                            Closure::wrap(Box::new(move || {
                                apply_scroll_state(&section);
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        let _ = container.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        apply_scroll_state(&section);
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                            let _ = container.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => {
                        log::warn!("swipe: section not mounted, reveal disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    let scroll_step = {
        let container_ref = container_ref.clone();
        move |direction: f64| {
            if let Some(container) = container_ref.cast::<Element>() {
                let options = ScrollToOptions::new();
                options.set_left(direction * SCROLL_STEP_PX);
                options.set_behavior(ScrollBehavior::Smooth);
                container.scroll_by_with_scroll_to_options(&options);
            }
        }
    };
    let scroll_left = {
        let scroll_step = scroll_step.clone();
        Callback::from(move |_: MouseEvent| scroll_step(-1.0))
    };
    let scroll_right = Callback::from(move |_: MouseEvent| scroll_step(1.0));

    html! {
        <section class="swipe-section" ref={section_ref}>
            <style>{SWIPE_CSS}</style>
            <div class="swipe-header">
                <h2>{"Catalogues & Brochures"}</h2>
                <div class="swipe-controls">
                    <button onclick={scroll_left} class="swipe-btn" aria-label="Scroll left">
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none">
                            <path d="M15 18L9 12L15 6" stroke="currentColor" stroke-width="2"
                                  stroke-linecap="round" stroke-linejoin="round"/>
                        </svg>
                    </button>
                    <button onclick={scroll_right} class="swipe-btn" aria-label="Scroll right">
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none">
                            <path d="M9 18L15 12L9 6" stroke="currentColor" stroke-width="2"
                                  stroke-linecap="round" stroke-linejoin="round"/>
                        </svg>
                    </button>
                </div>
            </div>
            <div class="swipe-container" ref={container_ref}>
                {
                    CATALOGUES.iter().enumerate().map(|(index, item)| {
                        let onclick = preview.as_ref().map(|handle| {
                            let open = handle.open.clone();
                            let preview_item = PreviewItem::new(item.image, item.title);
                            Callback::from(move |_: MouseEvent| open.emit(preview_item.clone()))
                        });
                        html! {
                            <div key={index} class="swipe-item">
                                <div class="swipe-card" {onclick}>
                                    <div
                                        class="swipe-card-image"
                                        style={format!("background-image: url({});", item.image)}
                                    ></div>
                                    <div class="swipe-card-shine"></div>
                                    <div class="swipe-card-content">
                                        <span class="swipe-card-type">{ item.kind }</span>
                                        {
                                            if let Some(category) = item.category {
                                                html! { <span class="swipe-card-category">{ category }</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <div class="swipe-card-bottom">
                                            <h3>{ item.title }</h3>
                                            <p>{ item.subtitle }</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

const SWIPE_CSS: &str = r#"
    .swipe-section {
        max-width: 1280px;
        margin: 0 auto;
        padding: 80px 24px;
    }
    .swipe-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 28px;
    }
    .swipe-header h2 {
        margin: 0;
        font-size: clamp(1.5rem, 2.6vw, 2.2rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        color: #fff;
    }
    .swipe-controls { display: flex; gap: 8px; }
    .swipe-btn {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 38px;
        height: 38px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        color: #fff;
        cursor: pointer;
        transition: background 0.25s ease, border-color 0.25s ease;
    }
    .swipe-btn:hover {
        background: rgba(255, 255, 255, 0.12);
        border-color: rgba(255, 255, 255, 0.3);
    }
    .swipe-container {
        display: flex;
        gap: 18px;
        overflow-x: auto;
        scroll-snap-type: x proximity;
        scrollbar-width: none;
        padding-bottom: 8px;
    }
    .swipe-container::-webkit-scrollbar { display: none; }
    .swipe-item {
        flex: 0 0 auto;
        scroll-snap-align: start;
    }
    .swipe-card {
        position: relative;
        width: 300px;
        height: 400px;
        border-radius: 16px;
        overflow: hidden;
        cursor: pointer;
        opacity: 0;
        transform: translateX(50px) rotateY(15deg);
        transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1),
                    transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
        will-change: transform;
    }
    .swipe-card.revealed {
        opacity: 1;
        transform: translateX(0) rotateY(0);
    }
    .swipe-card.is-hovering {
        z-index: 2;
        box-shadow: 0 24px 60px rgba(0, 0, 0, 0.55);
    }
    .swipe-card-image {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        transition: transform 0.2s linear;
    }
    .swipe-card-shine {
        position: absolute;
        inset: 0;
        background: linear-gradient(115deg, transparent 35%, rgba(255,255,255,0.08) 50%, transparent 65%);
        opacity: 0;
        transition: opacity 0.4s ease;
        pointer-events: none;
    }
    .swipe-card.is-hovering .swipe-card-shine { opacity: 1; }
    .swipe-card-content {
        position: absolute;
        inset: 0;
        z-index: 1;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        padding: 20px;
        background: linear-gradient(to top, rgba(0,0,0,0.65), transparent 45%);
    }
    .swipe-card-type,
    .swipe-card-category {
        padding: 4px 12px;
        margin-bottom: 6px;
        border: 1px solid rgba(255, 255, 255, 0.35);
        border-radius: 999px;
        font-size: 0.7rem;
        font-weight: 600;
        letter-spacing: 0.08em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.85);
    }
    .swipe-card-bottom {
        margin-top: auto;
    }
    .swipe-card-bottom h3 {
        margin: 0 0 4px;
        font-size: 1.3rem;
        font-weight: 700;
        letter-spacing: 0.01em;
        color: #fff;
    }
    .swipe-card-bottom p {
        margin: 0;
        font-size: 0.85rem;
        color: rgba(255, 255, 255, 0.6);
    }
    @media (max-width: 640px) {
        .swipe-section { padding: 48px 16px; }
        .swipe-card { width: 250px; height: 340px; }
    }
"#;
