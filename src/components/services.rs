//! Services showcase: a full-viewport panel that pins (CSS sticky inside
//! a tall wrapper) while scroll progress crossfades through the service
//! panels. All interpolation lives in `motion::sequencer`; this component
//! only measures scroll position and writes the sampled styles.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::content::SERVICES;
use crate::motion::sequencer::PanelSequencer;

fn apply_poses(wrapper: &Element, sequencer: PanelSequencer) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    if viewport_h <= 0.0 {
        return;
    }

    let wrapper_top = wrapper.get_bounding_client_rect().top() + scroll_y;
    let p = sequencer.progress(scroll_y, wrapper_top, viewport_h);
    let poses = sequencer.sample(p);

    let texts = wrapper.query_selector_all(".svc-text");
    let images = wrapper.query_selector_all(".svc-img");
    let bars = wrapper.query_selector_all(".svc-bar");
    let (texts, images, bars) = match (texts, images, bars) {
        (Ok(t), Ok(i), Ok(b)) => (t, i, b),
        _ => return,
    };

    for (i, pose) in poses.iter().enumerate() {
        let i = i as u32;
        if let Some(el) = texts.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = el.set_attribute("style", &pose.text_style());
        }
        if let Some(el) = images.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = el.set_attribute("style", &pose.image_style());
        }
        if let Some(el) = bars.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = el.set_attribute("style", &pose.bar_style());
        }
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let wrapper_ref = use_node_ref();
    let sequencer = PanelSequencer::new(SERVICES.len());

    {
        let wrapper_ref = wrapper_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (
                    web_sys::window(),
                    wrapper_ref.cast::<Element>(),
                ) {
                    (Some(window), Some(wrapper)) => {
                        let callback = {
                            let wrapper = wrapper.clone();
                            Closure::wrap(Box::new(move || {
                                apply_poses(&wrapper, sequencer);
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        // a resize changes both the pin distance and the
                        // wrapper's absolute position
                        let _ = window.add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                        apply_poses(&wrapper, sequencer);
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                                let _ = win.remove_event_listener_with_callback(
                                    "resize",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => {
                        log::warn!("services: wrapper not mounted, sequencer disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    // wrapper = pin travel (N x 100vh) + one viewport for the panel
    // itself; a single panel needs no travel at all
    let wrapper_style = if SERVICES.len() > 1 {
        format!("height: {}vh;", (SERVICES.len() + 1) * 100)
    } else {
        "height: 100vh;".to_string()
    };

    html! {
        <div class="svc-wrapper" style={wrapper_style} ref={wrapper_ref}>
            <style>{SERVICES_CSS}</style>
            <div class="svc-pin">
                <div class="svc-images">
                    {
                        SERVICES.iter().enumerate().map(|(i, s)| {
                            let style = if i == 0 {
                                "opacity: 1; visibility: visible;"
                            } else {
                                "opacity: 0; visibility: hidden;"
                            };
                            html! {
                                <div key={i} class="svc-img" {style}>
                                    <img
                                        src={s.image}
                                        alt={s.title.join(" ")}
                                        loading={if i < 2 { "eager" } else { "lazy" }}
                                        decoding="async"
                                        draggable="false"
                                    />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div class="svc-fade-left"></div>
                    <div class="svc-vignette"></div>
                </div>

                <div class="svc-copy">
                    <h3 class="svc-kicker">{"Our Services"}</h3>
                    <div class="svc-stack">
                        {
                            SERVICES.iter().enumerate().map(|(i, s)| {
                                let style = if i == 0 {
                                    "opacity: 1; visibility: visible;"
                                } else {
                                    "opacity: 0; visibility: hidden;"
                                };
                                html! {
                                    <div key={i} class="svc-text" {style}>
                                        <span class="svc-tag">{ s.tag }</span>
                                        <h2>
                                            { s.title[0] }
                                            <br />
                                            { s.title[1] }
                                        </h2>
                                        <p>{ s.description }</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="svc-bars">
                        {
                            SERVICES.iter().enumerate().map(|(i, _)| {
                                let style = if i == 0 {
                                    "transform: scaleX(1); opacity: 1;"
                                } else {
                                    "transform: scaleX(0); opacity: 0.3;"
                                };
                                html! { <div key={i} class="svc-bar" {style}></div> }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

const SERVICES_CSS: &str = r#"
    .svc-wrapper {
        position: relative;
    }
    .svc-pin {
        position: sticky;
        top: 0;
        display: flex;
        align-items: center;
        width: 100%;
        height: 100vh;
        overflow: hidden;
        background: #0a0a0a;
    }
    .svc-images {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .svc-img {
        position: absolute;
        inset: 0;
        will-change: transform, opacity;
    }
    .svc-img img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        user-select: none;
    }
    .svc-fade-left {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, #0a0a0a, rgba(10,10,10,0.85) 42%, transparent);
    }
    .svc-vignette {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(10,10,10,0.6), transparent 50%, rgba(10,10,10,0.4));
    }
    .svc-copy {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        justify-content: center;
        width: 48%;
        padding: 0 64px;
    }
    .svc-kicker {
        margin: 0 0 24px;
        font-size: 0.85rem;
        font-weight: 600;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.6);
    }
    .svc-stack {
        position: relative;
        min-height: 320px;
    }
    .svc-text {
        position: absolute;
        inset: 0;
        will-change: transform, opacity;
    }
    .svc-tag {
        display: inline-block;
        margin-bottom: 24px;
        padding: 6px 16px;
        border: 1px solid #fff;
        border-radius: 999px;
        font-size: 0.9rem;
        font-weight: 600;
        letter-spacing: 0.02em;
        color: #fff;
    }
    .svc-text h2 {
        margin: 0 0 20px;
        font-size: clamp(2rem, 4.5vw, 3.6rem);
        font-weight: 700;
        line-height: 1.1;
        letter-spacing: -0.025em;
        color: #fff;
    }
    .svc-text p {
        max-width: 420px;
        margin: 0;
        font-size: clamp(0.88rem, 1.08vw, 1.06rem);
        line-height: 1.8;
        color: rgba(255, 255, 255, 0.8);
    }
    .svc-bars {
        display: flex;
        flex-direction: column;
        gap: 8px;
        margin-top: 48px;
    }
    .svc-bar {
        width: 36px;
        height: 2.5px;
        border-radius: 999px;
        background: #fff;
        transform-origin: left;
    }
    @media (max-width: 1024px) {
        .svc-copy { width: 100%; padding: 0 32px; }
    }
"#;
