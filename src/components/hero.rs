//! Hero section: canvas backdrops, staggered headline entrance and the
//! scroll-scrubbed image-card fan.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::content::{HERO_CARDS, HERO_FEATURES};
use crate::effects::particles::ParticleCanvas;
use crate::effects::rays::RadiatingLines;
use crate::motion::fan::{card_pose, container_y, fan_progress, FanTarget};

fn apply_fan(section: &Element, scroll_y: f64) {
    let cards = match section.query_selector_all(".hero-img-card") {
        Ok(cards) => cards,
        Err(_) => return,
    };
    let progress = fan_progress(scroll_y);
    let count = cards.length() as usize;
    for i in 0..count {
        let card = match cards.get(i as u32).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(card) => card,
            None => continue,
        };
        let target = HERO_CARDS
            .get(i)
            .map(|c| FanTarget {
                x: c.x,
                rotate_deg: c.rotate_deg,
            })
            .unwrap_or(FanTarget {
                x: 0.0,
                rotate_deg: 0.0,
            });
        let pose = card_pose(i, count, target, progress);
        let _ = card.set_attribute("style", &pose.style());
    }
    if let Ok(Some(container)) = section.query_selector(".hero-cards-fan") {
        let _ = container.set_attribute(
            "style",
            &format!("transform: translateY({:.2}px);", container_y(count, progress)),
        );
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (
                    web_sys::window(),
                    section_ref.cast::<Element>(),
                ) {
                    (Some(window), Some(section)) => {
                        let callback = {
                            let section = section.clone();
                            Closure::wrap(Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    if let Ok(y) = win.scroll_y() {
                                        apply_fan(&section, y);
                                    }
                                }
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        // initial poses before the first scroll event
                        if let Ok(y) = window.scroll_y() {
                            apply_fan(&section, y);
                        }
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
                        log::warn!("hero: section not mounted, fan disabled");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero-section" ref={section_ref}>
            <style>{HERO_CSS}</style>
            <RadiatingLines />
            <ParticleCanvas />

            <h1 class="hero-title">
                {"Contemporary lighting"}
                <br />
                {"solutions crafted for you"}
            </h1>

            <p class="hero-subtitle">
                {"Innovative indoor & outdoor lighting designed with precision, engineered for modern architectural spaces."}
            </p>

            <div class="hero-cta-row">
                <a href="#contact" class="hero-cta primary">
                    {"Contact us"} <span class="arrow">{"→"}</span>
                </a>
                <a href="#products" class="hero-cta ghost">
                    {"Explore products"} <span class="arrow">{"→"}</span>
                </a>
            </div>

            <div class="hero-features">
                {
                    HERO_FEATURES.iter().map(|f| html! {
                        <span key={*f} class="hero-feature">
                            <svg width="14" height="14" viewBox="0 0 24 24" fill="none"
                                 stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                                <polyline points="20 6 9 17 4 12" />
                            </svg>
                            { *f }
                        </span>
                    }).collect::<Html>()
                }
            </div>

            <div class="hero-cards-fan">
                {
                    HERO_CARDS.iter().map(|card| html! {
                        <div
                            key={card.label}
                            class="hero-img-card"
                            style="opacity: 0; transform: translateY(46px) scale(0.72); visibility: hidden;"
                        >
                            <img src={card.image} alt={card.label} draggable="false" />
                            <div class="hero-card-shade"></div>
                            <span class="hero-card-label">{ card.label }</span>
                        </div>
                    }).collect::<Html>()
                }
                <div class="hero-fan-glow"></div>
            </div>

            <div class="hero-bottom-fade"></div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero-section {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: flex-start;
        min-height: 100vh;
        width: 100%;
        overflow: visible;
        padding: clamp(120px, 16vh, 180px) 16px 80px;
        background: radial-gradient(ellipse 100% 80% at 50% 35%, #161616 0%, #0a0a0a 45%, #000 100%);
    }
    .rays-canvas {
        position: absolute;
        inset: 0;
        z-index: 0;
        width: 100%;
        height: 100%;
        pointer-events: none;
        filter: blur(3px) contrast(1.12) saturate(1.05);
    }
    .particle-canvas {
        position: absolute;
        inset: 0;
        z-index: 1;
        width: 100%;
        height: 100%;
    }
    .hero-title {
        z-index: 3;
        margin: 0 0 20px;
        text-align: center;
        font-size: clamp(2.4rem, 5.2vw, 4.4rem);
        font-weight: 700;
        line-height: 1.12;
        letter-spacing: -0.03em;
        color: #fff;
        animation: heroRise 1s cubic-bezier(0.16, 1, 0.3, 1) 0.25s backwards;
    }
    .hero-subtitle {
        z-index: 3;
        max-width: 500px;
        margin: 0 0 32px;
        text-align: center;
        font-size: clamp(0.9rem, 1.15vw, 1.08rem);
        line-height: 1.75;
        letter-spacing: 0.01em;
        color: rgba(255, 255, 255, 0.4);
        animation: heroRise 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0.45s backwards;
    }
    .hero-cta-row {
        z-index: 3;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 12px;
        margin-bottom: 28px;
        animation: heroRise 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0.6s backwards;
    }
    .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 6px;
        white-space: nowrap;
        padding: 10px 24px;
        border-radius: 9px;
        font-size: 0.88rem;
        font-weight: 600;
        letter-spacing: 0.005em;
        text-decoration: none;
        transition: all 0.3s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .hero-cta .arrow { transition: transform 0.3s ease; }
    .hero-cta:hover .arrow { transform: translateX(3px); }
    .hero-cta.primary {
        border: 1px solid rgba(255, 255, 255, 0.9);
        background: #fff;
        color: #000;
    }
    .hero-cta.primary:hover {
        transform: translateY(-1px);
        background: rgba(255, 255, 255, 0.9);
        box-shadow: 0 4px 20px rgba(255, 255, 255, 0.12);
    }
    .hero-cta.ghost {
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
    }
    .hero-cta.ghost:hover {
        transform: translateY(-1px);
        border-color: rgba(255, 255, 255, 0.25);
        background: rgba(255, 255, 255, 0.1);
    }
    .hero-features {
        z-index: 3;
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 24px;
        animation: heroFade 0.8s ease 0.75s backwards;
    }
    .hero-feature {
        display: inline-flex;
        align-items: center;
        gap: 6px;
        font-size: 0.78rem;
        font-weight: 500;
        letter-spacing: 0.02em;
        color: rgba(255, 255, 255, 0.35);
    }
    .hero-cards-fan {
        position: relative;
        z-index: 3;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        max-width: 700px;
        height: 340px;
        margin-top: clamp(40px, 6vh, 72px);
        perspective: 1200px;
    }
    .hero-img-card {
        position: absolute;
        width: 200px;
        height: 280px;
        border-radius: 18px;
        overflow: hidden;
        cursor: pointer;
        box-shadow: 0 12px 40px rgba(0, 0, 0, 0.45), 0 2px 12px rgba(0, 0, 0, 0.25);
        transition: box-shadow 0.3s ease;
    }
    .hero-img-card:hover {
        box-shadow: 0 18px 56px rgba(0, 0, 0, 0.5), 0 4px 18px rgba(0, 0, 0, 0.3);
    }
    .hero-img-card img {
        display: block;
        width: 100%;
        height: 100%;
        object-fit: cover;
        pointer-events: none;
        user-select: none;
    }
    .hero-card-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0,0,0,0.65), rgba(0,0,0,0.1) 50%, transparent);
    }
    .hero-card-label {
        position: absolute;
        left: 16px;
        right: 16px;
        bottom: 16px;
        z-index: 2;
        font-size: 0.82rem;
        font-weight: 600;
        letter-spacing: 0.02em;
        color: #fff;
        text-shadow: 0 1px 4px rgba(0, 0, 0, 0.5);
    }
    .hero-fan-glow {
        position: absolute;
        left: 50%;
        top: 50%;
        z-index: -1;
        width: 480px;
        height: 320px;
        transform: translate(-50%, -50%);
        border-radius: 50%;
        background: radial-gradient(ellipse at center, rgba(255,255,255,0.04) 0%, rgba(255,255,255,0.015) 40%, transparent 70%);
        filter: blur(30px);
        pointer-events: none;
    }
    .hero-bottom-fade {
        position: absolute;
        left: 0;
        bottom: 0;
        z-index: 5;
        width: 100%;
        height: 140px;
        background: linear-gradient(to top, #000, transparent);
        pointer-events: none;
    }
    @keyframes heroRise {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes heroFade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @media (max-width: 768px) {
        .hero-cards-fan { height: 280px; max-width: 520px; }
        .hero-img-card { width: 160px; height: 230px; border-radius: 14px; }
    }
"#;
