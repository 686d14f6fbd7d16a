//! Fixed glass navbar: gains a denser background once scrolled, hides
//! while scrolling down and re-appears on the first upward scroll.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_LINKS;

/// Hysteresis for the hide-on-scroll-down behavior: the bar only reacts
/// to movements larger than this, and is always shown near the top.
const SHOW_ZONE_PX: f64 = 60.0;
const JITTER_PX: f64 = 6.0;

pub fn nav_visible(y: f64, last_y: f64, was_visible: bool) -> bool {
    if y < SHOW_ZONE_PX {
        true
    } else if y > last_y + JITTER_PX {
        false
    } else if y < last_y - JITTER_PX {
        true
    } else {
        was_visible
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let visible = use_state(|| true);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let last_y = Rc::new(Cell::new(0.0_f64));
                    let was_visible = Rc::new(Cell::new(true));
                    let callback = Closure::wrap(Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(y) = win.scroll_y() {
                                scrolled.set(y > 40.0);
                                let now_visible = nav_visible(y, last_y.get(), was_visible.get());
                                visible.set(now_visible);
                                was_visible.set(now_visible);
                                last_y.set(y);
                            }
                        }
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let bar_class = classes!(
        "nav-bar",
        (*scrolled).then_some("scrolled"),
        (!*visible).then_some("hidden"),
    );

    html! {
        <nav class={bar_class}>
            <style>{NAVBAR_CSS}</style>
            <div class="nav-shell">
                <a href="#" class="nav-logo">
                    {"LUMINA"}<span class="nav-logo-light">{"LIGHT"}</span>
                </a>

                <ul class="nav-links">
                    {
                        NAV_LINKS.iter().map(|link| {
                            let href = format!("#{}", link.to_lowercase().replace(' ', "-"));
                            html! {
                                <li key={*link}>
                                    <a href={href} class="nav-link">{ *link }</a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>

                <button class="nav-burger" aria-label="Menu" onclick={toggle_menu}>
                    <span class={classes!((*menu_open).then_some("open-top"))}></span>
                    <span class={classes!((*menu_open).then_some("open-mid"))}></span>
                    <span class={classes!((*menu_open).then_some("open-bottom"))}></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile-menu">
                            <ul>
                                {
                                    NAV_LINKS.iter().map(|link| {
                                        let href = format!("#{}", link.to_lowercase().replace(' ', "-"));
                                        html! {
                                            <li key={*link}>
                                                <a href={href} onclick={close_menu.clone()}>{ *link }</a>
                                            </li>
                                        }
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

const NAVBAR_CSS: &str = r#"
    .nav-bar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 12px 16px;
        transform: translateY(0);
        opacity: 1;
        transition: transform 0.7s cubic-bezier(0.22, 1, 0.36, 1),
                    opacity 0.55s cubic-bezier(0.22, 1, 0.36, 1),
                    filter 0.6s ease-out;
    }
    .nav-bar.hidden {
        transform: translateY(-110px);
        opacity: 0;
        filter: blur(6px);
        pointer-events: none;
    }
    .nav-shell {
        max-width: 1280px;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 16px 40px;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(0, 0, 0, 0.25);
        backdrop-filter: blur(18px);
        box-shadow: 0 6px 24px rgba(8, 10, 15, 0.45);
        transition: all 0.7s ease;
    }
    .nav-bar.scrolled .nav-shell {
        border-color: rgba(255, 255, 255, 0.1);
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(28px);
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.6);
    }
    .nav-logo {
        font-size: 1.2rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        color: #fff;
        text-decoration: none;
        user-select: none;
        transition: transform 0.3s ease;
    }
    .nav-logo:hover { transform: scale(1.05); }
    .nav-logo-light { font-weight: 300; opacity: 0.5; }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 32px;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        position: relative;
        display: block;
        padding: 8px 4px;
        font-size: 0.85rem;
        font-weight: 500;
        letter-spacing: 0.05em;
        color: rgba(255, 255, 255, 0.5);
        text-decoration: none;
        transition: color 0.3s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .nav-link::after {
        content: '';
        position: absolute;
        bottom: 0;
        left: 50%;
        width: 0;
        height: 1.5px;
        border-radius: 999px;
        background: #fff;
        transform: translateX(-50%);
        transition: width 0.5s cubic-bezier(0.22, 1, 0.36, 1);
        box-shadow: 0 0 8px rgba(255, 255, 255, 0.5);
    }
    .nav-link:hover { color: #fff; }
    .nav-link:hover::after { width: 100%; }
    .nav-burger {
        display: none;
        flex-direction: column;
        gap: 6px;
        padding: 8px;
        border: none;
        background: transparent;
        cursor: pointer;
    }
    .nav-burger span {
        display: block;
        width: 20px;
        height: 1.5px;
        background: rgba(255, 255, 255, 0.7);
        transform-origin: center;
        transition: transform 0.4s cubic-bezier(0.22, 1, 0.36, 1),
                    opacity 0.3s ease;
    }
    .nav-burger span.open-top { transform: translateY(7.5px) rotate(45deg); }
    .nav-burger span.open-mid { opacity: 0; }
    .nav-burger span.open-bottom { transform: translateY(-7.5px) rotate(-45deg); }
    .nav-mobile-menu {
        max-width: 1280px;
        margin: 8px auto 0;
        padding: 20px;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(28px);
        animation: navMenuIn 0.5s cubic-bezier(0.22, 1, 0.36, 1);
    }
    .nav-mobile-menu ul {
        list-style: none;
        margin: 0;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 4px;
    }
    .nav-mobile-menu a {
        display: block;
        padding: 10px 0;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        font-size: 0.85rem;
        font-weight: 500;
        letter-spacing: 0.05em;
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-mobile-menu a:hover { color: #fff; }
    @keyframes navMenuIn {
        from { opacity: 0; transform: translateY(-12px) scale(0.97); }
        to { opacity: 1; transform: translateY(0) scale(1); }
    }
    @media (max-width: 768px) {
        .nav-links { display: none; }
        .nav-burger { display: flex; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_visible_near_top() {
        assert!(nav_visible(0.0, 500.0, false));
        assert!(nav_visible(59.0, 500.0, false));
    }

    #[test]
    fn hides_scrolling_down_shows_scrolling_up() {
        assert!(!nav_visible(300.0, 200.0, true));
        assert!(nav_visible(200.0, 300.0, false));
    }

    #[test]
    fn small_jitter_keeps_current_state() {
        assert!(nav_visible(303.0, 300.0, true));
        assert!(!nav_visible(303.0, 300.0, false));
        assert!(!nav_visible(298.0, 300.0, false));
    }
}
