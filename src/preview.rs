//! Full-screen image preview overlay.
//!
//! `PreviewState` is the whole model: at most one previewed image at a
//! time, last open wins, close is idempotent. `ImagePreviewProvider` owns
//! the state, hands consumers a `PreviewHandle` through context, and
//! mirrors the state into two document-level side effects: the body
//! scroll lock and the Escape key listener. Both are keyed on open-ness
//! and release in their effect destructors, so they can never outlive an
//! unmount that skipped an explicit close.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Duration of the pop-out animation before the modal unmounts.
const CLOSE_ANIM_MS: u32 = 220;

#[derive(Clone, PartialEq, Debug)]
pub struct PreviewItem {
    pub src: AttrValue,
    pub label: AttrValue,
}

impl PreviewItem {
    pub fn new(src: impl Into<AttrValue>, label: impl Into<AttrValue>) -> Self {
        PreviewItem {
            src: src.into(),
            label: label.into(),
        }
    }
}

/// Singleton preview record. Opening while open replaces, it never queues.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PreviewState(Option<PreviewItem>);

impl PreviewState {
    pub fn open(&mut self, item: PreviewItem) {
        self.0 = Some(item);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn current(&self) -> Option<&PreviewItem> {
        self.0.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    /// The page scroll lock tracks preview existence exactly.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

/// Context value sections use to open the overlay from image clicks.
#[derive(Clone, PartialEq)]
pub struct PreviewHandle {
    pub open: Callback<PreviewItem>,
    pub close: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component(ImagePreviewProvider)]
pub fn image_preview_provider(props: &ProviderProps) -> Html {
    let state = use_state(PreviewState::default);
    let closing = use_state(|| false);
    // bumped on every open/close so a stale close timeout cannot clobber
    // a preview that was re-opened during the exit animation
    let epoch = use_mut_ref(|| 0u64);

    let open = {
        let state = state.clone();
        let closing = closing.clone();
        let epoch = epoch.clone();
        Callback::from(move |item: PreviewItem| {
            *epoch.borrow_mut() += 1;
            closing.set(false);
            let mut next = (*state).clone();
            next.open(item);
            state.set(next);
        })
    };

    let close = {
        let state = state.clone();
        let closing = closing.clone();
        let epoch = epoch.clone();
        Callback::from(move |_| {
            if !state.is_open() {
                return;
            }
            *epoch.borrow_mut() += 1;
            let my_epoch = *epoch.borrow();
            closing.set(true);
            let state = state.clone();
            let closing = closing.clone();
            let epoch = epoch.clone();
            Timeout::new(CLOSE_ANIM_MS, move || {
                if *epoch.borrow() == my_epoch {
                    let mut next = (*state).clone();
                    next.close();
                    state.set(next);
                    closing.set(false);
                }
            })
            .forget();
        })
    };

    // Body scroll lock exactly while a preview exists. The destructor
    // unconditionally restores, covering teardown without a close call.
    {
        let locked = state.scroll_locked();
        use_effect_with_deps(
            move |locked| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    if *locked {
                        let _ = body.style().set_property("overflow", "hidden");
                    } else {
                        let _ = body.style().remove_property("overflow");
                    }
                }
                || {
                    if let Some(body) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.body())
                    {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            },
            locked,
        );
    }

    // Escape closes, listener attached only while open.
    {
        let close = close.clone();
        let is_open = state.is_open();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                close.emit(());
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            is_open,
        );
    }

    let handle = PreviewHandle { open, close };

    let on_backdrop_click = {
        let close = handle.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_button = {
        let close = handle.close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let modal_class = if *closing { "closing" } else { "" };

    html! {
        <ContextProvider<PreviewHandle> context={handle}>
            { for props.children.iter() }

            {
                if let Some(item) = state.current() {
                    html! {
                        <>
                            <style>{PREVIEW_CSS}</style>
                            <div
                                class={classes!("img-preview-backdrop", modal_class)}
                                onclick={on_backdrop_click.clone()}
                            ></div>
                            <div
                                class={classes!("img-preview-container", modal_class)}
                                onclick={on_backdrop_click}
                            >
                                <button
                                    class="img-preview-close"
                                    aria-label="Close preview"
                                    onclick={on_close_button}
                                >
                                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none"
                                         stroke="currentColor" stroke-width="2.5" stroke-linecap="round">
                                        <path d="M18 6L6 18M6 6l12 12" />
                                    </svg>
                                </button>
                                <img
                                    src={item.src.clone()}
                                    alt={if item.label.is_empty() { AttrValue::from("Preview") } else { item.label.clone() }}
                                    class="img-preview-image"
                                    draggable="false"
                                    onclick={swallow_click}
                                />
                                {
                                    if !item.label.is_empty() {
                                        html! {
                                            <div class="img-preview-label-wrap">
                                                <span class="img-preview-label">{ item.label.clone() }</span>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </ContextProvider<PreviewHandle>>
    }
}

const PREVIEW_CSS: &str = r#"
    .img-preview-backdrop {
        position: fixed;
        inset: 0;
        z-index: 200;
        background: rgba(0, 0, 0, 0.82);
        backdrop-filter: blur(14px);
        animation: previewFadeIn 0.25s ease forwards;
    }
    .img-preview-backdrop.closing {
        animation: previewFadeOut 0.22s ease forwards;
    }
    .img-preview-container {
        position: fixed;
        inset: 0;
        z-index: 201;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 18px;
        padding: 4vh 4vw;
        animation: previewPopIn 0.38s cubic-bezier(0.2, 1.25, 0.4, 1) forwards;
    }
    .img-preview-container.closing {
        animation: previewPopOut 0.22s ease-in forwards;
    }
    .img-preview-image {
        max-width: min(86vw, 1100px);
        max-height: 76vh;
        border-radius: 16px;
        object-fit: contain;
        box-shadow: 0 30px 90px rgba(0, 0, 0, 0.6);
        user-select: none;
    }
    .img-preview-close {
        position: absolute;
        top: 26px;
        right: 28px;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 42px;
        height: 42px;
        border: 1px solid rgba(255, 255, 255, 0.18);
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.08);
        color: #fff;
        cursor: pointer;
        transition: background 0.25s ease, transform 0.25s ease;
    }
    .img-preview-close:hover {
        background: rgba(255, 255, 255, 0.18);
        transform: scale(1.06);
    }
    .img-preview-label-wrap {
        animation: previewLabelUp 0.35s ease 0.12s backwards;
    }
    .img-preview-label {
        padding: 8px 18px;
        border-radius: 999px;
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.12);
        color: rgba(255, 255, 255, 0.85);
        font-size: 0.85rem;
        font-weight: 600;
        letter-spacing: 0.04em;
    }
    @keyframes previewFadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes previewFadeOut {
        from { opacity: 1; }
        to { opacity: 0; }
    }
    @keyframes previewPopIn {
        from { opacity: 0; transform: translateY(80px) scale(0.25); }
        60% { opacity: 1; transform: translateY(-6px) scale(1.03); }
        to { opacity: 1; transform: translateY(0) scale(1); }
    }
    @keyframes previewPopOut {
        from { opacity: 1; transform: translateY(0) scale(1); }
        to { opacity: 0; transform: translateY(60px) scale(0.3); }
    }
    @keyframes previewLabelUp {
        from { opacity: 0; transform: translateY(16px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_open_wins() {
        let mut state = PreviewState::default();
        state.open(PreviewItem::new("/assets/a.jpg", "A"));
        state.open(PreviewItem::new("/assets/b.jpg", "B"));
        let current = state.current().expect("preview should be open");
        assert_eq!(current.src.as_str(), "/assets/b.jpg");
        assert_eq!(current.label.as_str(), "B");
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = PreviewState::default();
        state.close();
        assert!(!state.is_open());
        state.open(PreviewItem::new("/assets/a.jpg", "A"));
        state.close();
        state.close();
        assert!(state.current().is_none());
    }

    #[test]
    fn sequence_state_equals_last_call() {
        let mut state = PreviewState::default();
        let calls: [&dyn Fn(&mut PreviewState); 5] = [
            &|s| s.open(PreviewItem::new("/assets/1.jpg", "one")),
            &|s| s.close(),
            &|s| s.open(PreviewItem::new("/assets/2.jpg", "two")),
            &|s| s.open(PreviewItem::new("/assets/3.jpg", "three")),
            &|s| s.close(),
        ];
        for call in calls {
            call(&mut state);
        }
        assert!(!state.is_open());
        state.open(PreviewItem::new("/assets/4.jpg", "four"));
        assert_eq!(state.current().unwrap().label.as_str(), "four");
    }

    #[test]
    fn scroll_lock_tracks_openness_exactly() {
        let mut state = PreviewState::default();
        assert!(!state.scroll_locked());
        state.open(PreviewItem::new("/assets/a.jpg", ""));
        assert!(state.scroll_locked());
        state.open(PreviewItem::new("/assets/b.jpg", ""));
        assert!(state.scroll_locked());
        state.close();
        assert!(!state.scroll_locked());
    }
}
