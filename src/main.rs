use log::{info, Level};
use yew::prelude::*;

mod content;
mod preview;
mod motion {
    pub mod easing;
    pub mod fan;
    pub mod reveal;
    pub mod sequencer;
    pub mod tilt;
}
mod effects {
    pub mod particles;
    pub mod rays;
}
mod components {
    pub mod footer;
    pub mod grid;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod swipe;
}

use components::{
    footer::Footer, grid::MainGrid, hero::HeroSection, navbar::Navbar, services::ServicesSection,
    swipe::SwipeSection,
};
use preview::ImagePreviewProvider;

#[function_component]
fn App() -> Html {
    html! {
        <ImagePreviewProvider>
            <div class="page">
                <style>{PAGE_CSS}</style>
                <Navbar />
                <HeroSection />
                <MainGrid />
                <SwipeSection />
                <ServicesSection />
                <Footer />
            </div>
        </ImagePreviewProvider>
    }
}

const PAGE_CSS: &str = r#"
    * { box-sizing: border-box; }
    html, body {
        margin: 0;
        padding: 0;
        background: #000;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                     Helvetica, Arial, sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .page {
        min-height: 100vh;
        background: #000;
        overflow-x: clip;
    }
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after {
            animation-duration: 0.01ms !important;
            animation-iteration-count: 1 !important;
            transition-duration: 0.01ms !important;
        }
    }
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
