use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::sections::{About, Approach, Credentials, Partners, TrustBand};
use crate::interactions::{focus, images, visibility};

/// The two global rules the interaction layer depends on: visible focus
/// outlines while the body carries the keyboard class, and the revealed
/// state for observed elements. `!important` lets the reveal win over the
/// seeded inline hiding style.
const INTERACTION_CSS: &str = r#"
    .keyboard-navigation *:focus {
        outline: 3px solid #b8860b;
        outline-offset: 3px;
    }

    .animate-in {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    // One-time page wiring, run after the sections above have rendered.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            window.scroll_to_with_x_and_y(0.0, 0.0);
            let document = window.document().unwrap();
            images::init_images(&document);
            focus::install_focus_mode(&document);
            visibility::start_reveal_observer(&document);
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{ INTERACTION_CSS }</style>
            <Hero />
            <TrustBand />
            <About />
            <Approach />
            <Credentials />
            <Partners />
            <Footer />
        </div>
    }
}
