use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::interactions::scroll;
use crate::interactions::timing::Throttle;

const CTA_HOVER_STYLE: &str =
    "transform: translateY(-5px); box-shadow: 0 15px 40px rgba(16, 185, 129, 0.25);";
const CTA_REST_STYLE: &str =
    "transform: translateY(0); box-shadow: 0 10px 25px rgba(16, 185, 129, 0.15);";

#[function_component(Hero)]
pub fn hero() -> Html {
    let revealed = use_state_eq(|| false);
    let ornament_offset = use_state_eq(|| 0.0);
    let cta_hovered = use_state_eq(|| false);

    // Content fades in shortly after mount.
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::HERO_REVEAL_DELAY_MS, move || {
                    revealed.set(true);
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    // The ornament trails the scroll at half speed while the hero is on
    // screen. Style writes are throttled to roughly one per frame, and the
    // offset freezes once the hero has scrolled past.
    {
        let ornament_offset = ornament_offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_cb = window.clone();
                let throttle = Throttle::new(config::PARALLAX_THROTTLE_MS, move || {
                    let scroll_y = window_for_cb.scroll_y().unwrap_or(0.0);
                    let viewport = window_for_cb
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if let Some(offset) = scroll::parallax_offset(scroll_y, viewport) {
                        ornament_offset.set(offset);
                    }
                });
                let scroll_callback =
                    Closure::wrap(Box::new(move || throttle.call()) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let cta_enter = {
        let cta_hovered = cta_hovered.clone();
        Callback::from(move |_: MouseEvent| cta_hovered.set(true))
    };
    let cta_leave = {
        let cta_hovered = cta_hovered.clone();
        Callback::from(move |_: MouseEvent| cta_hovered.set(false))
    };

    let content_style = if *revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.8s ease, transform 0.8s ease;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 0.8s ease, transform 0.8s ease;"
    };

    html! {
        <section id="home" class="hero">
            <div
                class="hero-ornament"
                aria-hidden="true"
                style={format!("transform: translateY({}px);", *ornament_offset)}
            ></div>
            <div class="hero-content" style={content_style}>
                <h1>{ "Institutional discipline for private wealth" }</h1>
                <p class="hero-subtitle">
                    { "A banking agent accountable to your family alone. We sell \
                       nothing and hold no inventory, so our only mandate is to keep \
                       and grow what you have built." }
                </p>
                <button
                    type="button"
                    class="account-cta"
                    style={if *cta_hovered { CTA_HOVER_STYLE } else { CTA_REST_STYLE }}
                    onmouseenter={cta_enter}
                    onmouseleave={cta_leave}
                >
                    { "Begin a Conversation" }
                </button>
            </div>
            <div class="hero-decoration" aria-hidden="true">
                {
                    (0..4).map(|i| html! {
                        <span class="decoration-dot" style={scroll::dot_delay_style(i)}></span>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
