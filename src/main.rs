use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};
use yew::prelude::*;

mod config;
mod interactions {
    pub mod focus;
    pub mod images;
    pub mod menu;
    pub mod scroll;
    pub mod timing;
    pub mod visibility;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod sections;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

/// Logs uncaught errors and unhandled promise rejections. Diagnostics
/// only; nothing is swallowed or rethrown.
fn install_global_error_hooks() {
    let Some(window) = web_sys::window() else { return };

    let on_error = Closure::wrap(Box::new(move |e: ErrorEvent| {
        log::error!("uncaught error: {}", e.message());
    }) as Box<dyn FnMut(ErrorEvent)>);
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::wrap(Box::new(move |e: PromiseRejectionEvent| {
        log::error!("unhandled rejection: {:?}", e.reason());
    }) as Box<dyn FnMut(PromiseRejectionEvent)>);
    let _ = window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    install_global_error_hooks();

    info!("Meridian landing page booting");
    yew::Renderer::<App>::new().render();
}
