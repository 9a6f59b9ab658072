use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Body class that turns visible focus outlines back on.
pub const KEYBOARD_MODE_CLASS: &str = "keyboard-navigation";

/// Switches the body between keyboard and pointer focus styling. Tab marks
/// the session keyboard-driven; any mouse press marks it pointer-driven.
/// Both listeners live for the page.
pub fn install_focus_mode(document: &Document) {
    let Some(body) = document.body() else { return };

    let keydown_body = body.clone();
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Tab" {
            let _ = keydown_body.class_list().add_1(KEYBOARD_MODE_CLASS);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let mousedown_body = body;
    let mousedown = Closure::wrap(Box::new(move || {
        let _ = mousedown_body.class_list().remove_1(KEYBOARD_MODE_CLASS);
    }) as Box<dyn FnMut()>);
    let _ =
        document.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());
    mousedown.forget();
}
