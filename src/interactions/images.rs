use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

/// Marks every image lazy and wires load and error feedback. A broken
/// image is dimmed and logged instead of showing the browser's broken
/// glyph at full strength; a loaded one is restored to full opacity.
pub fn init_images(document: &Document) {
    let Ok(images) = document.query_selector_all("img") else {
        return;
    };

    for index in 0..images.length() {
        let Some(node) = images.item(index) else { continue };
        let Ok(img) = node.dyn_into::<HtmlImageElement>() else {
            continue;
        };

        let _ = img.set_attribute("loading", "lazy");

        let error_img = img.clone();
        let on_error = Closure::wrap(Box::new(move || {
            gloo_console::warn!("image failed to load:", error_img.src());
            let _ = error_img.style().set_property("opacity", "0.5");
        }) as Box<dyn FnMut()>);
        let _ = img.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let loaded_img = img.clone();
        let on_load = Closure::wrap(Box::new(move || {
            let _ = loaded_img.style().set_property("opacity", "1");
        }) as Box<dyn FnMut()>);
        let _ = img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
    }
}
