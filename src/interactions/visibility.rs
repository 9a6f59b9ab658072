use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;

/// Selectors whose matches fade in the first time they scroll into view.
pub const REVEAL_SELECTORS: &str = ".trust-mark, .pillar-card, .approach-point, .credential-item";

/// Class that flips an observed element to its revealed state.
pub const REVEAL_CLASS: &str = "animate-in";

/// Starting style for observed elements, transitioned away on reveal.
const HIDDEN_SEED_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";

const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Monotonic record of which observed elements have been revealed. An
/// element that leaves the viewport again stays revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    /// Records an intersection change. Returns true only the first time an
    /// element is seen intersecting.
    pub fn note(&mut self, index: u32, intersecting: bool) -> bool {
        if intersecting {
            self.revealed.insert(index)
        } else {
            false
        }
    }

    pub fn is_revealed(&self, index: u32) -> bool {
        self.revealed.contains(&index)
    }
}

/// Seeds every reveal target hidden and starts a single observer that adds
/// [`REVEAL_CLASS`] the first time a target crosses the threshold. The
/// observer and its closure live for the page and are leaked on purpose.
pub fn start_reveal_observer(document: &Document) {
    let Ok(targets) = document.query_selector_all(REVEAL_SELECTORS) else {
        return;
    };

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let index = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<u32>().ok());
                let Some(index) = index else { continue };
                if tracker.borrow_mut().note(index, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for index in 0..targets.length() {
        let Some(node) = targets.item(index) else { continue };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let _ = element.set_attribute(REVEAL_INDEX_ATTR, &index.to_string());
        let _ = element.set_attribute("style", HIDDEN_SEED_STYLE);
        observer.observe(&element);
    }

    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::RevealTracker;

    #[test]
    fn first_intersection_reveals() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.note(0, true));
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn reveal_is_permanent() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.note(3, true));
        // Scrolling back out must not clear it or retrigger it.
        assert!(!tracker.note(3, false));
        assert!(tracker.is_revealed(3));
        assert!(!tracker.note(3, true));
    }

    #[test]
    fn non_intersecting_entries_never_reveal() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.note(7, false));
        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn elements_reveal_independently() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.note(1, true));
        assert!(!tracker.is_revealed(2));
        assert!(tracker.note(2, true));
        assert!(tracker.is_revealed(1));
        assert!(tracker.is_revealed(2));
    }
}
