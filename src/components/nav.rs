use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::interactions::menu::{self, MenuState};
use crate::interactions::scroll;
use crate::interactions::timing::Debounce;

/// In-page destinations reachable from the navbar. The home anchor is the
/// active one on load.
const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#approach", "Approach"),
    ("#credentials", "Credentials"),
    ("#partners", "Partners"),
];

/// Scrolls smoothly to an in-page anchor, stopping short of the fixed
/// header so the section heading stays visible.
fn scroll_to_anchor(href: &str) {
    let Some(id) = href.strip_prefix('#') else { return };
    if id.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let header_height = document
        .query_selector("header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0);

    let options = ScrollToOptions::new();
    options.set_top(scroll::scroll_target(section.offset_top(), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_state = use_state_eq(MenuState::default);
    let active_link = use_state_eq(|| NAV_LINKS[0].0);
    let elevated = use_state_eq(|| false);

    // Header treatment follows the scroll offset for the life of the page.
    {
        let elevated = elevated.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                if let Ok(scroll_y) = window.scroll_y() {
                    elevated.set(scroll::header_elevated(scroll_y));
                }
                let window_for_cb = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_for_cb.scroll_y().unwrap_or(0.0);
                    elevated.set(scroll::header_elevated(scroll_y));
                }) as Box<dyn FnMut()>);
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

    // Clicks outside the navbar close the mobile menu.
    {
        let menu_state = menu_state.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let document_for_cb = document.clone();
                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(target) = e.target() else { return };
                    let Ok(node) = target.dyn_into::<Node>() else {
                        return;
                    };
                    let in_navbar = document_for_cb
                        .query_selector(".navbar")
                        .ok()
                        .flatten()
                        .map(|el| el.contains(Some(&node)))
                        .unwrap_or(false);
                    let in_toggle = document_for_cb
                        .query_selector(".mobile-toggle")
                        .ok()
                        .flatten()
                        .map(|el| el.contains(Some(&node)))
                        .unwrap_or(false);
                    if !in_navbar && !in_toggle {
                        menu_state.set(MenuState::Closed);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);
                document
                    .add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Escape closes the menu from anywhere on the page.
    {
        let menu_state = menu_state.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        menu_state.set(MenuState::Closed);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Growing the viewport past the desktop breakpoint closes the menu,
    // debounced so a drag-resize settles before we look at the width.
    {
        let menu_state = menu_state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_cb = window.clone();
                let debounce = Debounce::new(config::RESIZE_DEBOUNCE_MS, move || {
                    let width = window_for_cb
                        .inner_width()
                        .ok()
                        .and_then(|w| w.as_f64())
                        .unwrap_or(0.0);
                    if menu::past_desktop_breakpoint(width) {
                        menu_state.set(MenuState::Closed);
                    }
                });
                let resize_callback =
                    Closure::wrap(Box::new(move || debounce.call()) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_state = menu_state.clone();
        Callback::from(move |_: MouseEvent| {
            menu_state.set((*menu_state).toggled());
        })
    };

    html! {
        <header
            class="site-header"
            style={format!(
                "position: fixed; top: 0; left: 0; width: 100%; z-index: 10; {}",
                scroll::header_surface_style(*elevated)
            )}
        >
            <nav class="navbar">
                <a href="#home" class="brand" onclick={{
                    let active_link = active_link.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        active_link.set(NAV_LINKS[0].0);
                        scroll_to_anchor(NAV_LINKS[0].0);
                    })
                }}>
                    { "Meridian Private Banking" }
                </a>
                <button
                    type="button"
                    class={classes!("mobile-toggle", menu_state.is_open().then(|| "active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_state.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span class="toggle-line" style={menu::toggle_line_style(0, *menu_state)}></span>
                    <span class="toggle-line" style={menu::toggle_line_style(1, *menu_state)}></span>
                    <span class="toggle-line" style={menu::toggle_line_style(2, *menu_state)}></span>
                </button>
                <div class={classes!("nav-links", menu_state.is_open().then(|| "active"))}>
                    {
                        NAV_LINKS.iter().map(|(href, label)| {
                            let onclick = {
                                let menu_state = menu_state.clone();
                                let active_link = active_link.clone();
                                let href = *href;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    active_link.set(href);
                                    menu_state.set(MenuState::Closed);
                                    scroll_to_anchor(href);
                                })
                            };
                            html! {
                                <a
                                    href={*href}
                                    class={classes!("nav-link", (*active_link == *href).then(|| "active"))}
                                    onclick={onclick}
                                >
                                    { *label }
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::NAV_LINKS;
    use std::collections::HashSet;

    // The active link is a single-value state keyed by href, so uniqueness
    // of the hrefs is what guarantees at most one link renders as active.
    #[test]
    fn link_anchors_are_unique() {
        let hrefs: HashSet<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
        assert_eq!(hrefs.len(), NAV_LINKS.len());
    }

    #[test]
    fn links_are_in_page_anchors_with_home_first() {
        assert_eq!(NAV_LINKS[0].0, "#home");
        for (href, _) in NAV_LINKS {
            assert!(href.starts_with('#'));
            assert!(href.len() > 1);
        }
    }
}
