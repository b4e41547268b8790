//! Minimal History API routing.
//!
//! The current [`Location`] is read from `window.location`; links push a new
//! history entry and ask the [`App`](crate::app::App) to re-render through the
//! [`Navigator`] context.

use common::routes::Location;
use gloo_console::warn;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Context handle used by links to request a navigation.
#[derive(Clone, PartialEq)]
pub struct Navigator(pub Callback<String>);

impl Navigator {
    pub fn go(&self, href: &str) {
        self.0.emit(href.to_string());
    }
}

pub fn current_location() -> Location {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Location::parse("/", "");
    };
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    Location::parse(&pathname, &hash)
}

/// Adds `href` to the session history without reloading the page.
pub fn push_history(href: &str) {
    let history = web_sys::window().and_then(|w| w.history().ok());
    match history {
        Some(history) => {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(href))
                .is_err()
            {
                warn!("could not push history entry", href);
            }
        }
        None => warn!("history API unavailable"),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smoothly scrolls the element with `id` into view. Returns `false` if no
/// such element exists.
pub fn scroll_into_view(id: &str, block: ScrollLogicalPosition) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(block);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// In-app link: same markup as `<a>`, but navigates through the history API.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigator = use_context::<Navigator>();
    let href = props.href.clone();

    let onclick = Callback::from(move |e: MouseEvent| {
        if let Some(navigator) = &navigator {
            e.prevent_default();
            navigator.go(&href);
        }
    });

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
