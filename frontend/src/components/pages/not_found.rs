use gloo_console::log;
use yew::prelude::*;

use crate::router::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with((), |_| {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        log!("no route for", path);
    });

    html! {
        <section class="not-found">
            <h1>{ "Page not found" }</h1>
            <Link href="/" class={classes!("button", "outlined")}>{ "Back to home" }</Link>
        </section>
    }
}
