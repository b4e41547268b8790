use common::routes::{QUICK_LINKS, SERVICE_LINKS};
use common::studio::StudioConfig;
use yew::prelude::*;

use crate::router::Link;

#[function_component(Footer)]
pub fn footer() -> Html {
    let studio = StudioConfig::default();

    let socials = studio
        .socials
        .iter()
        .map(|s| {
            html! {
                <a class="social-link" href={s.url.clone()} title={s.label.clone()}
                   target="_blank" rel="noopener noreferrer">
                    { s.label.clone() }
                </a>
            }
        })
        .collect::<Html>();

    let links = |items: &[common::routes::NavItem]| {
        items
            .iter()
            .map(|item| html! { <li><Link href={item.href}>{ item.label }</Link></li> })
            .collect::<Html>()
    };

    html! {
        <footer class="footer">
            <div class="footer-column">
                <h3>{ studio.name.clone() }</h3>
                <p>{ "Portraits, murals and wearable art, made by hand." }</p>
                <div class="footer-socials">{ socials }</div>
            </div>
            <div class="footer-column">
                <h4>{ "Quick Links" }</h4>
                <ul>{ links(QUICK_LINKS) }</ul>
            </div>
            <div class="footer-column">
                <h4>{ "Services" }</h4>
                <ul>{ links(SERVICE_LINKS) }</ul>
            </div>
            <div class="footer-column">
                <h4>{ "Get in touch" }</h4>
                <a href={studio.tel_link()}>{ studio.phone_display.clone() }</a>
                <a href={studio.mailto_link()}>{ studio.email.clone() }</a>
            </div>
        </footer>
    }
}
