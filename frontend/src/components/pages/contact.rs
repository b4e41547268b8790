use common::studio::StudioConfig;
use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    let studio = StudioConfig::default();

    let socials = studio
        .socials
        .iter()
        .map(|s| {
            html! {
                <a class="contact-social" href={s.url.clone()} target="_blank" rel="noopener noreferrer">
                    { s.label.clone() }
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <section class="contact">
            <h1 class="section-title">{ "Get in Touch" }</h1>
            <div class="contact-cards">
                <a class="contact-card" href={studio.tel_link()}>
                    <span class="contact-icon">{ "📞" }</span>
                    <span>{ studio.phone_display.clone() }</span>
                </a>
                <a class="contact-card" href={studio.mailto_link()}>
                    <span class="contact-icon">{ "✉️" }</span>
                    <span>{ studio.email.clone() }</span>
                </a>
            </div>
            <a class={classes!("button", "primary")} href={studio.chat_url.clone()}
               target="_blank" rel="noopener noreferrer">
                { "Chat on WhatsApp" }
            </a>
            <div class="contact-socials">{ socials }</div>
        </section>
    }
}
