use common::model::gallery::{showcases, Showcase};
use common::studio::StudioConfig;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::gallery::tile_media;
use crate::router::Link;

const BRAND_LETTERS: &str = "Chalzart";

/// Delay before the promotion card slides in.
const PROMO_DELAY_MS: u32 = 1000;
const PROMO_IMAGE: &str = "/assets/promo.jpg";

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Banner />
            <Slogan />
            { for showcases().into_iter().map(|showcase| html! { <ShowcaseSection {showcase} /> }) }
            <Promo />
        </>
    }
}

#[function_component(Banner)]
fn banner() -> Html {
    let letters = BRAND_LETTERS
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let style = format!("animation-delay: {}ms;", i * 80);
            html! { <span class="banner-letter" {style}>{ c.to_string() }</span> }
        })
        .collect::<Html>();

    html! {
        <section class="banner">
            <h1 class="banner-title">{ letters }</h1>
            <h2 class="banner-tagline">{ "Art Meets Heart" }</h2>
            <div class="banner-actions">
                <Link href="/customize" class={classes!("button", "primary")}>{ "Order Custom Art" }</Link>
                <Link href="/myworks" class={classes!("button", "outlined")}>{ "View Gallery" }</Link>
            </div>
        </section>
    }
}

#[function_component(Slogan)]
fn slogan() -> Html {
    html! {
        <section class="slogan">
            <img class="slogan-image" src="/assets/portrait/img1.jpg" alt="Honey drizzle portrait" loading="lazy" />
            <div class="slogan-text">
                <h2>{ "Honey Drizzle Serenity in Stillness" }</h2>
                <p>
                    { "In this hyper-realistic artwork, golden honey gently cascades down a girl's face, \
                       symbolizing tranquility, warmth, and emotional healing. The piece invites viewers \
                       to slow down, breathe deeply, and reconnect with a serene state of being." }
                </p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    showcase: Showcase,
}

/// Preview of one gallery with links to the full gallery and the order form.
#[function_component(ShowcaseSection)]
fn showcase_section(props: &ShowcaseProps) -> Html {
    let showcase = props.showcase;
    let tiles = showcase
        .items()
        .enumerate()
        .map(|(i, item)| {
            html! {
                <div class="showcase-tile">
                    { tile_media(&item, &format!("{} {}", showcase.title, i + 1)) }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="showcase" id={format!("showcase-{}", showcase.gallery.slug())}>
            <h2 class="section-title">{ showcase.title }</h2>
            <div class="showcase-grid">{ tiles }</div>
            <div class="showcase-actions">
                <Link href={showcase.gallery_href()} class={classes!("button", "outlined")}>{ "View Full Gallery" }</Link>
                <Link href="/customize" class={classes!("button", "primary")}>{ "Customize Yours" }</Link>
            </div>
        </section>
    }
}

/// Floating promotion card. It slides in shortly after the page opens and
/// expands into a full view with the registration link.
#[function_component(Promo)]
fn promo() -> Html {
    let visible = use_state(|| false);
    let dismissed = use_state(|| false);
    let expanded = use_state(|| false);
    let form_url = use_memo((), |_| StudioConfig::default().promo_form_url);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(PROMO_DELAY_MS, move || visible.set(true));
            move || drop(timer)
        });
    }

    if *dismissed {
        return html! {};
    }

    let open = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(true))
    };
    let close_view = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(false))
    };
    let dismiss = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        dismissed.set(true);
    });

    html! {
        <>
            <div class={classes!("promo-card", (*visible).then_some("visible"))} onclick={open}>
                <button class="promo-close" onclick={dismiss}>{ "✕" }</button>
                <img src={PROMO_IMAGE} alt="Special Offer" />
                <span class="promo-caption">{ "Click for Special Offer!" }</span>
            </div>
            if *expanded {
                <div class="promo-dialog">
                    <button class="promo-close" onclick={close_view}>{ "✕" }</button>
                    <img src={PROMO_IMAGE} alt="Promo Full View" />
                    <a class={classes!("button", "primary", "promo-register")} href={(*form_url).clone()}
                       target="_blank" rel="noopener noreferrer">
                        { "Register Now" }
                    </a>
                </div>
            }
        </>
    }
}
