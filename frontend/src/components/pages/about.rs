use pulldown_cmark::{html, Parser};
use yew::prelude::*;

const ABOUT_MD: &str = "\
Hi, I'm **Charles Simon**, a passionate artist and founder of *Chalz Art*. I specialize in \
realistic pencil portraits, live speed sketches, watercolor paintings, and custom artworks for \
any occasion. With years of experience and a deep love for art, I bring life to every drawing \
with fine details and a personal touch. I also offer online and offline drawing classes for \
beginners and aspiring artists.

Whether you're looking for a unique gift or want to learn art, I'm here to help you make it special.

Thank you for visiting and supporting handmade art!
";

fn render_markdown(source: &str) -> AttrValue {
    let mut output = String::new();
    html::push_html(&mut output, Parser::new(source));
    AttrValue::from(output)
}

#[function_component(About)]
pub fn about() -> Html {
    let body = use_memo((), |_| render_markdown(ABOUT_MD));

    html! {
        <section class="about">
            <img class="about-portrait" src="/assets/about/artist.jpg" alt="The artist at work" loading="lazy" />
            <div class="about-text">
                <h1 class="section-title">{ "About the Artist" }</h1>
                { Html::from_html_unchecked((*body).clone()) }
            </div>
        </section>
    }
}
