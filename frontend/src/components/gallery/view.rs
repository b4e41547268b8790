use common::model::gallery::{Direction, Gallery, GalleryFilter, MediaItem, GALLERIES};
use yew::html::Scope;
use yew::prelude::*;

use crate::gallery_grid::GalleryGrid;
use crate::tops_sheet::lightbox_sheet::LightboxSheet;

use super::messages::Msg;
use super::state::GalleryComponent;

pub fn view(component: &GalleryComponent, ctx: &Context<GalleryComponent>) -> Html {
    let link = ctx.link();

    let sections = component
        .filter
        .visible()
        .into_iter()
        .map(|gallery| gallery_section(gallery, component.columns, link))
        .collect::<Html>();

    html! {
        <div class="gallery-page">
            <div class="gallery-header">
                <h1 class="section-title">{ "My Works" }</h1>
                { filter_menu(component, link) }
            </div>
            { sections }
            { lightbox(component, link) }
        </div>
    }
}

fn filter_menu(component: &GalleryComponent, link: &Scope<GalleryComponent>) -> Html {
    let option = |filter: GalleryFilter| {
        let selected = component.filter == filter;
        let label = filter.label().to_string();
        html! {
            <li
                class={classes!("filter-option", selected.then_some("selected"))}
                onclick={link.callback(move |_| Msg::SetFilter(filter.clone()))}
            >
                { label }
            </li>
        }
    };

    let options = std::iter::once(GalleryFilter::All)
        .chain(GALLERIES.iter().map(|g| GalleryFilter::Only(g.name.to_string())))
        .map(option)
        .collect::<Html>();

    html! {
        <div class="filter">
            <button class="filter-button" onclick={link.callback(|_| Msg::ToggleFilterMenu)}>
                { format!("Filter: {}", component.filter.label()) }
            </button>
            if component.filter_menu_open {
                <ul class="filter-menu">{ options }</ul>
            }
        </div>
    }
}

fn gallery_section(
    gallery: &'static Gallery,
    columns: usize,
    link: &Scope<GalleryComponent>,
) -> Html {
    let tiles = gallery
        .items()
        .enumerate()
        .map(|(index, item)| {
            html! {
                <figure
                    class="gallery-tile"
                    onclick={link.callback(move |_| Msg::Open { gallery, index })}
                >
                    { tile_media(&item, &format!("{} {}", gallery.name, index + 1)) }
                </figure>
            }
        })
        .collect::<Html>();

    html! {
        <section class="gallery-section" id={gallery.slug()}>
            <h2 class="gallery-name">{ gallery.name }</h2>
            <GalleryGrid {columns}>{ tiles }</GalleryGrid>
        </section>
    }
}

/// Thumbnail of `item`. Videos loop silently in place of a still image.
pub fn tile_media(item: &MediaItem, alt: &str) -> Html {
    match item {
        MediaItem::Image(src) => html! { <img src={src.clone()} alt={alt.to_string()} loading="lazy" /> },
        MediaItem::Video(src) => html! {
            <video src={src.clone()} autoplay=true muted=true loop=true playsinline=true preload="metadata" />
        },
    }
}

fn lightbox(component: &GalleryComponent, link: &Scope<GalleryComponent>) -> Html {
    let onkeydown = link.batch_callback(|e: KeyboardEvent| match e.key().as_str() {
        "ArrowLeft" => vec![Msg::Step(Direction::Prev)],
        "ArrowRight" => vec![Msg::Step(Direction::Next)],
        "Escape" => vec![Msg::Close],
        _ => vec![],
    });

    let content = match component.lightbox.and_then(|p| p.item().map(|item| (p, item))) {
        Some((position, item)) => html! {
            <div class="lightbox" tabindex="0" {onkeydown}>
                <button class="lightbox-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>
                <button class="lightbox-nav prev" onclick={link.callback(|_| Msg::Step(Direction::Prev))}>{ "‹" }</button>
                if component.media_loading {
                    <div class="spinner" />
                }
                { lightbox_media(&item, position.gallery.name, component.media_loading, link) }
                <button class="lightbox-nav next" onclick={link.callback(|_| Msg::Step(Direction::Next))}>{ "›" }</button>
                <span class="lightbox-caption">
                    { format!("{} · {} / {}", position.gallery.name, position.index + 1, position.gallery.len()) }
                </span>
            </div>
        },
        None => html! {},
    };

    html! {
        <LightboxSheet node_ref={component.sheet_ref.clone()}>
            { content }
        </LightboxSheet>
    }
}

fn lightbox_media(
    item: &MediaItem,
    alt: &'static str,
    loading: bool,
    link: &Scope<GalleryComponent>,
) -> Html {
    let class = classes!("lightbox-media", loading.then_some("loading"));
    match item {
        MediaItem::Image(src) => html! {
            <img {class} src={src.clone()} {alt} onload={link.callback(|_: Event| Msg::MediaLoaded)} />
        },
        MediaItem::Video(src) => html! {
            <video {class} src={src.clone()} controls=true autoplay=true
                onloadeddata={link.callback(|_: Event| Msg::MediaLoaded)} />
        },
    }
}
