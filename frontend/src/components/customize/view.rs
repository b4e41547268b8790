//! View rendering for the customize page.
//!
//! Personal information is always visible. The other sections are collapsed
//! accordion panels; the art options are selects fed from the catalog, every
//! other field is a text input (date/time inputs for the live sketch, a
//! textarea for descriptions).

use common::model::catalog::{CatalogOption, ART_TYPES, MATERIALS, SIZES};
use common::model::order::{FormField, PersonalField, SectionKind, SketchField};
use common::order::composer::SUBMITTED_BANNER;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::InputKind;
use super::messages::Msg;
use super::state::CustomizeComponent;

pub fn view(component: &CustomizeComponent, ctx: &Context<CustomizeComponent>) -> Html {
    let link = ctx.link();

    let panels = SectionKind::ALL
        .iter()
        .filter(|kind| **kind != SectionKind::Personal)
        .map(|kind| accordion(component, link, *kind))
        .collect::<Html>();

    html! {
        <div class="customize">
            <h1 class="customize-title">{ "Craft Your Vision" }</h1>
            <div class="customize-samples">
                <a class={classes!("button", "outlined")} href={component.studio.catalog_url.clone()}
                   target="_blank" rel="noopener noreferrer">
                    { "View Samples" }
                </a>
            </div>

            if component.composer.is_submitted() {
                <div class="alert success">{ SUBMITTED_BANNER }</div>
            }

            { personal_section(component, link) }
            { panels }

            <div class="customize-submit">
                <button class={classes!("button", "primary", "submit")} onclick={link.callback(|_| Msg::Submit)}>
                    { "Submit via WhatsApp" }
                </button>
            </div>
        </div>
    }
}

fn personal_section(component: &CustomizeComponent, link: &Scope<CustomizeComponent>) -> Html {
    let validation = component.composer.validation();
    let fields = PersonalField::ALL
        .iter()
        .map(|field| {
            let required = matches!(field, PersonalField::Name | PersonalField::Phone);
            let invalid = validation.is_invalid(*field);
            let helper = validation.helper_text(*field);
            text_field(component, link, (*field).into(), required, invalid, helper)
        })
        .collect::<Html>();

    html! {
        <section class="paper">
            <h2 class="paper-title">{ SectionKind::Personal.title() }</h2>
            <div class="field-grid two-columns">{ fields }</div>
        </section>
    }
}

fn accordion(
    component: &CustomizeComponent,
    link: &Scope<CustomizeComponent>,
    kind: SectionKind,
) -> Html {
    let expanded = component.expanded.contains(&kind);

    let body = if expanded {
        let content = match kind {
            SectionKind::Sketch => sketch_selects(component, link),
            _ => FormField::of_section(kind)
                .into_iter()
                .map(|field| text_field(component, link, field, false, false, None))
                .collect::<Html>(),
        };
        html! { <div class="accordion-body field-grid">{ content }</div> }
    } else {
        html! {}
    };

    html! {
        <section class={classes!("accordion", expanded.then_some("expanded"))}>
            <button class="accordion-summary" onclick={link.callback(move |_| Msg::ToggleSection(kind))}>
                <span>{ kind.title() }</span>
                <span class="accordion-icon">{ if expanded { "▴" } else { "▾" } }</span>
            </button>
            { body }
        </section>
    }
}

fn sketch_selects(component: &CustomizeComponent, link: &Scope<CustomizeComponent>) -> Html {
    let catalogs: [(SketchField, &'static str, &'static [CatalogOption]); 3] = [
        (SketchField::Type, "Art Type", ART_TYPES),
        (SketchField::Size, "Size", SIZES),
        (SketchField::Material, "Material", MATERIALS),
    ];

    catalogs
        .into_iter()
        .map(|(field, label, options)| {
            let field = FormField::from(field);
            let current = component.composer.form().value(field).to_string();
            let items = options
                .iter()
                .map(|o| html! { <option value={o.value} selected={o.value == current}>{ o.display }</option> })
                .collect::<Html>();
            let onchange = link.callback(move |e: Event| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlSelectElement>().value())
            });

            html! {
                <label class="field full-width">
                    <span class="field-label">{ label }</span>
                    <select id={field.dom_id()} {onchange}>
                        <option value="" selected={current.is_empty()}>{ "—" }</option>
                        { items }
                    </select>
                </label>
            }
        })
        .collect::<Html>()
}

fn text_field(
    component: &CustomizeComponent,
    link: &Scope<CustomizeComponent>,
    field: FormField,
    required: bool,
    invalid: bool,
    helper: Option<String>,
) -> Html {
    let kind = InputKind::of(field);
    let value = component.composer.form().value(field).to_string();
    let label = if required {
        format!("{}*", field.label())
    } else {
        field.label().to_string()
    };
    let class = classes!(
        "field",
        (kind == InputKind::Multiline).then_some("full-width"),
        invalid.then_some("error")
    );

    let input = if kind == InputKind::Multiline {
        let oninput = link.callback(move |e: InputEvent| {
            Msg::SetField(field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        html! { <textarea id={field.dom_id()} rows="3" {value} {oninput} /> }
    } else {
        let oninput = link.callback(move |e: InputEvent| {
            Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
        });
        html! { <input id={field.dom_id()} type={kind.html_type()} {value} {oninput} /> }
    };

    html! {
        <label {class}>
            <span class="field-label">{ label }</span>
            { input }
            if let Some(message) = helper {
                <span class="helper-text">{ message }</span>
            }
        </label>
    }
}
