//! DOM side effects of the customize page: toasts, focusing the first
//! invalid field and opening the WhatsApp link.

use common::model::notice::{Notice, Severity};
use common::model::order::{
    FormField, LiveSketchField, MuralField, PersonalField, ShoeField, TshirtField,
};
use wasm_bindgen::JsCast;
use web_sys::{FocusOptions, HtmlElement, ScrollLogicalPosition};

use crate::router::scroll_into_view;

const TOAST_MS: u32 = 5000;

/// How an input should be rendered.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    Multiline,
}

impl InputKind {
    pub fn of(field: FormField) -> Self {
        match field {
            FormField::PersonalField(PersonalField::Email) => InputKind::Email,
            FormField::PersonalField(PersonalField::Phone) => InputKind::Tel,
            FormField::LiveSketchField(LiveSketchField::Date) => InputKind::Date,
            FormField::LiveSketchField(LiveSketchField::Time) => InputKind::Time,
            FormField::MuralField(MuralField::Description)
            | FormField::TshirtField(TshirtField::Description)
            | FormField::ShoeField(ShoeField::Description) => InputKind::Multiline,
            _ => InputKind::Text,
        }
    }

    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::Time => "time",
            InputKind::Text | InputKind::Multiline => "text",
        }
    }
}

/// Shows `notice` as a toast in the top right corner. Errors stack in red,
/// successes in green. Each toast removes itself after a few seconds.
pub fn show_toast(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = toast_container(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    let severity = match notice.severity {
        Severity::Error => "error",
        Severity::Success => "success",
    };
    toast.set_class_name(&format!("toast {severity}"));
    toast.set_text_content(Some(&notice.message));

    if container.prepend_with_node_1(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            toast.remove();
        });
    }
}

fn toast_container(document: &web_sys::Document) -> Option<web_sys::Element> {
    if let Some(existing) = document.get_element_by_id("toast-container") {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_id("toast-container");
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Scrolls the input of `field` to the middle of the viewport and focuses it
/// without a second, instant scroll.
pub fn focus_field(field: FormField) {
    let id = field.dom_id();
    if !scroll_into_view(&id, ScrollLogicalPosition::Center) {
        return;
    }
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    if let Some(input) = input {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        let _ = input.focus_with_options(&options);
    }
}

/// Opens `url` in a new browsing context. Pop-up blockers may silently
/// swallow this; nothing is reported back.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
