//! Full-screen sheet used by the gallery lightbox.
//!
//! The sheet is always mounted; showing and hiding toggles the `show` class
//! so the CSS transition can run.

use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct LightboxSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for LightboxSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="lightbox-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    set_shown(sheet_ref, true);
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    set_shown(sheet_ref, false);
}

fn set_shown(sheet_ref: &NodeRef, shown: bool) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let classes = sheet.class_list();
        let _ = if shown {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
    }
}
