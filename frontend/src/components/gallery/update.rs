use common::model::gallery::LightboxPosition;
use gloo_console::warn;

use crate::tops_sheet::lightbox_sheet::{close_sheet, open_sheet};

use super::messages::Msg;
use super::state::{columns_for_viewport, GalleryComponent};

pub fn update(component: &mut GalleryComponent, msg: Msg) -> bool {
    match msg {
        Msg::ToggleFilterMenu => {
            component.filter_menu_open = !component.filter_menu_open;
            true
        }
        Msg::SetFilter(filter) => {
            component.filter = filter;
            component.filter_menu_open = false;
            true
        }
        Msg::Open { gallery, index } => match LightboxPosition::new(gallery, index) {
            Some(position) => {
                component.lightbox = Some(position);
                component.media_loading = true;
                open_sheet(&component.sheet_ref);
                true
            }
            None => {
                warn!("no item at index", index, "in", gallery.name);
                false
            }
        },
        Msg::Step(direction) => match component.lightbox {
            Some(position) => {
                component.lightbox = Some(position.step(direction));
                component.media_loading = true;
                true
            }
            None => false,
        },
        Msg::Close => {
            close_sheet(&component.sheet_ref);
            component.lightbox = None;
            component.media_loading = false;
            true
        }
        Msg::MediaLoaded => {
            component.media_loading = false;
            true
        }
        Msg::Resize => {
            let columns = columns_for_viewport();
            if columns == component.columns {
                return false;
            }
            component.columns = columns;
            true
        }
    }
}
