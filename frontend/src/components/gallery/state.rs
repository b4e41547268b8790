use common::model::gallery::{GalleryFilter, LightboxPosition};
use wasm_bindgen::closure::Closure;
use yew::NodeRef;

pub struct GalleryComponent {
    pub filter: GalleryFilter,
    pub filter_menu_open: bool,

    /// Item shown in the lightbox, `None` while it is closed.
    pub lightbox: Option<LightboxPosition>,

    /// True until the lightbox item has loaded enough to show (spinner).
    pub media_loading: bool,

    pub columns: usize,
    pub sheet_ref: NodeRef,
    pub resize_listener: Option<Closure<dyn Fn()>>,
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            filter: GalleryFilter::All,
            filter_menu_open: false,
            lightbox: None,
            media_loading: false,
            columns: columns_for_viewport(),
            sheet_ref: NodeRef::default(),
            resize_listener: None,
        }
    }
}

/// Grid columns for the current viewport width.
pub fn columns_for_viewport() -> usize {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1200.0);

    match width {
        w if w < 600.0 => 1,
        w if w < 900.0 => 2,
        _ => 3,
    }
}
