//! "My Works" page: every gallery as a masonry grid, a filter menu to show a
//! single gallery, and a lightbox with previous/next navigation.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::GalleryComponent;
pub use view::tile_media;

impl Component for GalleryComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = GalleryComponent::new();

        let link = ctx.link().clone();
        let on_resize = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Resize));
        if let Some(window) = web_sys::window() {
            if window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .is_ok()
            {
                component.resize_listener = Some(on_resize);
            }
        }
        component
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }
}
