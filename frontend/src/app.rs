use common::routes::{Location, Route};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ScrollLogicalPosition;
use yew::prelude::*;

use crate::components::customize::CustomizeComponent;
use crate::components::footer::Footer;
use crate::components::gallery::GalleryComponent;
use crate::components::navbar::Navbar;
use crate::components::pages::{about::About, contact::Contact, home::Home, not_found::NotFound};
use crate::router::{self, Navigator};

/// Delay before scrolling to a `#anchor`, leaving time for images to lay out.
const ANCHOR_SCROLL_DELAY_MS: u32 = 300;

pub enum Msg {
    /// A link was followed inside the app.
    Navigate(String),
    /// The browser moved through history (back/forward).
    Sync,
}

pub struct App {
    location: Location,
    navigator: Navigator,
    /// Set after a navigation until the next render has scrolled.
    scroll_pending: bool,
    anchor_timer: Option<Timeout>,
    _popstate: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Sync));
        let registered = web_sys::window().map(|window| {
            window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())
                .is_ok()
        });

        Self {
            location: router::current_location(),
            navigator: Navigator(ctx.link().callback(Msg::Navigate)),
            scroll_pending: true,
            anchor_timer: None,
            _popstate: (registered == Some(true)).then_some(popstate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(href) => {
                router::push_history(&href);
                self.location = Location::from_href(&href);
            }
            Msg::Sync => {
                self.location = router::current_location();
            }
        }
        self.scroll_pending = true;
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.location.route {
            Route::Home => html! { <Home /> },
            Route::Gallery => html! { <GalleryComponent /> },
            Route::Customize => html! { <CustomizeComponent /> },
            Route::About => html! { <About /> },
            Route::Contact => html! { <Contact /> },
            Route::NotFound => html! { <NotFound /> },
        };

        html! {
            <ContextProvider<Navigator> context={self.navigator.clone()}>
                <Navbar active={self.location.route} />
                <main class="page">{ page }</main>
                <Footer />
            </ContextProvider<Navigator>>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.scroll_pending {
            return;
        }
        self.scroll_pending = false;

        match self.location.anchor.clone() {
            Some(anchor) => {
                // Replacing the handle cancels a scroll still pending from an
                // earlier navigation.
                self.anchor_timer = Some(Timeout::new(ANCHOR_SCROLL_DELAY_MS, move || {
                    if !router::scroll_into_view(&anchor, ScrollLogicalPosition::Start) {
                        log!("no section with id", anchor);
                    }
                }));
            }
            None => {
                self.anchor_timer = None;
                router::scroll_to_top();
            }
        }
    }
}
