use common::routes::{Route, NAV_ITEMS};
use common::studio::StudioConfig;
use yew::prelude::*;

use crate::router::Link;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Route,
}

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

/// Top bar with the site links. On narrow screens the links collapse into a
/// drawer opened by the menu button.
pub struct Navbar {
    menu_open: bool,
    studio: StudioConfig,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu_open: false,
            studio: StudioConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => self.menu_open = !self.menu_open,
            Msg::CloseMenu => {
                if !self.menu_open {
                    return false;
                }
                self.menu_open = false;
            }
        }
        true
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.menu_open = false;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.props().active;
        let link = ctx.link();

        let items = NAV_ITEMS
            .iter()
            .map(|item| {
                let class = classes!(
                    "nav-link",
                    (Route::from_path(item.href) == active).then_some("active")
                );
                html! {
                    <li onclick={link.callback(|_| Msg::CloseMenu)}>
                        <Link href={item.href} {class}>{ item.label }</Link>
                    </li>
                }
            })
            .collect::<Html>();

        let socials = self
            .studio
            .socials
            .iter()
            .map(|s| {
                html! {
                    <a class="social-link" href={s.url.clone()} target="_blank" rel="noopener noreferrer">
                        { s.label.clone() }
                    </a>
                }
            })
            .collect::<Html>();

        html! {
            <header class="navbar">
                <Link href="/" class={classes!("brand")}>{ self.studio.name.clone() }</Link>
                <button
                    class="menu-button"
                    aria-label="Toggle navigation"
                    onclick={link.callback(|_| Msg::ToggleMenu)}
                >
                    { if self.menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={classes!("nav-links", self.menu_open.then_some("open"))}>
                    <ul>{ items }</ul>
                    <div class="nav-socials">{ socials }</div>
                </nav>
            </header>
        }
    }
}
