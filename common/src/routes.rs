//! Client-side routes of the site.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Gallery,
    Customize,
    About,
    Contact,
    NotFound,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/myworks",
            Route::Customize => "/customize",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    /// Resolves a pathname (trailing slashes and query ignored).
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/myworks" => Route::Gallery,
            "/customize" => Route::Customize,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }
}

/// A parsed location: the route plus the fragment naming a section to
/// scroll into view, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub anchor: Option<String>,
}

impl Location {
    /// Parses `pathname` and `hash` as reported by `window.location`.
    pub fn parse(pathname: &str, hash: &str) -> Self {
        let anchor = hash.trim_start_matches('#');
        Self {
            route: Route::from_path(pathname),
            anchor: (!anchor.is_empty()).then(|| anchor.to_string()),
        }
    }

    /// Parses an href such as `/myworks#oil-paint`.
    pub fn from_href(href: &str) -> Self {
        match href.split_once('#') {
            Some((path, hash)) => Self::parse(path, hash),
            None => Self::parse(href, ""),
        }
    }
}

/// An entry of the navbar or footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Gallery", href: "/myworks" },
    NavItem { label: "Custom Art", href: "/customize" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Contact", href: "/contact" },
];

pub const QUICK_LINKS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Gallery", href: "/myworks" },
    NavItem { label: "Booking", href: "/customize" },
];

/// Service shortcuts in the footer, each pointing at a gallery section.
pub const SERVICE_LINKS: &[NavItem] = &[
    NavItem { label: "Live Sketch", href: "/myworks#live-sketches" },
    NavItem { label: "T-shirt Design", href: "/myworks#t-shirt-designs" },
    NavItem { label: "Shoe Paint", href: "/myworks#shoe-paint" },
    NavItem { label: "Contact", href: "/contact" },
];
