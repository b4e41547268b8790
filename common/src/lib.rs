//! Shared domain logic for the studio site: the custom order form, its
//! validation and message composition, the portfolio catalog and routing.
//!
//! Everything here is plain Rust with no DOM access so it can be unit tested
//! natively and reused by the Yew frontend.

pub mod model;
pub mod order;
pub mod routes;
pub mod studio;
