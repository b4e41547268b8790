pub mod customize;
pub mod footer;
pub mod gallery;
pub mod navbar;
pub mod pages;
