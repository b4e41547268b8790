pub mod catalog;
pub mod gallery;
pub mod notice;
pub mod order;
