pub mod lightbox_sheet;
