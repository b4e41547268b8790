use crate::app::App;

mod app;
mod components;
mod gallery_grid;
mod router;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
