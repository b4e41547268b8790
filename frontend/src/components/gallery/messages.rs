use common::model::gallery::{Direction, Gallery, GalleryFilter};

pub enum Msg {
    ToggleFilterMenu,
    SetFilter(GalleryFilter),
    Open {
        gallery: &'static Gallery,
        index: usize,
    },
    Step(Direction),
    Close,
    MediaLoaded,
    Resize,
}
