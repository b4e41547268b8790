use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub columns: usize,
    #[prop_or(12)]
    pub gap_px: usize,
    pub children: Children,
}

/// Masonry-style column layout for artwork thumbnails.
pub struct GalleryGrid;

impl Component for GalleryGrid {
    type Message = ();
    type Properties = GalleryGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GalleryGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "column-count: {};
             column-gap: {}px;
             width: 100%;",
            props.columns.max(1),
            props.gap_px
        );

        html! {
            <div class="gallery-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
