//! Portfolio galleries shown on the "My Works" page and previewed on the
//! home page.

use serde::{Deserialize, Serialize};

/// One tile of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "src", rename_all = "lowercase")]
pub enum MediaItem {
    Image(String),
    Video(String),
}

impl MediaItem {
    pub fn src(&self) -> &str {
        match self {
            MediaItem::Image(src) | MediaItem::Video(src) => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video(_))
    }
}

/// A named collection of artwork served from `/assets/<dir>/`. A gallery
/// with a `video` shows it as its first item, ahead of the images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub name: &'static str,
    dir: &'static str,
    video: Option<&'static str>,
    first_index: usize,
    image_count: usize,
}

impl Gallery {
    /// Anchor id of the gallery section: lowercase with whitespace runs
    /// replaced by `-`.
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.image_count + usize::from(self.video.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`, or `None` past the end.
    pub fn item(&self, index: usize) -> Option<MediaItem> {
        let image = match (self.video, index) {
            (Some(file), 0) => return Some(MediaItem::Video(format!("/assets/{}/{file}", self.dir))),
            (Some(_), i) => i - 1,
            (None, i) => i,
        };
        (image < self.image_count)
            .then(|| MediaItem::Image(format!("/assets/{}/img{}.jpg", self.dir, self.first_index + image)))
    }

    pub fn items(&self) -> impl Iterator<Item = MediaItem> + '_ {
        (0..self.len()).filter_map(|i| self.item(i))
    }
}

pub const GALLERIES: &[Gallery] = &[
    Gallery {
        name: "Custom Portraits",
        dir: "portrait",
        video: Some("video1.mp4"),
        first_index: 1,
        image_count: 9,
    },
    Gallery {
        name: "Live Sketches",
        dir: "livesketch",
        video: Some("video.mp4"),
        first_index: 3,
        image_count: 8,
    },
    Gallery {
        name: "T-Shirt Designs",
        dir: "Tshirt",
        video: Some("video2.mp4"),
        first_index: 1,
        image_count: 4,
    },
    Gallery {
        name: "Oil Paint",
        dir: "oil",
        video: None,
        first_index: 1,
        image_count: 8,
    },
    Gallery {
        name: "Mural Paint",
        dir: "mural",
        video: Some("video.mp4"),
        first_index: 1,
        image_count: 6,
    },
    Gallery {
        name: "Shoe Paint",
        dir: "shoepaint",
        video: None,
        first_index: 1,
        image_count: 8,
    },
];

/// Home page showcase: gallery slug and section title, in display order.
const SHOWCASE: &[(&str, &str)] = &[
    ("custom-portraits", "Portraits"),
    ("live-sketches", "Live Sketches"),
    ("mural-paint", "Mural Paints"),
    ("oil-paint", "Oil Paints"),
    ("shoe-paint", "Shoe Paints"),
    ("t-shirt-designs", "T-Shirt Designs"),
];

/// Items previewed per showcase section.
pub const SHOWCASE_ITEMS: usize = 4;

/// A home page preview of one gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showcase {
    pub title: &'static str,
    pub gallery: &'static Gallery,
}

impl Showcase {
    pub fn items(&self) -> impl Iterator<Item = MediaItem> + '_ {
        self.gallery.items().take(SHOWCASE_ITEMS)
    }

    /// Link to the gallery section on the "My Works" page.
    pub fn gallery_href(&self) -> String {
        format!("/myworks#{}", self.gallery.slug())
    }
}

pub fn showcases() -> Vec<Showcase> {
    SHOWCASE
        .iter()
        .filter_map(|&(slug, title)| find_by_slug(slug).map(|gallery| Showcase { title, gallery }))
        .collect()
}

pub fn find_by_slug(slug: &str) -> Option<&'static Gallery> {
    GALLERIES.iter().find(|g| g.slug() == slug)
}

/// Which galleries the page currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(String),
}

impl GalleryFilter {
    pub fn label(&self) -> &str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Only(name) => name,
        }
    }

    pub fn visible(&self) -> Vec<&'static Gallery> {
        GALLERIES
            .iter()
            .filter(|g| match self {
                GalleryFilter::All => true,
                GalleryFilter::Only(name) => g.name == name,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// The item currently opened in the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxPosition {
    pub gallery: &'static Gallery,
    pub index: usize,
}

impl LightboxPosition {
    pub fn new(gallery: &'static Gallery, index: usize) -> Option<Self> {
        (index < gallery.len()).then_some(Self { gallery, index })
    }

    pub fn item(&self) -> Option<MediaItem> {
        self.gallery.item(self.index)
    }

    /// Moves one item in `direction`, wrapping around at both ends.
    pub fn step(self, direction: Direction) -> Self {
        let len = self.gallery.len();
        let index = match direction {
            Direction::Prev => (self.index + len - 1) % len,
            Direction::Next => (self.index + 1) % len,
        };
        Self { index, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_anchor_links() {
        let slugs: Vec<String> = GALLERIES.iter().map(Gallery::slug).collect();
        assert_eq!(
            slugs,
            [
                "custom-portraits",
                "live-sketches",
                "t-shirt-designs",
                "oil-paint",
                "mural-paint",
                "shoe-paint"
            ]
        );
        assert_eq!(find_by_slug("oil-paint").map(|g| g.name), Some("Oil Paint"));
        assert!(find_by_slug("sculpture").is_none());
    }

    #[test]
    fn video_leads_and_images_honor_first_index() {
        let live = find_by_slug("live-sketches").unwrap();
        let items: Vec<MediaItem> = live.items().collect();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0], MediaItem::Video("/assets/livesketch/video.mp4".to_string()));
        assert_eq!(items[1], MediaItem::Image("/assets/livesketch/img3.jpg".to_string()));
        assert_eq!(items[8].src(), "/assets/livesketch/img10.jpg");
        assert_eq!(live.item(9), None);
        assert_eq!(items.iter().filter(|i| i.is_video()).count(), 1);
    }

    #[test]
    fn galleries_without_video_hold_only_images() {
        let oil = find_by_slug("oil-paint").unwrap();
        assert_eq!(oil.len(), 8);
        assert!(oil.items().all(|i| !i.is_video()));
        assert_eq!(oil.item(0).as_ref().map(MediaItem::src), Some("/assets/oil/img1.jpg"));
    }

    #[test]
    fn showcases_preview_each_gallery_in_home_order() {
        let showcases = showcases();
        let titles: Vec<&str> = showcases.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Portraits", "Live Sketches", "Mural Paints", "Oil Paints", "Shoe Paints", "T-Shirt Designs"]
        );

        let mural = &showcases[2];
        assert_eq!(mural.gallery_href(), "/myworks#mural-paint");
        let preview: Vec<MediaItem> = mural.items().collect();
        assert_eq!(preview.len(), SHOWCASE_ITEMS);
        assert!(preview[0].is_video());
        assert!(preview[1..].iter().all(|i| !i.is_video()));
    }

    #[test]
    fn filter_selects_galleries() {
        assert_eq!(GalleryFilter::All.visible().len(), GALLERIES.len());

        let only = GalleryFilter::Only("Mural Paint".to_string());
        let visible = only.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Mural Paint");
        assert_eq!(only.label(), "Mural Paint");
    }

    #[test]
    fn lightbox_wraps_around() {
        let tshirts = find_by_slug("t-shirt-designs").unwrap();
        let first = LightboxPosition::new(tshirts, 0).unwrap();

        assert!(first.item().is_some_and(|i| i.is_video()));

        let last = first.step(Direction::Prev);
        assert_eq!(last.index, 4);
        assert_eq!(last.item().as_ref().map(MediaItem::src), Some("/assets/Tshirt/img4.jpg"));
        assert_eq!(last.step(Direction::Next).index, 0);
        assert!(LightboxPosition::new(tshirts, 5).is_none());
    }
}
