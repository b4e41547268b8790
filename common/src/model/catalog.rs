//! Choices offered by the "Art Options" selects.
//!
//! The form stores the chosen label as a plain string, so these catalogs only
//! drive what the page renders.

/// A selectable option: the value stored in the form and the text shown in
/// the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub value: &'static str,
    pub display: &'static str,
}

const fn option(value: &'static str, display: &'static str) -> CatalogOption {
    CatalogOption { value, display }
}

pub const ART_TYPES: &[CatalogOption] = &[
    option("Realistic Pencil Sketch", "📝 Realistic Pencil Sketch"),
    option("Cartoon Sketch", "🎨 Cartoon Sketch"),
    option("Regular Sketch", "✏ Regular Sketch"),
    option("Acrylic Painting", "🎨 Acrylic Painting"),
    option("Oil Painting", "🖌️ Oil Painting"),
    option("Watercolor", "💧 Watercolor"),
    option("Art Prints", "🖼️ Art Prints"),
];

pub const SIZES: &[CatalogOption] = &[
    option("A4", "📄 A4"),
    option("A3", "🖼 A3"),
    option("A2", "🗂 A2"),
    option("A1", "📐 A1"),
    option("Custom", "⚙️ Custom Size"),
];

pub const MATERIALS: &[CatalogOption] = &[
    option("Paper", "📜 Paper"),
    option("Canvas", "🖌 Canvas"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_are_distinct() {
        for catalog in [ART_TYPES, SIZES, MATERIALS] {
            let mut values: Vec<&str> = catalog.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), catalog.len());
        }
    }
}
