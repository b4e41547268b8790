//! Form state for the "customize your order" page.
//!
//! The order form is made of six sections. Each section is a plain struct of
//! `String` fields plus a field enum used to address it, so every section can
//! be read and written uniformly through [`OrderForm::set_field`] and
//! iterated uniformly through [`OrderForm::sections`].

use serde::{Deserialize, Serialize};

/// Declares a section struct and its field enum.
///
/// Field order in the invocation is the order used everywhere else: in the
/// rendered form, in validation and in the composed message.
macro_rules! form_section {
    (
        $(#[$meta:meta])*
        $name:ident, $field:ident, $kind:expr => {
            $( $variant:ident => $member:ident : $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( pub $member: String, )+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $field {
            $( $variant, )+
        }

        impl $field {
            pub const ALL: &'static [$field] = &[ $( $field::$variant ),+ ];

            /// Human readable label, used both as the form label and as the
            /// key of the line in the composed message.
            pub fn label(self) -> &'static str {
                match self {
                    $( $field::$variant => $label, )+
                }
            }
        }

        impl From<$field> for FormField {
            fn from(field: $field) -> Self {
                FormField::$field(field)
            }
        }

        impl $name {
            pub const KIND: SectionKind = $kind;

            pub fn value(&self, field: $field) -> &str {
                match field {
                    $( $field::$variant => &self.$member, )+
                }
            }

            pub fn set(&mut self, field: $field, value: impl Into<String>) {
                let value = value.into();
                match field {
                    $( $field::$variant => self.$member = value, )+
                }
            }

            /// `(label, raw value)` pairs in declaration order.
            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                $field::ALL
                    .iter()
                    .map(|field| (field.label(), self.value(*field)))
                    .collect()
            }

            /// True when every field is empty after trimming.
            pub fn is_blank(&self) -> bool {
                $field::ALL
                    .iter()
                    .all(|field| self.value(*field).trim().is_empty())
            }
        }
    };
}

/// The sections of the order form, in the fixed order they are rendered and
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Personal,
    Sketch,
    LiveSketch,
    Mural,
    Tshirt,
    Shoe,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Personal,
        SectionKind::Sketch,
        SectionKind::LiveSketch,
        SectionKind::Mural,
        SectionKind::Tshirt,
        SectionKind::Shoe,
    ];

    /// Header written into the composed message.
    pub fn header(self) -> &'static str {
        match self {
            SectionKind::Personal => "*--Personal Information--*",
            SectionKind::Sketch => "*--Sketch Details--*",
            SectionKind::LiveSketch => "*--Live Sketch Event--*",
            SectionKind::Mural => "*--Mural Painting--*",
            SectionKind::Tshirt => "*--T-Shirt Design--*",
            SectionKind::Shoe => "*--Shoe Customization--*",
        }
    }

    /// Title shown above the section on the page.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Personal => "👤 Personal Information",
            SectionKind::Sketch => "🖌 Art Options",
            SectionKind::LiveSketch => "📅 Live Sketch",
            SectionKind::Mural => "🎨 Mural Paint",
            SectionKind::Tshirt => "👕 T-Shirt Design",
            SectionKind::Shoe => "👟 Shoe Paint",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Personal => "personal",
            SectionKind::Sketch => "sketch",
            SectionKind::LiveSketch => "live-sketch",
            SectionKind::Mural => "mural",
            SectionKind::Tshirt => "tshirt",
            SectionKind::Shoe => "shoe",
        }
    }
}

form_section! {
    /// Contact details of the customer. `name` and `phone` are required.
    PersonalInfo, PersonalField, SectionKind::Personal => {
        Name => name: "Name",
        Email => email: "Email",
        Phone => phone: "Phone",
        Address => address: "Address",
    }
}

form_section! {
    /// Selections from the art option catalog, stored as their labels.
    SketchOptions, SketchField, SectionKind::Sketch => {
        Type => r#type: "Type",
        Size => size: "Size",
        Material => material: "Material",
    }
}

form_section! {
    LiveSketchRequest, LiveSketchField, SectionKind::LiveSketch => {
        Place => place: "Place",
        Date => date: "Date",
        Time => time: "Time",
    }
}

form_section! {
    MuralRequest, MuralField, SectionKind::Mural => {
        WallSize => wall_size: "Wall Size",
        Design => design: "Design",
        Location => location: "Location",
        Description => description: "Description",
    }
}

form_section! {
    TshirtRequest, TshirtField, SectionKind::Tshirt => {
        Size => size: "Size",
        Color => color: "Color",
        Design => design: "Design",
        Description => description: "Description",
    }
}

form_section! {
    ShoeRequest, ShoeField, SectionKind::Shoe => {
        Type => r#type: "Type",
        Size => size: "Size",
        Design => design: "Design",
        Description => description: "Description",
    }
}

/// Address of a single input of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    PersonalField(PersonalField),
    SketchField(SketchField),
    LiveSketchField(LiveSketchField),
    MuralField(MuralField),
    TshirtField(TshirtField),
    ShoeField(ShoeField),
}

impl FormField {
    pub fn section(self) -> SectionKind {
        match self {
            FormField::PersonalField(_) => SectionKind::Personal,
            FormField::SketchField(_) => SectionKind::Sketch,
            FormField::LiveSketchField(_) => SectionKind::LiveSketch,
            FormField::MuralField(_) => SectionKind::Mural,
            FormField::TshirtField(_) => SectionKind::Tshirt,
            FormField::ShoeField(_) => SectionKind::Shoe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::PersonalField(f) => f.label(),
            FormField::SketchField(f) => f.label(),
            FormField::LiveSketchField(f) => f.label(),
            FormField::MuralField(f) => f.label(),
            FormField::TshirtField(f) => f.label(),
            FormField::ShoeField(f) => f.label(),
        }
    }

    /// Element id of the input, unique across the page. Used to scroll the
    /// first invalid field into view.
    pub fn dom_id(self) -> String {
        let field = self.label().to_lowercase().replace(' ', "-");
        format!("{}-{}", self.section().slug(), field)
    }

    /// Every field of every section, sections in their fixed order.
    pub fn all() -> Vec<FormField> {
        PersonalField::ALL
            .iter()
            .map(|f| FormField::from(*f))
            .chain(SketchField::ALL.iter().map(|f| FormField::from(*f)))
            .chain(LiveSketchField::ALL.iter().map(|f| FormField::from(*f)))
            .chain(MuralField::ALL.iter().map(|f| FormField::from(*f)))
            .chain(TshirtField::ALL.iter().map(|f| FormField::from(*f)))
            .chain(ShoeField::ALL.iter().map(|f| FormField::from(*f)))
            .collect()
    }

    /// Fields of one section, in key order.
    pub fn of_section(kind: SectionKind) -> Vec<FormField> {
        Self::all()
            .into_iter()
            .filter(|field| field.section() == kind)
            .collect()
    }
}

/// One section flattened to its label/value pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSection<'a> {
    pub kind: SectionKind,
    pub fields: Vec<(&'static str, &'a str)>,
}

/// The complete state of the order form. Created empty on page mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub personal: PersonalInfo,
    pub sketch: SketchOptions,
    pub live_sketch: LiveSketchRequest,
    pub mural: MuralRequest,
    pub tshirt: TshirtRequest,
    pub shoe: ShoeRequest,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` verbatim. No validation happens here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::PersonalField(f) => self.personal.set(f, value),
            FormField::SketchField(f) => self.sketch.set(f, value),
            FormField::LiveSketchField(f) => self.live_sketch.set(f, value),
            FormField::MuralField(f) => self.mural.set(f, value),
            FormField::TshirtField(f) => self.tshirt.set(f, value),
            FormField::ShoeField(f) => self.shoe.set(f, value),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::PersonalField(f) => self.personal.value(f),
            FormField::SketchField(f) => self.sketch.value(f),
            FormField::LiveSketchField(f) => self.live_sketch.value(f),
            FormField::MuralField(f) => self.mural.value(f),
            FormField::TshirtField(f) => self.tshirt.value(f),
            FormField::ShoeField(f) => self.shoe.value(f),
        }
    }

    /// All sections as a tagged list in their fixed order, regardless of
    /// whether they hold any value.
    pub fn sections(&self) -> Vec<FormSection<'_>> {
        vec![
            FormSection {
                kind: PersonalInfo::KIND,
                fields: self.personal.entries(),
            },
            FormSection {
                kind: SketchOptions::KIND,
                fields: self.sketch.entries(),
            },
            FormSection {
                kind: LiveSketchRequest::KIND,
                fields: self.live_sketch.entries(),
            },
            FormSection {
                kind: MuralRequest::KIND,
                fields: self.mural.entries(),
            },
            FormSection {
                kind: TshirtRequest::KIND,
                fields: self.tshirt.entries(),
            },
            FormSection {
                kind: ShoeRequest::KIND,
                fields: self.shoe.entries(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_writes_only_the_addressed_section() {
        let mut form = OrderForm::new();
        form.set_field(MuralField::Design.into(), "Jungle scene");

        assert_eq!(form.mural.design, "Jungle scene");
        assert_eq!(form.tshirt, TshirtRequest::default());
        assert_eq!(form.value(MuralField::Design.into()), "Jungle scene");
    }

    #[test]
    fn set_field_keeps_raw_value() {
        let mut form = OrderForm::new();
        form.set_field(PersonalField::Name.into(), "  Asha ");
        assert_eq!(form.personal.name, "  Asha ");
    }

    #[test]
    fn sections_are_listed_in_fixed_order() {
        let form = OrderForm::new();
        let kinds: Vec<SectionKind> = form.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn blank_section_ignores_whitespace() {
        let mut shoe = ShoeRequest::default();
        shoe.set(ShoeField::Size, "   ");
        assert!(shoe.is_blank());
        shoe.set(ShoeField::Size, "42");
        assert!(!shoe.is_blank());
    }

    #[test]
    fn dom_ids_are_unique() {
        let mut ids: Vec<String> = FormField::all().into_iter().map(FormField::dom_id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(FormField::from(MuralField::WallSize).dom_id(), "mural-wall-size");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut form = OrderForm::new();
        form.set_field(MuralField::WallSize.into(), "10x12 ft");
        form.set_field(ShoeField::Type.into(), "Sneaker");

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["mural"]["wallSize"], "10x12 ft");
        assert_eq!(json["shoe"]["type"], "Sneaker");
        assert_eq!(json["liveSketch"]["place"], "");
    }

    #[test]
    fn of_section_lists_fields_in_key_order() {
        assert_eq!(
            FormField::of_section(SectionKind::Mural),
            [
                FormField::from(MuralField::WallSize),
                MuralField::Design.into(),
                MuralField::Location.into(),
                MuralField::Description.into(),
            ]
        );
        let total: usize = SectionKind::ALL
            .iter()
            .map(|kind| FormField::of_section(*kind).len())
            .sum();
        assert_eq!(total, FormField::all().len());
    }
}
