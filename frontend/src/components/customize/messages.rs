use common::model::order::{FormField, SectionKind};

pub enum Msg {
    SetField(FormField, String),
    ToggleSection(SectionKind),
    Submit,
    /// Fired by the auto-clear timer after a successful submit.
    ClearSubmitted,
}
