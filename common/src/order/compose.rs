use crate::model::order::{FormSection, OrderForm};

pub const INTRO: &str =
    "New Custom Art Request\n\nHere are the details for my custom artwork request:";
pub const CLOSING: &str = "\n\nThank you! I'm looking forward to working with you on this project.\n\nPlease let me know if you need any additional information.";

/// Renders the filled parts of `form` as the message sent to the studio.
///
/// Sections keep their fixed order. Within a section only fields with a
/// non-blank value are written, trimmed, one `• Label: value` line each. A
/// section without such fields is left out together with its header.
pub fn compose(form: &OrderForm) -> String {
    let mut message = String::from(INTRO);
    for section in form.sections() {
        if let Some(block) = render_section(&section) {
            message.push_str(&block);
        }
    }
    message.push_str(CLOSING);
    message
}

fn render_section(section: &FormSection<'_>) -> Option<String> {
    let lines: Vec<String> = section
        .fields
        .iter()
        .map(|(label, value)| (label, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("• {label}: {value}"))
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(format!("\n\n  {}\n{}", section.kind.header(), lines.join("\n")))
}
