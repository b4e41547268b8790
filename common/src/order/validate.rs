use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::notice::Notice;
use crate::model::order::{PersonalField, PersonalInfo};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Fields that must not be blank.
pub const REQUIRED: [PersonalField; 2] = [PersonalField::Name, PersonalField::Phone];

/// Why a personal information field was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("{} is required", .0.label())]
    MissingRequiredField(PersonalField),

    #[error("{}", format_message(.0))]
    InvalidFormat(PersonalField),
}

impl OrderError {
    pub fn field(&self) -> PersonalField {
        match self {
            OrderError::MissingRequiredField(field) | OrderError::InvalidFormat(field) => *field,
        }
    }
}

fn format_message(field: &PersonalField) -> &'static str {
    match field {
        PersonalField::Email => "Please enter a valid email",
        PersonalField::Phone => "Please enter a valid phone number",
        PersonalField::Name | PersonalField::Address => "Please enter a valid value",
    }
}

/// Outcome of [`validate`]: at most one error per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<OrderError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_invalid(&self, field: PersonalField) -> bool {
        self.error(field).is_some()
    }

    pub fn error(&self, field: PersonalField) -> Option<&OrderError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Inline text under `field`. Only format errors carry one; a missing
    /// field is outlined and announced through [`Self::notices`].
    pub fn helper_text(&self, field: PersonalField) -> Option<String> {
        self.error(field)
            .filter(|e| matches!(e, OrderError::InvalidFormat(_)))
            .map(OrderError::to_string)
    }

    pub fn errors(&self) -> &[OrderError] {
        &self.errors
    }

    /// First invalid field in field order, used to move focus.
    pub fn first_invalid(&self) -> Option<PersonalField> {
        self.errors.first().map(OrderError::field)
    }

    /// Notices for the notification layer: format errors (email, then
    /// phone) followed by the first missing required field.
    pub fn notices(&self) -> Vec<Notice> {
        let formats = self
            .errors
            .iter()
            .filter(|e| matches!(e, OrderError::InvalidFormat(_)));
        let first_missing = self
            .errors
            .iter()
            .find(|e| matches!(e, OrderError::MissingRequiredField(_)));

        formats
            .chain(first_missing)
            .map(|e| Notice::error(e.to_string()))
            .collect()
    }
}

/// Checks required fields and the email and phone shapes.
///
/// A blank required field is reported as missing only. Format rules apply
/// to the raw value and are skipped for a blank email.
pub fn validate(info: &PersonalInfo) -> ValidationResult {
    let mut errors = Vec::new();

    for &field in PersonalField::ALL {
        let value = info.value(field);

        if REQUIRED.contains(&field) && value.trim().is_empty() {
            errors.push(OrderError::MissingRequiredField(field));
            continue;
        }

        let well_formed = match field {
            PersonalField::Email => value.trim().is_empty() || EMAIL_RE.is_match(value),
            PersonalField::Phone => PHONE_RE.is_match(value),
            PersonalField::Name | PersonalField::Address => true,
        };
        if !well_formed {
            errors.push(OrderError::InvalidFormat(field));
        }
    }

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, email: &str, phone: &str) -> PersonalInfo {
        PersonalInfo {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: String::new(),
        }
    }

    #[test]
    fn accepts_minimal_valid_info() {
        let result = validate(&info("Asha", "", "9876543210"));
        assert!(result.is_valid());
        assert!(result.notices().is_empty());
        assert_eq!(result.first_invalid(), None);
    }

    #[test]
    fn blank_required_fields_are_missing() {
        for (name, phone) in [("", "9876543210"), ("   ", "9876543210"), ("Asha", ""), ("Asha", " \t")] {
            let result = validate(&info(name, "", phone));
            assert!(!result.is_valid());
            let field = if name.trim().is_empty() { PersonalField::Name } else { PersonalField::Phone };
            assert_eq!(result.error(field), Some(&OrderError::MissingRequiredField(field)));
        }
    }

    #[test]
    fn blank_phone_is_not_also_a_format_error() {
        let result = validate(&info("Asha", "", ""));
        assert_eq!(result.errors(), &[OrderError::MissingRequiredField(PersonalField::Phone)]);
        assert_eq!(result.notices(), vec![Notice::error("Phone is required")]);
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for phone in ["123", "98765432101", "98765-4321", "987654321a", " 9876543210", "９８７６５４３２１０"] {
            let result = validate(&info("Asha", "", phone));
            assert_eq!(
                result.error(PersonalField::Phone),
                Some(&OrderError::InvalidFormat(PersonalField::Phone)),
                "{phone:?}"
            );
        }
        assert_eq!(
            OrderError::InvalidFormat(PersonalField::Phone).to_string(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn email_shape_is_checked_only_when_present() {
        assert!(validate(&info("Asha", "asha@studio.in", "9876543210")).is_valid());
        assert!(validate(&info("Asha", "   ", "9876543210")).is_valid());

        for email in ["not-an-email", "a@b", "@studio.in", "a b@c.d"] {
            let result = validate(&info("Asha", email, "9876543210"));
            assert!(result.is_invalid(PersonalField::Email), "{email:?}");
            assert_eq!(result.notices(), vec![Notice::error("Please enter a valid email")]);
        }
    }

    #[test]
    fn notices_put_format_errors_before_first_missing_field() {
        let result = validate(&info("", "bad", "123"));
        let messages: Vec<String> = result.notices().into_iter().map(|n| n.message).collect();
        assert_eq!(
            messages,
            [
                "Please enter a valid email",
                "Please enter a valid phone number",
                "Name is required"
            ]
        );
        assert_eq!(result.first_invalid(), Some(PersonalField::Name));
    }

    #[test]
    fn only_first_missing_field_is_announced() {
        let result = validate(&info("", "", ""));
        assert!(result.is_invalid(PersonalField::Name));
        assert!(result.is_invalid(PersonalField::Phone));
        assert_eq!(result.notices(), vec![Notice::error("Name is required")]);
    }

    #[test]
    fn helper_text_only_for_format_errors() {
        let result = validate(&info("", "bad", "123"));
        assert_eq!(
            result.helper_text(PersonalField::Email).as_deref(),
            Some("Please enter a valid email")
        );
        assert_eq!(
            result.helper_text(PersonalField::Phone).as_deref(),
            Some("Please enter a valid phone number")
        );
        assert!(result.is_invalid(PersonalField::Name));
        assert_eq!(result.helper_text(PersonalField::Name), None);
        assert_eq!(result.helper_text(PersonalField::Address), None);
    }
}
