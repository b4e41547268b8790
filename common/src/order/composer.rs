//! Page-level controller of the order form.
//!
//! The controller owns the form state and moves through
//! `Idle -> Validating -> {Invalid -> Idle, Submitting -> Submitted -> Idle}`.
//! Validation and composition happen inside [`OrderComposer::submit`], so only
//! `Idle` and `Submitted` are observable between events. Opening the link and
//! clearing `Submitted` after [`SUBMITTED_RESET_MS`] are left to the caller,
//! which owns the timers.

use log::debug;

use super::compose::compose;
use super::handoff::whatsapp_link;
use super::validate::{ValidationResult, validate};
use crate::model::notice::Notice;
use crate::model::order::{FormField, OrderForm};
use crate::studio::StudioConfig;

/// Delay before the deep link is opened.
pub const HANDOFF_DELAY_MS: u32 = 300;
/// How long the "submitted" banner stays visible.
pub const SUBMITTED_RESET_MS: u32 = 5_000;

pub const SENT_NOTICE: &str = "Request sent via WhatsApp!";
pub const SUBMITTED_BANNER: &str =
    "Your request has been prepared! Check WhatsApp to confirm details.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitted,
}

/// The message and link produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub message: String,
    pub url: String,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed. Nothing was composed and no link should be opened.
    Rejected {
        notices: Vec<Notice>,
        focus: Option<FormField>,
    },
    Sent(Handoff),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderComposer {
    config: StudioConfig,
    form: OrderForm,
    validation: ValidationResult,
    phase: SubmissionPhase,
}

impl OrderComposer {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            form: OrderForm::new(),
            validation: ValidationResult::default(),
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Result of the last submit. Errors stay visible until the next one.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.validation = validate(&self.form.personal);

        if !self.validation.is_valid() {
            debug!("order rejected: {:?}", self.validation.errors());
            self.phase = SubmissionPhase::Idle;
            return SubmitOutcome::Rejected {
                notices: self.validation.notices(),
                focus: self.validation.first_invalid().map(FormField::from),
            };
        }

        let message = compose(&self.form);
        let url = whatsapp_link(&self.config.order_whatsapp_number, &message);
        debug!("order composed ({} bytes)", message.len());

        self.phase = SubmissionPhase::Submitted;
        SubmitOutcome::Sent(Handoff {
            message,
            url,
            notice: Notice::success(SENT_NOTICE),
        })
    }

    /// Called when the auto-clear timer fires.
    pub fn clear_submitted(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::PersonalField;

    #[test]
    fn starts_idle_and_empty() {
        let composer = OrderComposer::default();
        assert!(!composer.is_submitted());
        assert_eq!(composer.form(), &OrderForm::new());
        assert!(composer.validation().is_valid());
    }

    #[test]
    fn rejected_submit_keeps_errors_and_focuses_first_field() {
        let mut composer = OrderComposer::default();
        composer.set_field(PersonalField::Name.into(), "Raj");

        let outcome = composer.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                notices: vec![Notice::error("Phone is required")],
                focus: Some(PersonalField::Phone.into()),
            }
        );
        assert!(composer.validation().is_invalid(PersonalField::Phone));
        assert!(!composer.is_submitted());
    }

    #[test]
    fn successful_submit_marks_submitted_until_cleared() {
        let mut composer = OrderComposer::default();
        composer.set_field(PersonalField::Name.into(), "Asha");
        composer.set_field(PersonalField::Phone.into(), "9876543210");

        let SubmitOutcome::Sent(handoff) = composer.submit() else {
            panic!("expected the order to be sent");
        };
        assert_eq!(handoff.notice, Notice::success(SENT_NOTICE));
        assert!(composer.is_submitted());

        composer.clear_submitted();
        assert!(!composer.is_submitted());
    }

    #[test]
    fn link_uses_configured_number() {
        let config = StudioConfig {
            order_whatsapp_number: "1234567890".to_string(),
            ..StudioConfig::default()
        };
        let mut composer = OrderComposer::new(config);
        composer.set_field(PersonalField::Name.into(), "Asha");
        composer.set_field(PersonalField::Phone.into(), "9876543210");

        match composer.submit() {
            SubmitOutcome::Sent(handoff) => {
                assert!(handoff.url.starts_with("https://wa.me/1234567890?text="))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn fixing_the_field_recovers() {
        let mut composer = OrderComposer::default();
        composer.set_field(PersonalField::Name.into(), "Asha");
        composer.set_field(PersonalField::Phone.into(), "12345");
        assert!(matches!(composer.submit(), SubmitOutcome::Rejected { .. }));

        composer.set_field(PersonalField::Phone.into(), "9876543210");
        assert!(matches!(composer.submit(), SubmitOutcome::Sent(_)));
        assert!(composer.validation().is_valid());
    }
}
