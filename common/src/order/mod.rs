//! Turning the order form into a WhatsApp hand-off.
//!
//! - `validate`: required and format checks on the personal information.
//! - `compose`: deterministic plain-text rendering of the filled sections.
//! - `handoff`: building the `wa.me` deep link.
//! - `composer`: the page-level controller tying the three together.

pub mod composer;
pub mod compose;
pub mod handoff;
pub mod validate;

pub use composer::{Handoff, OrderComposer, SubmissionPhase, SubmitOutcome};
pub use compose::compose;
pub use validate::{OrderError, ValidationResult, validate};
