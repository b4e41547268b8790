use std::collections::HashSet;

use common::model::order::SectionKind;
use common::order::OrderComposer;
use common::studio::StudioConfig;
use gloo_timers::callback::Timeout;

pub struct CustomizeComponent {
    /// Form state, last validation result and submission phase.
    pub composer: OrderComposer,

    pub studio: StudioConfig,

    /// Optional sections whose accordion panel is expanded.
    pub expanded: HashSet<SectionKind>,

    /// Pending opening of the WhatsApp link.
    pub handoff_timer: Option<Timeout>,

    /// Pending reset of the "submitted" banner. Replacing the handle drops,
    /// and so cancels, the previous timer.
    pub submitted_reset: Option<Timeout>,
}

impl CustomizeComponent {
    pub fn new() -> Self {
        let studio = StudioConfig::default();
        Self {
            composer: OrderComposer::new(studio.clone()),
            studio,
            expanded: HashSet::new(),
            handoff_timer: None,
            submitted_reset: None,
        }
    }
}
