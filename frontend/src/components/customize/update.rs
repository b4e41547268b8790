//! Reducer for the customize page.
//!
//! `SetField` only stores the raw value; validation is deferred to `Submit`.
//! A successful submit schedules two timers: opening the WhatsApp link after
//! `HANDOFF_DELAY_MS`, and clearing the "submitted" banner after
//! `SUBMITTED_RESET_MS`. Both handles live on the component, so a new submit
//! replaces, and thereby cancels, any timer still pending.

use common::order::composer::{HANDOFF_DELAY_MS, SUBMITTED_RESET_MS};
use common::order::SubmitOutcome;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::helpers::{focus_field, open_in_new_tab, show_toast};
use super::messages::Msg;
use super::state::CustomizeComponent;

pub fn update(
    component: &mut CustomizeComponent,
    ctx: &Context<CustomizeComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.composer.set_field(field, value);
            true
        }
        Msg::ToggleSection(kind) => {
            if !component.expanded.remove(&kind) {
                component.expanded.insert(kind);
            }
            true
        }
        Msg::Submit => {
            match component.composer.submit() {
                SubmitOutcome::Rejected { notices, focus } => {
                    log!("order rejected with", notices.len(), "notice(s)");
                    for notice in &notices {
                        show_toast(notice);
                    }
                    if let Some(field) = focus {
                        focus_field(field);
                    }
                }
                SubmitOutcome::Sent(handoff) => {
                    log!("order handed off to WhatsApp");
                    let url = handoff.url;
                    component.handoff_timer = Some(Timeout::new(HANDOFF_DELAY_MS, move || {
                        open_in_new_tab(&url);
                    }));
                    show_toast(&handoff.notice);

                    let link = ctx.link().clone();
                    component.submitted_reset = Some(Timeout::new(SUBMITTED_RESET_MS, move || {
                        link.send_message(Msg::ClearSubmitted);
                    }));
                }
            }
            true
        }
        Msg::ClearSubmitted => {
            component.composer.clear_submitted();
            true
        }
    }
}
