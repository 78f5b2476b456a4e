//! Filter form wiring.
//!
//! Reads `FilterState` out of the DOM and pushes the capability-driven
//! `ControlPlan` back onto it: disabled controls are greyed out *and* their
//! DOM values forced to neutral, so a later read can only see neutral values
//! for them.

use ls_api_types::TriState;
use ls_panel_core::capabilities::capability_summary;
use ls_panel_core::filters::{ControlPlan, FilterState, NEUTRAL_RATING, NICHE_ALL};

use crate::dom::{self, Elements};
use crate::state;

/// Snapshot the live form values.
pub fn read_filter_state(els: &Elements) -> FilterState {
    FilterState {
        query: dom::get_input_value(&els.query_input),
        niche: {
            let raw = dom::get_select_value(&els.niche_select);
            if raw.is_empty() { NICHE_ALL.to_owned() } else { raw }
        },
        has_website: TriState::parse(&dom::get_select_value(&els.website_select)),
        has_phone: TriState::parse(&dom::get_select_value(&els.phone_select)),
        location: dom::get_input_value(&els.location_input),
        min_rating: dom::get_select_value(&els.rating_select).parse().unwrap_or(NEUTRAL_RATING),
        only_verified: els.verified_checkbox.checked(),
    }
}

/// Reconcile control state with the active platform's capabilities.
pub fn resync_controls(els: &Elements) {
    let lang = state::lang();
    let platform = state::platform();
    let caps = state::with(|s| s.capabilities.get(platform).clone());
    let plan = ControlPlan::for_platform(platform, &caps);

    els.website_select.set_disabled(!plan.website_enabled);
    els.phone_select.set_disabled(!plan.phone_enabled);
    els.rating_select.set_disabled(!plan.rating_enabled);
    els.verified_checkbox.set_disabled(!plan.verified_enabled);
    els.location_input.set_required(plan.location_required);

    // A disabled control's value is forced to neutral immediately; switching
    // back later re-enables the control but never restores the old value.
    if !plan.website_enabled {
        dom::set_select_value(&els.website_select, TriState::Any.as_str());
    }
    if !plan.phone_enabled {
        dom::set_select_value(&els.phone_select, TriState::Any.as_str());
    }
    if !plan.rating_enabled {
        dom::set_select_value(&els.rating_select, "0");
    }
    if !plan.verified_enabled {
        els.verified_checkbox.set_checked(false);
    }

    dom::set_text(
        &els.capability_summary,
        &capability_summary(lang, platform, &caps),
    );
}

/// Reset the form controls to their neutral defaults and re-apply gating.
pub fn reset_form(els: &Elements) {
    els.filter_form.reset();
    dom::set_input_value(&els.query_input, "");
    dom::set_select_value(&els.niche_select, NICHE_ALL);
    dom::set_select_value(&els.website_select, TriState::Any.as_str());
    dom::set_select_value(&els.phone_select, TriState::Any.as_str());
    dom::set_input_value(&els.location_input, "");
    dom::set_select_value(&els.rating_select, "0");
    els.verified_checkbox.set_checked(false);
    resync_controls(els);
}
