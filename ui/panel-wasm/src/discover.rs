//! Discovery orchestration driver.
//!
//! Runs `Idle → Validating → Requesting → {Succeeded, Failed} → Idle` per
//! submission. Overlapping submissions are resolved by the core's request
//! tokens: a response is rendered only while its token is current, so the
//! latest submission always determines the final view.

use gloo_console::{log, warn};
use ls_panel_core::discovery::{
    self, DiscoveryOutcome, DiscoveryPhase, ValidationOutcome,
};
use ls_panel_core::i18n::message;

use crate::api;
use crate::credentials::LocalCredentials;
use crate::dom::Elements;
use crate::filters;
use crate::results;
use crate::state;

/// Form submission handler.
pub async fn on_discover(els: &Elements) {
    let lang = state::lang();
    let platform = state::platform();
    let caps = state::with(|s| s.capabilities.get(platform).clone());
    let filter_state = filters::read_filter_state(els);

    state::set_phase(DiscoveryPhase::Validating);

    let request = match discovery::validate(platform, &caps, &filter_state, &LocalCredentials) {
        ValidationOutcome::Exempt => {
            // The exempt platform never calls the discovery endpoint.
            state::with_mut(|s| {
                s.results.clear();
                s.phase = DiscoveryPhase::Idle;
            });
            results::render_results(els, &[]);
            results::render_feedback(els, message(lang, "discoveryExemptMsg"), false);
            return;
        }
        ValidationOutcome::Rejected(err) => {
            state::with_mut(|s| {
                s.results.clear();
                s.phase = DiscoveryPhase::Idle;
            });
            results::render_results(els, &[]);
            results::render_feedback(els, message(lang, err.message_key()), true);
            return;
        }
        ValidationOutcome::Proceed(request) => request,
    };

    let token = state::with_mut(|s| {
        s.phase = DiscoveryPhase::Requesting;
        s.last_payload = Some(request.clone());
        s.tracker.begin()
    });
    results::render_filter_preview(els);
    results::render_feedback(els, message(lang, "discoveryRunningMsg"), false);
    log!("discovery request", platform.as_str(), token as f64);

    let Ok(body) = serde_json::to_string(&request) else {
        return;
    };
    let outcome = match api::request_raw("/api/discover", "POST", Some(body)).await {
        Ok((http_ok, text)) => discovery::classify_response(http_ok, &text),
        Err(detail) => discovery::transport_failure(detail),
    };

    // Latest submission wins: a stale response never overwrites a newer one.
    if !state::with(|s| s.tracker.is_current(token)) {
        warn!("dropping stale discovery response", token as f64);
        return;
    }

    let lang = state::lang();
    let feedback = discovery::feedback_text(lang, &outcome);
    match outcome {
        DiscoveryOutcome::Succeeded { items, .. } => {
            state::with_mut(|s| {
                s.results = items.clone();
                s.phase = DiscoveryPhase::Succeeded;
            });
            results::render_results(els, &items);
            results::render_feedback(els, &feedback, false);
        }
        DiscoveryOutcome::Failed(_) => {
            // Error states clear the result view rather than leaving stale
            // results visible.
            state::with_mut(|s| {
                s.results.clear();
                s.phase = DiscoveryPhase::Failed;
            });
            results::render_results(els, &[]);
            results::render_feedback(els, &feedback, true);
        }
    }

    state::set_phase(DiscoveryPhase::Idle);
}

/// Reset handler: back to `Idle` unconditionally, feedback and results
/// cleared, any in-flight response invalidated.
pub fn on_reset(els: &Elements) {
    state::with_mut(|s| {
        s.tracker.reset();
        s.last_payload = None;
        s.results.clear();
        s.phase = DiscoveryPhase::Idle;
    });
    filters::reset_form(els);
    results::render_results(els, &[]);
    results::render_feedback(els, "", false);
    results::render_filter_preview(els);
}
