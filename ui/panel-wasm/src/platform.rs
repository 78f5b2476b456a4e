//! Platform selection.
//!
//! `select` owns "which platform is active" and drives resynchronization of
//! the filter form, the credential field, and the preview. Unknown ids fall
//! back to the default platform without an error.

use ls_api_types::PlatformId;
use ls_panel_core::i18n::{self, message};

use crate::credentials;
use crate::dom::{self, Elements};
use crate::filters;
use crate::results;
use crate::state;

/// Switch the active platform. Effects run in a fixed order: persist,
/// button highlight, panel swap, filter resync, credential resync, preview
/// re-render (the preview keeps showing the last *submitted* payload).
pub fn select(els: &Elements, raw: &str) {
    let platform = PlatformId::parse(raw).unwrap_or_default();
    state::set_platform(platform);
    state::local_set(state::KEY_PLATFORM, platform.as_str());

    for button in &els.platform_buttons {
        let is_active = button.get_attribute("data-platform").as_deref() == Some(platform.as_str());
        dom::toggle_class(button, "is-active", is_active);
        let _ = button.set_attribute("aria-pressed", if is_active { "true" } else { "false" });
    }

    for panel in &els.platform_panels {
        let matches = panel.get_attribute("data-platform").as_deref() == Some(platform.as_str());
        dom::set_hidden(panel, !matches);
    }

    refresh_platform_labels(els);
    filters::resync_controls(els);
    credentials::resync_credential_field(els);
    results::render_filter_preview(els);
}

/// Badge and hint text for the active platform in the active language.
pub fn refresh_platform_labels(els: &Elements) {
    let lang = state::lang();
    let platform = state::platform();
    dom::set_text(&els.platform_badge, message(lang, i18n::platform_label_key(platform)));
    dom::set_text(&els.source_hint, message(lang, i18n::platform_hint_key(platform)));
}
