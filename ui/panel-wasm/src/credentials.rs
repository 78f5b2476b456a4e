//! Credential field wiring and the localStorage-backed vault.
//!
//! Only the active platform's credential is editable; the stored value for
//! any platform remains readable for payload assembly. Values persist across
//! reloads under one key per platform id.

use ls_api_types::PlatformId;
use ls_panel_core::credentials::{CredentialStore, storage_key};
use ls_panel_core::i18n::message;

use crate::dom::{self, Elements};
use crate::state;

/// `CredentialStore` over browser localStorage.
pub struct LocalCredentials;

impl CredentialStore for LocalCredentials {
    fn read(&self, platform: PlatformId) -> String {
        state::local_get(&storage_key(platform)).unwrap_or_default()
    }

    fn write(&self, platform: PlatformId, value: &str) {
        state::local_set(&storage_key(platform), value);
    }
}

/// Sync the credential field to the active platform: visibility, label,
/// hint, and the stored value.
pub fn resync_credential_field(els: &Elements) {
    let lang = state::lang();
    let platform = state::platform();
    let caps = state::with(|s| s.capabilities.get(platform).clone());

    let has_credential_concept = caps.credential_required || caps.credential_param.is_some();
    dom::set_hidden(&els.credential_field, !has_credential_concept);
    if !has_credential_concept {
        dom::set_input_value(&els.credential_input, "");
        return;
    }

    let label = caps
        .credential_label
        .clone()
        .unwrap_or_else(|| message(lang, "credentialLabelDefault").to_owned());
    dom::set_text(&els.credential_label, &label);

    let hint = if caps.configured {
        message(lang, "credentialHintConfigured").to_owned()
    } else {
        match caps.credential_env_hint.as_deref() {
            Some(env) => format!("{} ({})", message(lang, "credentialHintNeeded"), env),
            None => message(lang, "credentialHintNeeded").to_owned(),
        }
    };
    dom::set_text(&els.credential_hint, &hint);

    dom::set_input_value(&els.credential_input, &LocalCredentials.read(platform));
}

/// Persist edits immediately, scoped to the active platform.
pub fn on_credential_input(els: &Elements) {
    let platform = state::platform();
    LocalCredentials.write(platform, &dom::get_input_value(&els.credential_input));
}
