//! Per-platform capability descriptors.
//!
//! The store is seeded from a static fallback table, optionally replaced
//! wholesale by one backend snapshot at startup, and read-only afterwards.
//! `get` is total: unknown ids resolve to the conservative default
//! descriptor (permissive filters, no discovery, no credential).

use anyhow::{Context, Result, bail};
use ls_api_types::{CapabilitiesResponse, CapabilityDescriptor, PlatformId};
use std::collections::BTreeMap;

use crate::i18n::{Lang, message};

/// Static capability table used until (or instead of) a backend snapshot.
pub fn fallback_table() -> BTreeMap<String, CapabilityDescriptor> {
    let mut table = BTreeMap::new();

    table.insert(
        PlatformId::Telegram.as_str().to_owned(),
        CapabilityDescriptor {
            supports_discovery_api: false,
            requires_location: false,
            supports_rating_filter: false,
            supports_verified_filter: false,
            supports_has_website_filter: false,
            supports_has_phone_filter: false,
            ..CapabilityDescriptor::default()
        },
    );
    table.insert(
        PlatformId::GoogleMaps.as_str().to_owned(),
        CapabilityDescriptor {
            supports_discovery_api: true,
            credential_required: true,
            credential_param: Some("api_key".to_owned()),
            credential_env_hint: Some("GOOGLE_MAPS_API_KEY".to_owned()),
            credential_label: Some("API key".to_owned()),
            ..CapabilityDescriptor::default()
        },
    );
    table.insert(
        PlatformId::Reddit.as_str().to_owned(),
        CapabilityDescriptor {
            supports_discovery_api: true,
            supports_rating_filter: false,
            credential_required: true,
            credential_param: Some("client_secret".to_owned()),
            credential_env_hint: Some("REDDIT_CLIENT_SECRET".to_owned()),
            credential_label: Some("Client secret".to_owned()),
            ..CapabilityDescriptor::default()
        },
    );
    table.insert(
        PlatformId::Instagram.as_str().to_owned(),
        CapabilityDescriptor {
            supports_discovery_api: false,
            disabled_reason: Some("disabled_due_compliance_policy".to_owned()),
            ..CapabilityDescriptor::default()
        },
    );

    table
}

/// Resolved capability mapping for every platform.
#[derive(Debug, Clone)]
pub struct CapabilityStore {
    platforms: BTreeMap<String, CapabilityDescriptor>,
    default_descriptor: CapabilityDescriptor,
}

impl Default for CapabilityStore {
    fn default() -> Self {
        Self::with_fallback()
    }
}

impl CapabilityStore {
    pub fn with_fallback() -> Self {
        CapabilityStore {
            platforms: fallback_table(),
            default_descriptor: CapabilityDescriptor::default(),
        }
    }

    /// Replace the whole mapping with a backend snapshot.
    ///
    /// Fails without mutating on malformed or empty bodies; the caller keeps
    /// whatever mapping it had (fail-soft, no user-visible error).
    pub fn apply_snapshot(&mut self, body: &str) -> Result<()> {
        let parsed: CapabilitiesResponse =
            serde_json::from_str(body).context("capability snapshot is not valid JSON")?;
        if parsed.platforms.is_empty() {
            bail!("capability snapshot lists no platforms");
        }
        self.platforms = parsed.platforms;
        Ok(())
    }

    /// Total lookup: unknown ids resolve to the default descriptor.
    pub fn get(&self, platform: PlatformId) -> &CapabilityDescriptor {
        self.platforms
            .get(platform.as_str())
            .unwrap_or(&self.default_descriptor)
    }
}

/// Human-readable capability summary for one platform: a pure projection of
/// the descriptor plus localized strings, one line per capability.
pub fn capability_summary(
    lang: Lang,
    platform: PlatformId,
    caps: &CapabilityDescriptor,
) -> String {
    let yes = message(lang, "filterYes");
    let no = message(lang, "filterNo");
    let flag = |value: bool| if value { yes } else { no };

    let mut lines = vec![format!("{}:", message(lang, "capSummaryTitle"))];

    if platform.is_capability_exempt() {
        lines.push(format!("{}: {}", message(lang, "capDiscovery"), no));
        lines.push(message(lang, "sourceHintTelegram").to_owned());
        return lines.join("\n");
    }

    lines.push(format!(
        "{}: {}",
        message(lang, "capDiscovery"),
        flag(caps.supports_discovery_api)
    ));
    lines.push(format!(
        "{}: {}",
        message(lang, "capRating"),
        flag(caps.supports_rating_filter)
    ));
    lines.push(format!(
        "{}: {}",
        message(lang, "capVerified"),
        flag(caps.supports_verified_filter)
    ));
    lines.push(format!(
        "{}: {}",
        message(lang, "capWebsite"),
        flag(caps.supports_has_website_filter)
    ));
    lines.push(format!(
        "{}: {}",
        message(lang, "capPhone"),
        flag(caps.supports_has_phone_filter)
    ));
    if caps.requires_location {
        lines.push(format!("{}: {}", message(lang, "capLocationRequired"), yes));
    }
    if caps.credential_required {
        let label = caps
            .credential_label
            .as_deref()
            .unwrap_or(message(lang, "credentialLabelDefault"));
        let hint = if caps.configured {
            message(lang, "credentialHintConfigured")
        } else {
            message(lang, "credentialHintNeeded")
        };
        match caps.credential_env_hint.as_deref() {
            Some(env) => lines.push(format!("{label}: {hint} ({env})")),
            None => lines.push(format!("{label}: {hint}")),
        }
    }
    if let Some(reason) = caps.disabled_reason.as_deref() {
        lines.push(format!("{}: {}", message(lang, "capDisabled"), reason));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_table_resolves_every_platform() {
        let store = CapabilityStore::with_fallback();
        for platform in PlatformId::ALL {
            // Descriptors from the table, not the unknown-id default.
            let caps = store.get(platform);
            if platform == PlatformId::GoogleMaps {
                assert!(caps.supports_discovery_api);
                assert_eq!(caps.credential_param.as_deref(), Some("api_key"));
            }
            if platform == PlatformId::Telegram {
                assert!(!caps.supports_rating_filter);
            }
        }
    }

    #[test]
    fn snapshot_replaces_wholesale() {
        let mut store = CapabilityStore::with_fallback();
        let body = r#"{
            "platforms": {
                "google_maps": { "supports_discovery_api": true, "supports_rating_filter": false }
            }
        }"#;
        store.apply_snapshot(body).unwrap();

        // Replaced, not merged: the new descriptor wins field by field.
        assert!(!store.get(PlatformId::GoogleMaps).supports_rating_filter);
        // Platforms absent from the snapshot fall to the default descriptor.
        let telegram = store.get(PlatformId::Telegram);
        assert!(telegram.supports_rating_filter);
        assert!(!telegram.supports_discovery_api);
    }

    #[test]
    fn malformed_snapshot_keeps_previous_mapping() {
        let mut store = CapabilityStore::with_fallback();
        assert!(store.apply_snapshot("not json at all").is_err());
        assert!(store.apply_snapshot(r#"{"platforms": {}}"#).is_err());

        // The fallback table survives both failures.
        let maps = store.get(PlatformId::GoogleMaps);
        assert!(maps.credential_required);
        assert_eq!(maps.credential_env_hint.as_deref(), Some("GOOGLE_MAPS_API_KEY"));
    }

    #[test]
    fn partial_descriptor_gets_conservative_defaults() {
        let mut store = CapabilityStore::with_fallback();
        store
            .apply_snapshot(r#"{"platforms": {"reddit": {"supports_discovery_api": true}}}"#)
            .unwrap();
        let caps = store.get(PlatformId::Reddit);
        // Filter flags default permissive, credential flags restrictive.
        assert!(caps.supports_has_website_filter);
        assert!(!caps.credential_required);
        assert!(!caps.configured);
    }

    #[test]
    fn summary_mentions_credential_hint() {
        let store = CapabilityStore::with_fallback();
        let text = capability_summary(Lang::En, PlatformId::GoogleMaps, store.get(PlatformId::GoogleMaps));
        assert!(text.contains("GOOGLE_MAPS_API_KEY"));
        assert!(text.contains("Rating filter: Yes"));
    }

    #[test]
    fn summary_for_exempt_platform_is_the_hint() {
        let store = CapabilityStore::with_fallback();
        let text = capability_summary(Lang::Es, PlatformId::Telegram, store.get(PlatformId::Telegram));
        assert!(text.contains("Modulo Telegram activo"));
    }
}
