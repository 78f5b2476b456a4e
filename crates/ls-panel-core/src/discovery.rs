//! Discovery validation, request ordering, and response classification.
//!
//! The driver (the WASM crate) runs the state machine
//! `Idle → Validating → Requesting → {Succeeded, Failed} → Idle`; every
//! decision along the way lives here so it can be tested without a browser.
//! Ordering between overlapping submissions uses monotonically increasing
//! request tokens: a response is applied only while its token is current,
//! so the latest submission always wins.

use ls_api_types::{
    CapabilityDescriptor, DiscoverRequest, DiscoverResponse, DiscoveredItem, PlatformId,
};
use thiserror::Error;

use crate::credentials::CredentialStore;
use crate::filters::{ControlPlan, FilterState};
use crate::i18n::{Lang, message};

/// Result page size requested from the backend (which clamps to 100).
pub const DEFAULT_RESULT_LIMIT: u32 = 20;

/// Where the orchestrator currently is. Rendering-only; transitions are
/// driven by the submission handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscoveryPhase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Succeeded,
    Failed,
}

/// Client-side precondition failures. These block the request locally; the
/// network is never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("location is required for this platform")]
    LocationRequired,
    #[error("credential is missing for this platform")]
    CredentialMissing,
}

impl ValidationError {
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::LocationRequired => "errLocationRequired",
            ValidationError::CredentialMissing => "errCredentialMissing",
        }
    }
}

/// Outcome of the `Validating` step.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Preconditions hold; the built request is ready to send.
    Proceed(DiscoverRequest),
    /// The exempt platform never calls the discovery endpoint; the UI shows
    /// an informational message and an empty result set instead.
    Exempt,
    Rejected(ValidationError),
}

/// Run the client-side precondition checks for a submission.
pub fn validate(
    platform: PlatformId,
    caps: &CapabilityDescriptor,
    filters: &FilterState,
    credentials: &dyn CredentialStore,
) -> ValidationOutcome {
    if platform.is_capability_exempt() {
        return ValidationOutcome::Exempt;
    }

    let plan = ControlPlan::for_platform(platform, caps);
    if plan.location_required && filters.location.trim().is_empty() {
        return ValidationOutcome::Rejected(ValidationError::LocationRequired);
    }

    let secret = credentials.read(platform);
    let secret = secret.trim();
    if caps.credential_required && !caps.configured && secret.is_empty() {
        return ValidationOutcome::Rejected(ValidationError::CredentialMissing);
    }

    ValidationOutcome::Proceed(build_request(platform, caps, filters, secret))
}

/// Build the wire payload: gated filter values plus at most one credential
/// entry, keyed by the descriptor's declared param name.
pub fn build_request(
    platform: PlatformId,
    caps: &CapabilityDescriptor,
    filters: &FilterState,
    secret: &str,
) -> DiscoverRequest {
    let plan = ControlPlan::for_platform(platform, caps);
    let gated = filters.gated(&plan);

    let mut request = DiscoverRequest {
        platform,
        query: gated.query,
        niche: gated.niche,
        has_website: gated.has_website,
        has_phone: gated.has_phone,
        location: gated.location,
        min_rating: gated.min_rating,
        only_verified: gated.only_verified,
        limit: DEFAULT_RESULT_LIMIT,
        credentials: Default::default(),
    };

    if let Some(param) = caps.credential_param.as_deref() {
        if !secret.is_empty() {
            request
                .credentials
                .insert(param.to_owned(), secret.to_owned());
        }
    }

    request
}

/// Monotonic request tokens. One logical request path: `begin` supersedes
/// whatever was in flight, `reset` supersedes without starting anything, and
/// a response may be applied only while `is_current` holds for its token.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Invalidate any in-flight request without issuing a new one.
    pub fn reset(&mut self) {
        self.latest += 1;
    }
}

/// Terminal failure classes of a discovery request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscoveryFailure {
    /// Network failure or a body that does not decode as JSON.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Backend-reported failure (`status != "ok"` or non-2xx with a body).
    #[error("backend reported failure")]
    Application {
        message: Option<String>,
        warnings: Vec<String>,
    },
}

/// Terminal result of a discovery request.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryOutcome {
    Succeeded {
        items: Vec<DiscoveredItem>,
        warnings: Vec<String>,
    },
    Failed(DiscoveryFailure),
}

/// Classify an HTTP response body. `http_ok` is the transport-level 2xx flag;
/// both it and the body's own `status` field must agree for a success.
pub fn classify_response(http_ok: bool, body: &str) -> DiscoveryOutcome {
    match serde_json::from_str::<DiscoverResponse>(body) {
        Ok(resp) if http_ok && resp.is_ok() => DiscoveryOutcome::Succeeded {
            items: resp.items,
            warnings: resp.warnings,
        },
        Ok(resp) => DiscoveryOutcome::Failed(DiscoveryFailure::Application {
            message: resp.message,
            warnings: resp.warnings,
        }),
        Err(err) => DiscoveryOutcome::Failed(DiscoveryFailure::Transport(err.to_string())),
    }
}

/// Wrap a fetch-level error (no response at all) as a failure outcome.
pub fn transport_failure(detail: impl Into<String>) -> DiscoveryOutcome {
    DiscoveryOutcome::Failed(DiscoveryFailure::Transport(detail.into()))
}

/// Localized feedback line(s) for a terminal outcome.
pub fn feedback_text(lang: Lang, outcome: &DiscoveryOutcome) -> String {
    match outcome {
        DiscoveryOutcome::Succeeded { items, warnings } => {
            let mut text = if items.is_empty() {
                message(lang, "discoveryEmptyMsg").to_owned()
            } else {
                message(lang, "discoveryCountMsg").replace("{count}", &items.len().to_string())
            };
            append_warnings(lang, &mut text, warnings);
            text
        }
        DiscoveryOutcome::Failed(DiscoveryFailure::Application { message: msg, warnings }) => {
            let mut text = msg
                .clone()
                .unwrap_or_else(|| message(lang, "errDiscoveryFailed").to_owned());
            append_warnings(lang, &mut text, warnings);
            text
        }
        DiscoveryOutcome::Failed(DiscoveryFailure::Transport(detail)) => {
            format!("{}: {}", message(lang, "errDiscoveryFailed"), detail)
        }
    }
}

fn append_warnings(lang: Lang, text: &mut String, warnings: &[String]) {
    if !warnings.is_empty() {
        text.push('\n');
        text.push_str(message(lang, "warningsPrefix"));
        text.push_str(": ");
        text.push_str(&warnings.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::CapabilityStore;
    use crate::credentials::MemoryCredentials;
    use ls_api_types::TriState;

    fn maps_caps(configured: bool) -> CapabilityDescriptor {
        CapabilityDescriptor {
            supports_discovery_api: true,
            credential_required: true,
            credential_param: Some("api_key".to_owned()),
            configured,
            ..CapabilityDescriptor::default()
        }
    }

    fn filters_with_location(location: &str) -> FilterState {
        FilterState {
            query: "vegan restaurants".into(),
            location: location.into(),
            ..FilterState::default()
        }
    }

    #[test]
    fn exempt_platform_short_circuits_before_any_check() {
        let vault = MemoryCredentials::default();
        let caps = CapabilityDescriptor {
            requires_location: true,
            credential_required: true,
            ..CapabilityDescriptor::default()
        };
        let outcome = validate(PlatformId::Telegram, &caps, &FilterState::default(), &vault);
        assert_eq!(outcome, ValidationOutcome::Exempt);
    }

    #[test]
    fn blank_location_is_rejected_when_required() {
        let vault = MemoryCredentials::default();
        let caps = CapabilityDescriptor {
            supports_discovery_api: true,
            requires_location: true,
            ..CapabilityDescriptor::default()
        };
        let outcome = validate(
            PlatformId::GoogleMaps,
            &caps,
            &filters_with_location("   "),
            &vault,
        );
        let ValidationOutcome::Rejected(err) = outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(err, ValidationError::LocationRequired);
        assert_eq!(err.message_key(), "errLocationRequired");
    }

    #[test]
    fn missing_credential_blocks_until_one_is_stored() {
        let vault = MemoryCredentials::default();
        let caps = maps_caps(false);
        let filters = filters_with_location("Lima");

        let outcome = validate(PlatformId::GoogleMaps, &caps, &filters, &vault);
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(ValidationError::CredentialMissing)
        );

        vault.write(PlatformId::GoogleMaps, "secret-123");
        let outcome = validate(PlatformId::GoogleMaps, &caps, &filters, &vault);
        let ValidationOutcome::Proceed(request) = outcome else {
            panic!("expected proceed, got {outcome:?}");
        };
        assert_eq!(request.credentials.len(), 1);
        assert_eq!(request.credentials.get("api_key").map(String::as_str), Some("secret-123"));
    }

    #[test]
    fn configured_backend_needs_no_local_credential() {
        let vault = MemoryCredentials::default();
        let outcome = validate(
            PlatformId::GoogleMaps,
            &maps_caps(true),
            &filters_with_location("Lima"),
            &vault,
        );
        let ValidationOutcome::Proceed(request) = outcome else {
            panic!("expected proceed, got {outcome:?}");
        };
        assert!(request.credentials.is_empty());
    }

    #[test]
    fn credential_without_declared_param_is_never_transmitted() {
        let vault = MemoryCredentials::default();
        vault.write(PlatformId::Reddit, "orphan-secret");
        let caps = CapabilityDescriptor {
            supports_discovery_api: true,
            ..CapabilityDescriptor::default()
        };
        let request = build_request(
            PlatformId::Reddit,
            &caps,
            &FilterState::default(),
            &vault.read(PlatformId::Reddit),
        );
        assert!(request.credentials.is_empty());
    }

    #[test]
    fn disabled_filters_reach_the_payload_as_neutral() {
        let vault = MemoryCredentials::default();
        let caps = CapabilityDescriptor {
            supports_discovery_api: true,
            supports_rating_filter: false,
            supports_has_website_filter: false,
            ..CapabilityDescriptor::default()
        };
        let filters = FilterState {
            min_rating: 4.5,
            has_website: TriState::Yes,
            only_verified: true,
            ..FilterState::default()
        };
        let ValidationOutcome::Proceed(request) =
            validate(PlatformId::Reddit, &caps, &filters, &vault)
        else {
            panic!("expected proceed");
        };
        assert_eq!(request.min_rating, 0.0);
        assert_eq!(request.has_website, TriState::Any);
        // Verified stays: the descriptor still supports it.
        assert!(request.only_verified);
        assert_eq!(request.limit, DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn latest_submission_wins_when_responses_arrive_out_of_order() {
        let mut tracker = RequestTracker::default();
        let token_a = tracker.begin();
        let token_b = tracker.begin();

        // B resolves first and renders.
        assert!(tracker.is_current(token_b));
        // A's late response must not overwrite B's outcome.
        assert!(!tracker.is_current(token_a));
    }

    #[test]
    fn reset_invalidates_in_flight_requests() {
        let mut tracker = RequestTracker::default();
        let token = tracker.begin();
        tracker.reset();
        assert!(!tracker.is_current(token));
    }

    #[test]
    fn classifies_success_and_failure_shapes() {
        let ok_body = r#"{"status":"ok","count":1,"items":[{"name":"Cafe Uno"}],"warnings":["min_rating ignored"]}"#;
        let DiscoveryOutcome::Succeeded { items, warnings } = classify_response(true, ok_body)
        else {
            panic!("expected success");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Cafe Uno");
        assert_eq!(warnings.len(), 1);

        // 2xx transport but backend-reported error.
        let err_body = r#"{"status":"error","message":"request_denied"}"#;
        let DiscoveryOutcome::Failed(DiscoveryFailure::Application { message, .. }) =
            classify_response(true, err_body)
        else {
            panic!("expected application failure");
        };
        assert_eq!(message.as_deref(), Some("request_denied"));

        // Success-shaped body behind a non-2xx status is still a failure.
        let outcome = classify_response(false, ok_body);
        assert!(matches!(
            outcome,
            DiscoveryOutcome::Failed(DiscoveryFailure::Application { .. })
        ));

        // Undecodable body is a transport failure.
        let outcome = classify_response(true, "<html>gateway timeout</html>");
        assert!(matches!(
            outcome,
            DiscoveryOutcome::Failed(DiscoveryFailure::Transport(_))
        ));
    }

    #[test]
    fn feedback_localizes_counts_warnings_and_errors() {
        let success = DiscoveryOutcome::Succeeded {
            items: vec![DiscoveredItem { name: "A".into(), ..Default::default() }],
            warnings: vec!["only_verified ignored".into()],
        };
        let text = feedback_text(Lang::En, &success);
        assert!(text.starts_with("1 results found."));
        assert!(text.contains("Warnings: only_verified ignored"));

        let empty = DiscoveryOutcome::Succeeded { items: vec![], warnings: vec![] };
        assert_eq!(feedback_text(Lang::En, &empty), "No results for these filters.");

        let transport = transport_failure("fetch error: NetworkError");
        let text = feedback_text(Lang::Es, &transport);
        assert!(text.starts_with("La busqueda fallo:"));
        assert!(text.contains("NetworkError"));

        let app = DiscoveryOutcome::Failed(DiscoveryFailure::Application {
            message: None,
            warnings: vec![],
        });
        assert_eq!(feedback_text(Lang::En, &app), "Discovery failed");
    }

    #[test]
    fn full_flow_against_fallback_store_makes_no_network_call_when_invalid() {
        // Concrete scenario: google_maps, credential required, not
        // configured, empty vault. validate() must reject, so the driver
        // never issues a fetch.
        let store = CapabilityStore::with_fallback();
        let vault = MemoryCredentials::default();
        let outcome = validate(
            PlatformId::GoogleMaps,
            store.get(PlatformId::GoogleMaps),
            &filters_with_location("Lima"),
            &vault,
        );
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(ValidationError::CredentialMissing)
        );
    }
}
