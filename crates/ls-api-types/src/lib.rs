use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One external data source the panel can target.
///
/// Closed set: adding a platform means adding a variant here, a nav entry in
/// the markup, and a row in the capability fallback table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformId {
    /// Default platform; also the capability-exempt one.
    #[default]
    Telegram,
    GoogleMaps,
    Instagram,
    Reddit,
}

impl PlatformId {
    pub const ALL: [PlatformId; 4] = [
        PlatformId::Telegram,
        PlatformId::GoogleMaps,
        PlatformId::Instagram,
        PlatformId::Reddit,
    ];

    pub fn parse(raw: &str) -> Option<PlatformId> {
        match raw {
            "telegram" => Some(PlatformId::Telegram),
            "google_maps" => Some(PlatformId::GoogleMaps),
            "instagram" => Some(PlatformId::Instagram),
            "reddit" => Some(PlatformId::Reddit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Telegram => "telegram",
            PlatformId::GoogleMaps => "google_maps",
            PlatformId::Instagram => "instagram",
            PlatformId::Reddit => "reddit",
        }
    }

    /// The messaging-channel platform predates the capability model and is
    /// never gated by it: its filters stay editable and discovery requests
    /// short-circuit into the scrape workflow instead.
    pub fn is_capability_exempt(&self) -> bool {
        matches!(self, PlatformId::Telegram)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-valued presence filter (`any` / `yes` / `no`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    /// Unknown inputs collapse to the neutral value.
    pub fn parse(raw: &str) -> TriState {
        match raw {
            "yes" => TriState::Yes,
            "no" => TriState::No,
            _ => TriState::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriState::Any => "any",
            TriState::Yes => "yes",
            TriState::No => "no",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Declarative record of which filters and credential requirements one
/// platform supports, as served by `GET /api/capabilities`.
///
/// Missing fields in a backend descriptor deserialize to the conservative
/// default: filter support flags are permissive, discovery and credential
/// flags restrictive. `Default` yields the same descriptor, used for unknown
/// platform ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    #[serde(default)]
    pub supports_discovery_api: bool,
    #[serde(default)]
    pub requires_location: bool,
    #[serde(default = "default_true")]
    pub supports_rating_filter: bool,
    #[serde(default = "default_true")]
    pub supports_verified_filter: bool,
    #[serde(default = "default_true")]
    pub supports_has_website_filter: bool,
    #[serde(default = "default_true")]
    pub supports_has_phone_filter: bool,
    #[serde(default)]
    pub credential_required: bool,
    /// Field name the backend expects the credential under in a discovery
    /// request body. Without it a stored credential is never transmitted.
    #[serde(default)]
    pub credential_param: Option<String>,
    #[serde(default)]
    pub credential_env_hint: Option<String>,
    #[serde(default)]
    pub credential_label: Option<String>,
    /// Whether the backend already holds a usable credential server-side.
    #[serde(default)]
    pub configured: bool,
    /// Set when the backend refuses the connector on policy grounds.
    #[serde(default)]
    pub disabled_reason: Option<String>,
}

impl Default for CapabilityDescriptor {
    fn default() -> Self {
        CapabilityDescriptor {
            supports_discovery_api: false,
            requires_location: false,
            supports_rating_filter: true,
            supports_verified_filter: true,
            supports_has_website_filter: true,
            supports_has_phone_filter: true,
            credential_required: false,
            credential_param: None,
            credential_env_hint: None,
            credential_label: None,
            configured: false,
            disabled_reason: None,
        }
    }
}

/// Body of `GET /api/capabilities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitiesResponse {
    #[serde(default)]
    pub platforms: BTreeMap<String, CapabilityDescriptor>,
}

/// Body of `POST /api/discover`. Built fresh per submission, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverRequest {
    pub platform: PlatformId,
    pub query: String,
    pub niche: String,
    pub has_website: TriState,
    pub has_phone: TriState,
    pub location: String,
    pub min_rating: f64,
    pub only_verified: bool,
    pub limit: u32,
    /// At most one entry: the payload platform's credential under its
    /// declared `credential_param`.
    #[serde(default)]
    pub credentials: BTreeMap<String, String>,
}

/// One discovered record as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Body of a `POST /api/discover` response, success or failure. Every field
/// defaults so any JSON object decodes; `status != "ok"` marks a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub items: Vec<DiscoveredItem>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DiscoverResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
