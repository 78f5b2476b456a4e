//! Filter form state and capability-driven gating.
//!
//! `ControlPlan` decides which controls are live for a platform;
//! `FilterState::gated` forces every disabled control back to its neutral
//! value. A disabled filter can therefore never reach a payload as anything
//! but neutral, no matter what the form held before a platform switch.

use ls_api_types::{CapabilityDescriptor, PlatformId, TriState};

pub const NICHE_ALL: &str = "all";
pub const NEUTRAL_RATING: f64 = 0.0;

/// Live values of the filter form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub niche: String,
    pub has_website: TriState,
    pub has_phone: TriState,
    pub location: String,
    pub min_rating: f64,
    pub only_verified: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            niche: NICHE_ALL.to_owned(),
            has_website: TriState::Any,
            has_phone: TriState::Any,
            location: String::new(),
            min_rating: NEUTRAL_RATING,
            only_verified: false,
        }
    }
}

impl FilterState {
    /// Copy with every control the plan disables forced to neutral.
    pub fn gated(&self, plan: &ControlPlan) -> FilterState {
        FilterState {
            query: self.query.clone(),
            niche: self.niche.clone(),
            has_website: if plan.website_enabled { self.has_website } else { TriState::Any },
            has_phone: if plan.phone_enabled { self.has_phone } else { TriState::Any },
            location: self.location.clone(),
            min_rating: if plan.rating_enabled { self.min_rating } else { NEUTRAL_RATING },
            only_verified: plan.verified_enabled && self.only_verified,
        }
    }
}

/// Enablement of each gated control for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPlan {
    pub website_enabled: bool,
    pub phone_enabled: bool,
    pub rating_enabled: bool,
    pub verified_enabled: bool,
    pub location_required: bool,
}

impl ControlPlan {
    /// The exempt platform ignores capability gating entirely; everything
    /// else follows the descriptor. Location is required exactly when the
    /// platform is not exempt and the descriptor says so.
    pub fn for_platform(platform: PlatformId, caps: &CapabilityDescriptor) -> ControlPlan {
        let exempt = platform.is_capability_exempt();
        ControlPlan {
            website_enabled: exempt || caps.supports_has_website_filter,
            phone_enabled: exempt || caps.supports_has_phone_filter,
            rating_enabled: exempt || caps.supports_rating_filter,
            verified_enabled: exempt || caps.supports_verified_filter,
            location_required: !exempt && caps.requires_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_rating_caps() -> CapabilityDescriptor {
        CapabilityDescriptor {
            supports_discovery_api: true,
            supports_rating_filter: false,
            ..CapabilityDescriptor::default()
        }
    }

    fn full_state() -> FilterState {
        FilterState {
            query: "vegan".into(),
            niche: "restaurants".into(),
            has_website: TriState::Yes,
            has_phone: TriState::No,
            location: "Lima".into(),
            min_rating: 4.5,
            only_verified: true,
        }
    }

    #[test]
    fn exempt_platform_ignores_descriptor() {
        let caps = CapabilityDescriptor {
            supports_has_website_filter: false,
            supports_has_phone_filter: false,
            supports_rating_filter: false,
            supports_verified_filter: false,
            requires_location: true,
            ..CapabilityDescriptor::default()
        };
        let plan = ControlPlan::for_platform(PlatformId::Telegram, &caps);
        assert!(plan.website_enabled && plan.phone_enabled);
        assert!(plan.rating_enabled && plan.verified_enabled);
        assert!(!plan.location_required);
    }

    #[test]
    fn disabled_rating_is_forced_neutral() {
        let plan = ControlPlan::for_platform(PlatformId::Reddit, &no_rating_caps());
        assert!(!plan.rating_enabled);

        let gated = full_state().gated(&plan);
        assert_eq!(gated.min_rating, NEUTRAL_RATING);
        // Enabled controls keep their values.
        assert_eq!(gated.has_website, TriState::Yes);
        assert!(gated.only_verified);
    }

    #[test]
    fn reenabling_does_not_restore_previous_value() {
        let restrictive = ControlPlan::for_platform(PlatformId::Reddit, &no_rating_caps());
        let permissive =
            ControlPlan::for_platform(PlatformId::GoogleMaps, &CapabilityDescriptor::default());

        // Switching away neutralizes; switching back gates the already
        // neutral state, so the old 4.5 stays gone until the user sets it.
        let after_switch = full_state().gated(&restrictive);
        let after_switch_back = after_switch.gated(&permissive);
        assert_eq!(after_switch_back.min_rating, NEUTRAL_RATING);
    }

    #[test]
    fn location_required_follows_descriptor_for_non_exempt() {
        let caps = CapabilityDescriptor {
            requires_location: true,
            ..CapabilityDescriptor::default()
        };
        let plan = ControlPlan::for_platform(PlatformId::GoogleMaps, &caps);
        assert!(plan.location_required);
    }

    #[test]
    fn default_state_is_all_neutral() {
        let state = FilterState::default();
        assert_eq!(state.niche, NICHE_ALL);
        assert_eq!(state.has_website, TriState::Any);
        assert_eq!(state.min_rating, NEUTRAL_RATING);
        assert!(!state.only_verified);
    }
}
