//! Panel application state.
//!
//! Uses a `RefCell`-wrapped `thread_local!` cell (WASM is single-threaded).
//! The cell is the only shared-mutable state; every accessor goes through
//! `with` / `with_mut`. Persistence helpers wrap localStorage.

use gloo_storage::{LocalStorage, Storage};
use ls_api_types::{DiscoverRequest, DiscoveredItem, PlatformId};
use ls_panel_core::capabilities::CapabilityStore;
use ls_panel_core::discovery::{DiscoveryPhase, RequestTracker};
use ls_panel_core::i18n::Lang;
use std::cell::RefCell;

// Client-side persisted keys (opaque to the backend).
pub const KEY_LANGUAGE: &str = "dashboard-language";
pub const KEY_THEME: &str = "dashboard-theme";
pub const KEY_PLATFORM: &str = "dashboard-platform";

/// Central application state.
#[derive(Default)]
pub struct AppState {
    pub lang: Lang,
    pub platform: PlatformId,
    pub capabilities: CapabilityStore,
    /// The last payload actually submitted; the filter preview reflects it
    /// until reset, independent of later platform switches.
    pub last_payload: Option<DiscoverRequest>,
    pub phase: DiscoveryPhase,
    pub tracker: RequestTracker,
    pub results: Vec<DiscoveredItem>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn lang() -> Lang {
    with(|s| s.lang)
}

pub fn set_lang(lang: Lang) {
    with_mut(|s| s.lang = lang);
}

pub fn platform() -> PlatformId {
    with(|s| s.platform)
}

pub fn set_platform(platform: PlatformId) {
    with_mut(|s| s.platform = platform);
}

pub fn set_phase(phase: DiscoveryPhase) {
    with_mut(|s| s.phase = phase);
}

// ── localStorage helpers ──

pub fn local_get(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key).ok()
}

pub fn local_set(key: &str, value: &str) {
    let _ = LocalStorage::set(key, value);
}
