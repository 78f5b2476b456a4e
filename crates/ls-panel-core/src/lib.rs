//! Core logic of the LeadScope multi-source panel.
//!
//! Everything here is browser-free: capability resolution, filter gating,
//! credential access, discovery validation and ordering, and string lookup
//! are pure or trait-injected so they unit test natively. The WASM crate
//! (`ui/panel-wasm`) owns the DOM and delegates every decision to this crate.

pub mod capabilities;
pub mod credentials;
pub mod discovery;
pub mod filters;
pub mod i18n;
