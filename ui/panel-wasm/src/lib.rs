//! LeadScope Panel WASM Frontend
//!
//! Pure Rust + WASM implementation of the multi-source control panel.
//! Modularised for extensibility: each concern lives in its own module;
//! every decision is delegated to `ls-panel-core`.

pub mod api;
pub mod credentials;
pub mod discover;
pub mod dom;
pub mod events;
pub mod filters;
pub mod locale;
pub mod platform;
pub mod results;
pub mod state;
pub mod theme;

use gloo_console::warn;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restore theme and language before anything renders text.
    theme::restore_theme(&els);
    let lang = locale::initial_language();
    dom::set_select_value(&els.language_select, lang.as_str());

    // Load capabilities once, before the UI is interactive. A failed or
    // malformed load keeps the static fallback table; no user-visible error.
    match api::fetch_capabilities().await {
        Ok(body) => {
            let applied = state::with_mut(|s| s.capabilities.apply_snapshot(&body));
            if let Err(err) = applied {
                warn!("capability snapshot rejected, using fallback", err.to_string());
            }
        }
        Err(err) => warn!("capability load failed, using fallback", err),
    }

    // Restore the persisted platform; unknown values fall back silently.
    let saved_platform = state::local_get(state::KEY_PLATFORM).unwrap_or_default();
    platform::select(&els, &saved_platform);

    locale::apply_language(&els, lang);
    events::bind_events(&els);

    Ok(())
}
