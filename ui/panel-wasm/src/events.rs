//! Event binding.
//!
//! Wires all UI event listeners once after init. Async handlers are spawned
//! via `wasm_bindgen_futures::spawn_local`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::credentials;
use crate::discover;
use crate::dom::{self, Elements};
use crate::locale;
use crate::platform;
use crate::theme;

/// Helper: attach a sync handler for a named event.
macro_rules! on_event {
    ($el:expr, $event:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            $handler(&els);
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Platform nav ──
    for button in &els.platform_buttons {
        let target = button.get_attribute("data-platform").unwrap_or_default();
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            platform::select(&els2, &target);
            // Collapse the mobile nav after a pick.
            if dom::has_class(&els2.platform_nav, "is-open") {
                dom::remove_class(&els2.platform_nav, "is-open");
                let _ = els2.menu_toggle.set_attribute("aria-expanded", "false");
            }
        }) as Box<dyn FnMut(_)>);
        button
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Mobile menu toggle ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let is_open = !dom::has_class(&els2.platform_nav, "is-open");
            dom::toggle_class(&els2.platform_nav, "is-open", is_open);
            let _ = els2
                .menu_toggle
                .set_attribute("aria-expanded", if is_open { "true" } else { "false" });
        }) as Box<dyn FnMut(_)>);
        els.menu_toggle
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Language / theme ──
    on_event!(els.language_select, "change", els, locale::on_language_change);
    on_event!(els.theme_select, "change", els, theme::on_theme_change);

    // ── Discovery submit ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                discover::on_discover(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.filter_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Reset ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            discover::on_reset(&els2);
        }) as Box<dyn FnMut(_)>);
        els.reset_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Credential persistence ──
    on_event!(els.credential_input, "input", els, credentials::on_credential_input);
}
