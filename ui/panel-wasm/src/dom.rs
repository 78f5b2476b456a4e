//! DOM element bindings.
//!
//! All panel elements are resolved once at startup against the stable ids
//! the markup exposes. To add new UI elements, add a field here and bind it
//! in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// Show or hide via the `hidden` attribute (panels are hidden, never removed).
pub fn set_hidden(el: &Element, hidden: bool) {
    if hidden {
        let _ = el.set_attribute("hidden", "");
    } else {
        let _ = el.remove_attribute("hidden");
    }
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the panel.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Chrome
    pub menu_toggle: HtmlElement,
    pub platform_nav: Element,
    pub platform_buttons: Vec<Element>,
    pub platform_panels: Vec<Element>,
    pub platform_badge: Element,
    pub source_hint: Element,

    // Language / theme
    pub language_select: HtmlSelectElement,
    pub theme_select: HtmlSelectElement,

    // Filter form
    pub filter_form: HtmlFormElement,
    pub query_input: HtmlInputElement,
    pub niche_select: HtmlSelectElement,
    pub website_select: HtmlSelectElement,
    pub phone_select: HtmlSelectElement,
    pub location_input: HtmlInputElement,
    pub rating_select: HtmlSelectElement,
    pub verified_checkbox: HtmlInputElement,
    pub discover_btn: HtmlElement,
    pub reset_btn: HtmlElement,

    // Credential field
    pub credential_field: Element,
    pub credential_label: Element,
    pub credential_input: HtmlInputElement,
    pub credential_hint: Element,

    // Outputs
    pub capability_summary: Element,
    pub filter_preview: Element,
    pub feedback: Element,
    pub results: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            menu_toggle: get_html!("menuToggle"),
            platform_nav: get_el!("platformNav"),
            platform_buttons: query_all(".platform-link"),
            platform_panels: query_all(".platform-panel"),
            platform_badge: get_el!("activePlatformBadge"),
            source_hint: get_el!("sourceHint"),

            language_select: get_select!("languageSwitcher"),
            theme_select: get_select!("themeSwitcher"),

            filter_form: get_form!("sourceFilterForm"),
            query_input: get_input!("sourceQuery"),
            niche_select: get_select!("sourceNiche"),
            website_select: get_select!("hasWebsite"),
            phone_select: get_select!("hasPhone"),
            location_input: get_input!("sourceLocation"),
            rating_select: get_select!("minRating"),
            verified_checkbox: get_input!("onlyVerified"),
            discover_btn: get_html!("discoverBtn"),
            reset_btn: get_html!("resetFiltersBtn"),

            credential_field: get_el!("credentialField"),
            credential_label: get_el!("credentialLabel"),
            credential_input: get_input!("credentialInput"),
            credential_hint: get_el!("credentialHint"),

            capability_summary: get_el!("capabilitySummary"),
            filter_preview: get_el!("filterPreview"),
            feedback: get_el!("discoveryFeedback"),
            results: get_el!("discoveryResults"),
        })
    }
}
