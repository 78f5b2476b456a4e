//! Language application.
//!
//! Retranslates the static page by walking `data-i18n` /
//! `data-i18n-placeholder` attributes, then refreshes the dynamic views
//! that embed localized text.

use ls_panel_core::i18n::{self, Lang};

use crate::dom::{self, Elements};
use crate::platform;
use crate::results;
use crate::state;

/// Initial language: persisted value, else the browser language.
pub fn initial_language() -> Lang {
    if let Some(saved) = state::local_get(state::KEY_LANGUAGE) {
        if let Some(lang) = Lang::parse(&saved) {
            return lang;
        }
    }
    let tag = dom::window().navigator().language().unwrap_or_default();
    Lang::from_browser_tag(&tag)
}

/// Apply a language to the whole page and remember it in state.
pub fn apply_language(els: &Elements, lang: Lang) {
    state::set_lang(lang);

    let doc = dom::document();
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang.as_str());
    }

    for el in dom::query_all("[data-i18n]") {
        let Some(key) = el.get_attribute("data-i18n") else {
            continue;
        };
        let value = i18n::message(lang, &key);
        if el.tag_name().eq_ignore_ascii_case("title") {
            doc.set_title(value);
        } else {
            dom::set_text(&el, value);
        }
    }

    for el in dom::query_all("[data-i18n-placeholder]") {
        let Some(key) = el.get_attribute("data-i18n-placeholder") else {
            continue;
        };
        let _ = el.set_attribute("placeholder", i18n::message(lang, &key));
    }

    // Localized dynamic views follow the new language.
    platform::refresh_platform_labels(els);
    results::render_filter_preview(els);
}

/// Language dropdown change: persist and re-apply.
pub fn on_language_change(els: &Elements) {
    let raw = dom::get_select_value(&els.language_select);
    let lang = Lang::parse(&raw).unwrap_or_default();
    state::local_set(state::KEY_LANGUAGE, lang.as_str());
    apply_language(els, lang);
}
