//! Result rendering and feedback reporting.
//!
//! Pure consumers of orchestrator output: the result list, the feedback
//! line, and the filter preview. The preview always reflects the last
//! payload actually submitted, annotated with the capabilities of *that*
//! payload's platform, whatever platform is selected now.

use ls_api_types::DiscoveredItem;
use ls_panel_core::capabilities::capability_summary;
use ls_panel_core::i18n::{self, message};

use crate::dom::{self, Elements};
use crate::state;

/// Minimal HTML escaping for backend-sourced text interpolated into cards.
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Replace the result view wholesale.
pub fn render_results(els: &Elements, items: &[DiscoveredItem]) {
    let lang = state::lang();
    let container = &els.results;
    dom::set_inner_html(container, "");

    for item in items {
        let card = dom::create_element("div");
        let _ = card.set_attribute("class", "result-card");

        let mut meta = Vec::new();
        if let Some(rating) = item.rating {
            meta.push(format!("{}: {}", message(lang, "resultRating"), rating));
        }
        if let Some(location) = item.location.as_deref() {
            meta.push(escape_html(location));
        }
        if item.is_verified {
            meta.push(format!("\u{2713} {}", message(lang, "resultVerified")));
        }

        let mut links = Vec::new();
        if let Some(website) = item.website.as_deref() {
            links.push(format!(
                r#"<a href="{0}" target="_blank" rel="noopener">{0}</a>"#,
                escape_html(website)
            ));
        }
        if let Some(phone) = item.phone.as_deref() {
            links.push(escape_html(phone));
        }
        if let Some(url) = item.url.as_deref() {
            links.push(format!(
                r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                escape_html(url),
                escape_html(item.name.as_str())
            ));
        }

        let desc_html = match item.description.as_deref() {
            Some(d) if !d.is_empty() => {
                format!(r#"<div class="rc-desc">{}</div>"#, escape_html(d))
            }
            _ => String::new(),
        };

        let html = format!(
            r#"
            <div class="rc-name">{}</div>
            {}
            <div class="rc-meta">{}</div>
            <div class="rc-links">{}</div>
            "#,
            escape_html(&item.name),
            desc_html,
            meta.join(" \u{00b7} "),
            links.join(" \u{00b7} "),
        );

        dom::set_inner_html(&card, &html);
        container.append_child(&card).unwrap();
    }
}

/// Write the status line; errors get the `is-error` class.
pub fn render_feedback(els: &Elements, text: &str, is_error: bool) {
    dom::toggle_class(&els.feedback, "is-error", is_error);
    dom::set_text(&els.feedback, text);
}

/// Re-render the filter preview from the last submitted payload.
pub fn render_filter_preview(els: &Elements) {
    let lang = state::lang();
    let Some(payload) = state::with(|s| s.last_payload.clone()) else {
        dom::set_text(&els.filter_preview, message(lang, "filterPreviewEmpty"));
        return;
    };

    let dash = "-";
    let niche = i18n::niche_label_key(&payload.niche)
        .map(|key| message(lang, key))
        .unwrap_or(payload.niche.as_str());
    let bool_label = if payload.only_verified {
        message(lang, "filterYes")
    } else {
        message(lang, "filterNo")
    };

    let mut lines = vec![
        format!("{}:", message(lang, "previewTitle")),
        format!(
            "{}: {}",
            message(lang, "previewPlatform"),
            message(lang, i18n::platform_label_key(payload.platform))
        ),
        format!(
            "{}: {}",
            message(lang, "previewQuery"),
            if payload.query.is_empty() { dash } else { payload.query.as_str() }
        ),
        format!("{}: {}", message(lang, "previewNiche"), niche),
        format!(
            "{}: {}",
            message(lang, "previewWebsite"),
            message(lang, i18n::tristate_label_key(payload.has_website))
        ),
        format!(
            "{}: {}",
            message(lang, "previewPhone"),
            message(lang, i18n::tristate_label_key(payload.has_phone))
        ),
        format!(
            "{}: {}",
            message(lang, "previewLocation"),
            if payload.location.is_empty() { dash } else { payload.location.as_str() }
        ),
        format!("{}: {}", message(lang, "previewRating"), payload.min_rating),
        format!("{}: {}", message(lang, "previewVerified"), bool_label),
    ];

    // Annotate with the capabilities that applied to the submitted payload's
    // platform, not whatever platform is selected now.
    let caps = state::with(|s| s.capabilities.get(payload.platform).clone());
    lines.push(String::new());
    lines.push(capability_summary(lang, payload.platform, &caps));

    dom::set_text(&els.filter_preview, &lines.join("\n"));
}
