//! Color theme swapping.
//!
//! Themes are plain `data-theme` attribute values on the document element;
//! the stylesheet owns the actual colors.

use crate::dom::{self, Elements};
use crate::state;

pub const DEFAULT_THEME: &str = "ocean";
const THEMES: [&str; 3] = ["ocean", "amber", "graphite"];

/// Apply a named theme, falling back to the default for unknown names.
pub fn apply_theme(theme: &str) {
    let selected = if THEMES.contains(&theme) { theme } else { DEFAULT_THEME };
    if let Some(root) = dom::document().document_element() {
        let _ = root.set_attribute("data-theme", selected);
    }
}

/// Restore the persisted theme and sync the dropdown to it.
pub fn restore_theme(els: &Elements) {
    let theme = state::local_get(state::KEY_THEME).unwrap_or_else(|| DEFAULT_THEME.to_string());
    dom::set_select_value(&els.theme_select, &theme);
    apply_theme(&theme);
}

/// Theme dropdown change: persist and apply.
pub fn on_theme_change(els: &Elements) {
    let theme = dom::get_select_value(&els.theme_select);
    state::local_set(state::KEY_THEME, &theme);
    apply_theme(&theme);
}
