//! String-table lookup with a default-language fallback.
//!
//! `message(lang, key)` is a pure function: requested language first, then
//! Spanish (the default language), then the key itself. Components take the
//! language as an argument instead of reading ambient state.

use ls_api_types::{PlatformId, TriState};

/// Display language of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn parse(raw: &str) -> Option<Lang> {
        match raw {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Map a BCP-47 browser language tag to a supported language.
    pub fn from_browser_tag(tag: &str) -> Lang {
        if tag.to_ascii_lowercase().starts_with("es") {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

/// Resolve a string key for a language, falling back to Spanish and finally
/// to the key itself so a missing entry stays visible instead of blank.
pub fn message<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Lang::Es, key))
        .unwrap_or(key)
}

/// Nav label key for a platform.
pub fn platform_label_key(platform: PlatformId) -> &'static str {
    match platform {
        PlatformId::Telegram => "navTelegram",
        PlatformId::GoogleMaps => "navGoogleMaps",
        PlatformId::Instagram => "navInstagram",
        PlatformId::Reddit => "navReddit",
    }
}

/// Hint line key for a platform.
pub fn platform_hint_key(platform: PlatformId) -> &'static str {
    match platform {
        PlatformId::Telegram => "sourceHintTelegram",
        PlatformId::GoogleMaps => "sourceHintGoogleMaps",
        PlatformId::Instagram => "sourceHintInstagram",
        PlatformId::Reddit => "sourceHintReddit",
    }
}

/// Display key for a presence filter value.
pub fn tristate_label_key(value: TriState) -> &'static str {
    match value {
        TriState::Any => "filterAny",
        TriState::Yes => "filterYes",
        TriState::No => "filterNo",
    }
}

/// Display key for a niche value; unknown niches render verbatim.
pub fn niche_label_key(niche: &str) -> Option<&'static str> {
    match niche {
        "all" => Some("nicheAll"),
        "restaurants" => Some("nicheRestaurants"),
        "real_estate" => Some("nicheRealEstate"),
        "legal" => Some("nicheLegal"),
        "medical" => Some("nicheMedical"),
        "beauty" => Some("nicheBeauty"),
        _ => None,
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let table = match lang {
        Lang::Es => TABLE_ES,
        Lang::En => TABLE_EN,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const TABLE_ES: &[(&str, &str)] = &[
    ("pageTitle", "Panel Multi-Fuente"),
    ("navTitle", "Scraper Multi-Fuente"),
    ("menuLabel", "Plataformas"),
    ("navTelegram", "Telegram"),
    ("navGoogleMaps", "Google Maps"),
    ("navInstagram", "Instagram"),
    ("navReddit", "Reddit"),
    ("heroTitle", "Control y Descubrimiento"),
    ("heroLede", "Elige una fuente, define filtros y ejecuta recoleccion de datos de forma segura."),
    ("languageLabel", "Idioma"),
    ("themeLabel", "Color"),
    ("langSpanish", "Espanol"),
    ("langEnglish", "English"),
    ("themeOcean", "Oceano"),
    ("themeAmber", "Ambar"),
    ("themeGraphite", "Grafito"),
    ("sourceSearchTitle", "Busqueda y Filtros por Fuente"),
    ("sourceQueryLabel", "Busqueda"),
    ("sourceQueryPlaceholder", "Ej: restaurantes vegan en Lima"),
    ("sourceNicheLabel", "Nicho de negocio"),
    ("nicheAll", "Todos los nichos"),
    ("nicheRestaurants", "Restaurantes"),
    ("nicheRealEstate", "Inmobiliaria"),
    ("nicheLegal", "Servicios legales"),
    ("nicheMedical", "Clinicas medicas"),
    ("nicheBeauty", "Belleza y bienestar"),
    ("sourceWebsiteLabel", "Tiene web"),
    ("sourcePhoneLabel", "Tiene telefono"),
    ("filterAny", "Cualquiera"),
    ("filterYes", "Si"),
    ("filterNo", "No"),
    ("sourceLocationLabel", "Ubicacion"),
    ("sourceLocationPlaceholder", "Ciudad o pais"),
    ("sourceRatingLabel", "Rating minimo"),
    ("ratingAny", "Cualquiera"),
    ("sourceVerifiedLabel", "Solo perfiles verificados"),
    ("discoverBtn", "Buscar en la fuente"),
    ("resetFiltersBtn", "Reiniciar"),
    ("sourceHintTelegram", "Modulo Telegram activo. Usa canales/grupos publicos o chats donde tu cuenta tenga acceso legitimo."),
    ("sourceHintGoogleMaps", "Descubrimiento de Google Maps disponible. Define nicho, web, telefono y rating antes de buscar."),
    ("sourceHintInstagram", "El conector de Instagram esta deshabilitado por politica de la plataforma."),
    ("sourceHintReddit", "Descubrimiento de Reddit disponible. Define filtros y ejecuta la busqueda."),
    ("filterPreviewEmpty", "Configura filtros y pulsa Buscar."),
    ("previewTitle", "Resumen de filtros"),
    ("previewPlatform", "Plataforma"),
    ("previewQuery", "Busqueda"),
    ("previewNiche", "Nicho"),
    ("previewWebsite", "Web"),
    ("previewPhone", "Telefono"),
    ("previewLocation", "Ubicacion"),
    ("previewRating", "Rating minimo"),
    ("previewVerified", "Solo verificados"),
    ("capSummaryTitle", "Capacidades de la fuente"),
    ("capDiscovery", "API de descubrimiento"),
    ("capRating", "Filtro de rating"),
    ("capVerified", "Filtro de verificados"),
    ("capWebsite", "Filtro de web"),
    ("capPhone", "Filtro de telefono"),
    ("capLocationRequired", "Ubicacion obligatoria"),
    ("capDisabled", "Conector deshabilitado"),
    ("credentialLabelDefault", "Credencial"),
    ("credentialHintConfigured", "El backend ya tiene una credencial configurada."),
    ("credentialHintNeeded", "Se requiere una credencial para esta fuente."),
    ("errLocationRequired", "Esta fuente requiere una ubicacion."),
    ("errCredentialMissing", "Falta la credencial de esta fuente."),
    ("errDiscoveryFailed", "La busqueda fallo"),
    ("discoveryCountMsg", "{count} resultados encontrados."),
    ("discoveryEmptyMsg", "Sin resultados para estos filtros."),
    ("discoveryExemptMsg", "Telegram usa el flujo de scrape, no la busqueda de descubrimiento."),
    ("discoveryRunningMsg", "Buscando..."),
    ("warningsPrefix", "Avisos"),
    ("resultRating", "Rating"),
    ("resultVerified", "Verificado"),
    ("scrapeTitle", "Ejecutar scrape"),
    ("exportTitle", "Exportar mensajes"),
];

const TABLE_EN: &[(&str, &str)] = &[
    ("pageTitle", "Multi-Source Scraper Panel"),
    ("navTitle", "Multi-Source Scraper"),
    ("menuLabel", "Platforms"),
    ("navTelegram", "Telegram"),
    ("navGoogleMaps", "Google Maps"),
    ("navInstagram", "Instagram"),
    ("navReddit", "Reddit"),
    ("heroTitle", "Control and Discovery"),
    ("heroLede", "Pick a source, set filters and run data collection safely."),
    ("languageLabel", "Language"),
    ("themeLabel", "Color"),
    ("langSpanish", "Spanish"),
    ("langEnglish", "English"),
    ("themeOcean", "Ocean"),
    ("themeAmber", "Amber"),
    ("themeGraphite", "Graphite"),
    ("sourceSearchTitle", "Source Search and Filters"),
    ("sourceQueryLabel", "Search"),
    ("sourceQueryPlaceholder", "Eg: vegan restaurants in Lima"),
    ("sourceNicheLabel", "Business niche"),
    ("nicheAll", "All niches"),
    ("nicheRestaurants", "Restaurants"),
    ("nicheRealEstate", "Real estate"),
    ("nicheLegal", "Legal services"),
    ("nicheMedical", "Medical clinics"),
    ("nicheBeauty", "Beauty and wellness"),
    ("sourceWebsiteLabel", "Has website"),
    ("sourcePhoneLabel", "Has phone"),
    ("filterAny", "Any"),
    ("filterYes", "Yes"),
    ("filterNo", "No"),
    ("sourceLocationLabel", "Location"),
    ("sourceLocationPlaceholder", "City or country"),
    ("sourceRatingLabel", "Minimum rating"),
    ("ratingAny", "Any"),
    ("sourceVerifiedLabel", "Only verified profiles"),
    ("discoverBtn", "Search source"),
    ("resetFiltersBtn", "Reset"),
    ("sourceHintTelegram", "Telegram module is active. Use public channels/groups or chats where your account already has access."),
    ("sourceHintGoogleMaps", "Google Maps discovery is available. Set niche, website, phone and rating filters before searching."),
    ("sourceHintInstagram", "The Instagram connector is disabled by platform policy."),
    ("sourceHintReddit", "Reddit discovery is available. Set filters and run the search."),
    ("filterPreviewEmpty", "Configure filters and click Search."),
    ("previewTitle", "Filter summary"),
    ("previewPlatform", "Platform"),
    ("previewQuery", "Search"),
    ("previewNiche", "Niche"),
    ("previewWebsite", "Website"),
    ("previewPhone", "Phone"),
    ("previewLocation", "Location"),
    ("previewRating", "Minimum rating"),
    ("previewVerified", "Only verified"),
    ("capSummaryTitle", "Source capabilities"),
    ("capDiscovery", "Discovery API"),
    ("capRating", "Rating filter"),
    ("capVerified", "Verified filter"),
    ("capWebsite", "Website filter"),
    ("capPhone", "Phone filter"),
    ("capLocationRequired", "Location required"),
    ("capDisabled", "Connector disabled"),
    ("credentialLabelDefault", "Credential"),
    ("credentialHintConfigured", "The backend already holds a configured credential."),
    ("credentialHintNeeded", "A credential is required for this source."),
    ("errLocationRequired", "This source requires a location."),
    ("errCredentialMissing", "This source's credential is missing."),
    ("errDiscoveryFailed", "Discovery failed"),
    ("discoveryCountMsg", "{count} results found."),
    ("discoveryEmptyMsg", "No results for these filters."),
    ("discoveryExemptMsg", "Telegram uses the scrape workflow, not discovery search."),
    ("discoveryRunningMsg", "Searching..."),
    ("warningsPrefix", "Warnings"),
    ("resultRating", "Rating"),
    ("resultVerified", "Verified"),
    ("scrapeTitle", "Run scrape"),
    ("exportTitle", "Export messages"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_requested_language() {
        assert_eq!(message(Lang::En, "menuLabel"), "Platforms");
        assert_eq!(message(Lang::Es, "menuLabel"), "Plataformas");
    }

    #[test]
    fn falls_back_to_spanish_then_key() {
        // Every key present in es; an unknown key comes back verbatim.
        assert_eq!(message(Lang::En, "noSuchKey"), "noSuchKey");
        assert_eq!(message(Lang::Es, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for (key, _) in TABLE_ES {
            assert!(
                TABLE_EN.iter().any(|(k, _)| k == key),
                "missing en translation for {key}"
            );
        }
        for (key, _) in TABLE_EN {
            assert!(
                TABLE_ES.iter().any(|(k, _)| k == key),
                "missing es translation for {key}"
            );
        }
    }

    #[test]
    fn platform_and_filter_keys_resolve_in_both_tables() {
        for platform in PlatformId::ALL {
            let label = platform_label_key(platform);
            assert_ne!(message(Lang::En, label), label);
            let hint = platform_hint_key(platform);
            assert_ne!(message(Lang::Es, hint), hint);
        }
        assert_eq!(message(Lang::En, tristate_label_key(TriState::Any)), "Any");
        assert_eq!(niche_label_key("legal"), Some("nicheLegal"));
        assert_eq!(niche_label_key("unlisted"), None);
    }

    #[test]
    fn browser_tag_mapping() {
        assert_eq!(Lang::from_browser_tag("es-PE"), Lang::Es);
        assert_eq!(Lang::from_browser_tag("ES"), Lang::Es);
        assert_eq!(Lang::from_browser_tag("en-US"), Lang::En);
        assert_eq!(Lang::from_browser_tag(""), Lang::En);
    }
}
