//! Per-platform credential access.
//!
//! The vault is a convenience cache keyed per platform; the backend's
//! `configured` flag stays the system of record. The trait seam lets the
//! WASM crate back it with localStorage while tests use the in-memory store.

use ls_api_types::PlatformId;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// localStorage key for one platform's credential.
pub fn storage_key(platform: PlatformId) -> String {
    format!("dashboard-credential-{}", platform.as_str())
}

/// Read is total (empty string when unset) and supports any id so payload
/// assembly works for whichever platform produced the payload. Writes are
/// only ever driven by the active platform's input.
pub trait CredentialStore {
    fn read(&self, platform: PlatformId) -> String;
    fn write(&self, platform: PlatformId, value: &str);
}

/// In-memory store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    values: RefCell<BTreeMap<PlatformId, String>>,
}

impl CredentialStore for MemoryCredentials {
    fn read(&self, platform: PlatformId) -> String {
        self.values
            .borrow()
            .get(&platform)
            .cloned()
            .unwrap_or_default()
    }

    fn write(&self, platform: PlatformId, value: &str) {
        self.values
            .borrow_mut()
            .insert(platform, value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_platform_reads_empty() {
        let vault = MemoryCredentials::default();
        assert_eq!(vault.read(PlatformId::GoogleMaps), "");
    }

    #[test]
    fn writes_are_scoped_per_platform() {
        let vault = MemoryCredentials::default();
        vault.write(PlatformId::GoogleMaps, "maps-key");
        vault.write(PlatformId::Reddit, "reddit-secret");
        assert_eq!(vault.read(PlatformId::GoogleMaps), "maps-key");
        assert_eq!(vault.read(PlatformId::Reddit), "reddit-secret");
        assert_eq!(vault.read(PlatformId::Instagram), "");
    }

    #[test]
    fn storage_keys_embed_the_platform_id() {
        assert_eq!(
            storage_key(PlatformId::GoogleMaps),
            "dashboard-credential-google_maps"
        );
    }
}
