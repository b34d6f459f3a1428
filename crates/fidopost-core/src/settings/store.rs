//! Raw preference storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Preference keys read by the settings loader.
///
/// An embedder that persists preferences (platform defaults, a config
/// file, a database) exposes raw string values under these keys.
pub mod keys {
    /// Sysop name.
    pub const SYSOP_NAME: &str = "sysopName";
    /// Station name.
    pub const STATION_NAME: &str = "stationName";
    /// Station location.
    pub const LOCATION: &str = "location";
    /// Whitespace-separated list of station FTN addresses.
    pub const FTN_ADDRESSES: &str = "ftnAddrs";
    /// Nodelist flags.
    pub const NODELIST_ATTRS: &str = "nodelistAttrs";
    /// Uplink FTN address.
    pub const UPLINK_FTN_ADDRESS: &str = "uplinkFtnAddr";
    /// Uplink internet host.
    pub const UPLINK_INET_ADDRESS: &str = "uplinkInetAddr";
    /// Uplink TCP port.
    pub const UPLINK_INET_PORT: &str = "uplinkInetPort";
    /// Uplink session password.
    pub const UPLINK_PASSWORD: &str = "uplinkPassword";
    /// Origin line.
    pub const ORIGIN: &str = "origin";
    /// Tearline.
    pub const TEARLINE: &str = "tearline";
    /// Codepage selection.
    pub const CODEPAGE: &str = "codepage";
    /// Russian-N transliteration toggle, `"yes"` or `"no"`.
    pub const REPLACE_RUSSIAN_N: &str = "replaceN";
    /// New-message header template.
    pub const NEW_MESSAGE_HEADER: &str = "newmsghead";
    /// Reply header template.
    pub const REPLY_HEADER: &str = "replymsghead";
    /// Signature.
    pub const SIGNATURE: &str = "signature";
    /// Per-area message cap.
    pub const MAX_MESSAGES: &str = "maxMessagesNumber";
}

/// Raw preference storage for station settings.
///
/// Implementations hand out plain strings; interpretation and
/// validation belong to
/// [`load_settings`](crate::settings::load_settings). All methods must
/// be safe to call from several threads at once.
pub trait SettingsStore: Send + Sync {
    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory [`SettingsStore`].
///
/// Nothing survives a process restart. Embedders with a real
/// preference backend implement the trait over it instead; tests and
/// examples seed this store directly.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_values().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_values().is_empty()
    }

    fn read_values(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_values(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.write_values().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.write_values().remove(key);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(keys::SYSOP_NAME), None);

        store.set(keys::SYSOP_NAME, "Alice");
        assert_eq!(store.get(keys::SYSOP_NAME), Some("Alice".to_string()));
        assert_eq!(store.len(), 1);

        store.set(keys::SYSOP_NAME, "Bob");
        assert_eq!(store.get(keys::SYSOP_NAME), Some("Bob".to_string()));
        assert_eq!(store.len(), 1);

        store.remove(keys::SYSOP_NAME);
        assert_eq!(store.get(keys::SYSOP_NAME), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.set(keys::STATION_NAME, "Night Station");
        store.set(keys::LOCATION, "Helsinki");

        store.remove(keys::STATION_NAME);
        assert_eq!(store.get(keys::LOCATION), Some("Helsinki".to_string()));
    }

    #[test]
    fn test_usable_through_trait_object() {
        let store = MemoryStore::new();
        let store: &dyn SettingsStore = &store;
        store.set(keys::CODEPAGE, "cp866");
        assert_eq!(store.get(keys::CODEPAGE), Some("cp866".to_string()));
    }
}
