//! Persisted user preferences.
//!
//! A tiny string key-value store. Native builds keep it in a JSON file, the
//! browser build in `localStorage`, tests in memory.

use std::collections::HashMap;

use anyhow::Result;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{PERSISTENCE, RATES};
use crate::domain::Currency;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FilePreferences;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};

    use super::PreferenceStore;

    /// JSON object on disk, rewritten on every `set`
    #[derive(Debug)]
    pub struct FilePreferences {
        path: PathBuf,
        values: BTreeMap<String, String>,
    }

    impl FilePreferences {
        /// Open the store. A missing file is an empty store; an unreadable one
        /// is logged and treated as empty.
        pub fn open(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let values = match Self::read_values(&path) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("⚠️  Ignoring unreadable preferences: {:#}", e);
                    BTreeMap::new()
                }
            };
            Self { path, values }
        }

        fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
            if !path.exists() {
                return Ok(BTreeMap::new());
            }
            let json = std::fs::read_to_string(path)
                .context(format!("Failed to read preferences: {}", path.display()))?;
            serde_json::from_str(&json)
                .context(format!("Failed to parse preferences: {}", path.display()))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl PreferenceStore for FilePreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.values.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
            let json = serde_json::to_string_pretty(&self.values)
                .context("Failed to serialize preferences")?;
            std::fs::write(&self.path, json)
                .context(format!("Failed to write preferences: {}", self.path.display()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_store::LocalStoragePreferences;

#[cfg(target_arch = "wasm32")]
mod web_store {
    use anyhow::{Result, anyhow};

    use super::PreferenceStore;

    /// Browser `window.localStorage`
    #[derive(Debug, Default)]
    pub struct LocalStoragePreferences;

    impl LocalStoragePreferences {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl PreferenceStore for LocalStoragePreferences {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let storage = Self::storage().ok_or_else(|| anyhow!("localStorage unavailable"))?;
            storage
                .set_item(key, value)
                .map_err(|e| anyhow!("localStorage write failed: {:?}", e))
        }
    }
}

/// The stored display currency
pub struct CurrencyPreference {
    store: Box<dyn PreferenceStore>,
    key: &'static str,
}

impl CurrencyPreference {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            store,
            key: PERSISTENCE.preference_key,
        }
    }

    /// Last saved currency; the base currency when nothing (valid) is stored.
    pub fn load(&self) -> Currency {
        match self.store.get(self.key) {
            Some(raw) => match Currency::from_code(&raw) {
                Some(currency) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_preferences {
                        log::info!("Loaded preferred currency: {}", currency);
                    }
                    currency
                }
                None => {
                    log::warn!("Stored currency '{}' not recognised, using {}", raw, RATES.base);
                    RATES.base
                }
            },
            None => RATES.base,
        }
    }

    /// Persist `currency`. Failures are logged, never propagated.
    pub fn save(&mut self, currency: Currency) {
        match self.store.set(self.key, currency.code()) {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_preferences {
                    log::info!("Saved preferred currency: {}", currency);
                }
            }
            Err(e) => log::warn!("⚠️  Failed to save currency preference: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::anyhow!("read-only"))
        }
    }

    #[test]
    fn empty_store_loads_base_currency() {
        let pref = CurrencyPreference::new(Box::new(MemoryPreferences::new()));
        assert_eq!(pref.load(), Currency::Kzt);
    }

    #[test]
    fn unrecognised_value_loads_base_currency() {
        let store = MemoryPreferences::with_value(PERSISTENCE.preference_key, "DOGE");
        let pref = CurrencyPreference::new(Box::new(store));
        assert_eq!(pref.load(), Currency::Kzt);
    }

    #[test]
    fn saved_value_is_loaded_back() {
        let mut pref = CurrencyPreference::new(Box::new(MemoryPreferences::new()));
        pref.save(Currency::Rub);
        assert_eq!(pref.load(), Currency::Rub);
        pref.save(Currency::Usd);
        assert_eq!(pref.load(), Currency::Usd);
    }

    #[test]
    fn save_failure_is_not_fatal() {
        let mut pref = CurrencyPreference::new(Box::new(ReadOnlyStore));
        pref.save(Currency::Usd);
        assert_eq!(pref.load(), Currency::Kzt);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_reopen() {
        let dir = std::env::temp_dir()
            .join(format!("currency-toggle-prefs-{}", std::process::id()));
        let path = dir.join("prefs.json");
        let _ = std::fs::remove_file(&path);

        let mut store = FilePreferences::open(&path);
        assert_eq!(store.get(PERSISTENCE.preference_key), None);
        store.set(PERSISTENCE.preference_key, "USD").unwrap();

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(PERSISTENCE.preference_key).as_deref(), Some("USD"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_opens_as_empty_store() {
        let dir = std::env::temp_dir()
            .join(format!("currency-toggle-corrupt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FilePreferences::open(&path);
        assert_eq!(store.get(PERSISTENCE.preference_key), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
