// Rate fetching and preference persistence
pub mod preferences;
pub mod rate_source;

// Re-export commonly used types
pub use preferences::{CurrencyPreference, MemoryPreferences, PreferenceStore};
pub use rate_source::{ExchangeRateApi, LiveRates, OfflineRates, RateSource, RateSourceError};

#[cfg(not(target_arch = "wasm32"))]
pub use preferences::FilePreferences;
#[cfg(target_arch = "wasm32")]
pub use preferences::LocalStoragePreferences;
