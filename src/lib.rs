#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

// Re-export commonly used types
pub use data::{CurrencyPreference, PreferenceStore, RateSource};
pub use domain::{Currency, format_price};
pub use engine::{ControlEvent, PriceEngine, SyncReport};
pub use models::{Catalog, PriceBoard, PriceTag, RateTable};
pub use ui::{AppError, ControlStyle, CurrencyApp};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Never contact the rate API; show prices with the built-in rates
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Show one button per currency instead of a single cycling toggle
    #[arg(long, default_value_t = false)]
    pub selector: bool,

    /// Load the product catalog from a JSON file instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Where the preferred currency is stored (native only)
    #[arg(long)]
    pub prefs: Option<PathBuf>,
}

impl Cli {
    pub fn control_style(&self) -> ControlStyle {
        if self.selector {
            ControlStyle::Selector
        } else {
            ControlStyle::Toggle
        }
    }
}

/// The rate source selected by the command line
pub fn rate_source(args: &Cli) -> Arc<dyn RateSource> {
    if args.offline {
        log::info!("Offline mode: using built-in exchange rates");
        Arc::new(data::OfflineRates)
    } else {
        Arc::new(data::ExchangeRateApi::from_env())
    }
}

/// The platform's persistent preference store
pub fn preference_store(args: &Cli) -> Box<dyn PreferenceStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = args
            .prefs
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::PERSISTENCE.preferences_path));
        Box::new(data::FilePreferences::open(path))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = args;
        Box::new(data::LocalStoragePreferences)
    }
}

pub fn build_engine(args: &Cli) -> PriceEngine {
    let preference = CurrencyPreference::new(preference_store(args));
    PriceEngine::new(preference, rate_source(args))
}

/// Load the catalog named on the command line, falling back to the built-in
/// one. The error (if any) is returned so the UI can show it.
pub fn load_catalog(args: &Cli) -> (Catalog, Option<AppError>) {
    let requested = match &args.catalog {
        Some(path) => Catalog::load_from_path(path),
        None => Catalog::embedded(),
    };

    match requested {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            log::error!("❌ {:#}", e);
            let error = AppError::CatalogUnavailable(format!("{:#}", e));
            let fallback = match args.catalog {
                Some(_) => Catalog::embedded().unwrap_or_default(),
                None => Catalog::default(),
            };
            (fallback, Some(error))
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: Cli) -> Box<dyn eframe::App> {
    let engine = build_engine(&args);
    let (catalog, error) = load_catalog(&args);

    let app = ui::CurrencyApp::new(cc, engine, catalog, args.control_style(), error);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cli_uses_toggle_and_live_rates() {
        let args = Cli::parse_from(["currency-toggle"]);
        assert!(!args.offline);
        assert_eq!(args.control_style(), ControlStyle::Toggle);
        assert!(args.catalog.is_none());
    }

    #[test]
    fn selector_flag_switches_control_style() {
        let args = Cli::parse_from(["currency-toggle", "--selector", "--offline"]);
        assert!(args.offline);
        assert_eq!(args.control_style(), ControlStyle::Selector);
    }

    #[test]
    fn offline_source_has_offline_signature() {
        let args = Cli {
            offline: true,
            ..Default::default()
        };
        assert_eq!(rate_source(&args).signature(), data::OfflineRates.signature());
    }

    #[test]
    fn missing_catalog_file_falls_back_to_embedded() {
        let args = Cli {
            catalog: Some(PathBuf::from("does/not/exist/catalog.json")),
            ..Default::default()
        };
        let (catalog, error) = load_catalog(&args);
        assert!(matches!(error, Some(AppError::CatalogUnavailable(_))));
        assert!(!catalog.products.is_empty());
    }

    #[test]
    fn embedded_catalog_loads_without_error() {
        let (catalog, error) = load_catalog(&Cli::default());
        assert!(error.is_none());
        assert_eq!(catalog.products.len(), 5);
    }
}
