use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use currency_toggle::config::{PERSISTENCE, RATES};
use currency_toggle::data::{
    CurrencyPreference, ExchangeRateApi, MemoryPreferences, OfflineRates, RateSource,
};
use currency_toggle::{Catalog, Currency, PriceEngine};

/// Print the catalog's prices in one currency
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Display currency (KZT, RUB or USD)
    #[arg(long, default_value = "KZT")]
    currency: String,

    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Fetch live rates before converting
    #[arg(long, default_value_t = false)]
    live: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    let currency = Currency::from_code(&args.currency)
        .ok_or_else(|| anyhow!("Unknown currency code: {}", args.currency))?;

    let mut catalog = match &args.catalog {
        Some(path) => Catalog::load_from_path(path)?,
        None => Catalog::embedded()?,
    };

    let source: Arc<dyn RateSource> = if args.live {
        Arc::new(ExchangeRateApi::from_env())
    } else {
        Arc::new(OfflineRates)
    };

    // Nothing persisted between runs
    let store = MemoryPreferences::with_value(PERSISTENCE.preference_key, RATES.base.code());
    let mut engine = PriceEngine::new(CurrencyPreference::new(Box::new(store)), source);

    if args.live {
        engine.start_refresh();
        let refreshed = engine
            .wait_for_refresh()
            .context("Rate refresh was not started")?;
        if !refreshed {
            eprintln!("⚠️  Live rates unavailable, using built-in rates");
        }
    }

    let report = engine.sync_all(&mut catalog, currency);

    println!("{} ({})", catalog.name, engine.status().describe());
    println!();
    let width = catalog
        .products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    for product in &catalog.products {
        let text = match product.price.text() {
            "" => product.price.raw_base_amount(),
            text => text,
        };
        println!("{:<width$}  {:>16}", product.name, text, width = width);
    }

    println!();
    println!(
        "✅ {} price(s) in {}, {} skipped",
        report.updated,
        currency.label(),
        report.skipped
    );
    Ok(())
}
