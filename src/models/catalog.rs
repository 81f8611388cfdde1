use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::DEMO;
use crate::models::price_tag::{PriceBoard, PriceTag};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceTag,
}

/// The storefront page: a list of products, each carrying one price tag,
/// plus the label that shows the active currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    pub name: String,
    pub products: Vec<Product>,
    #[serde(skip, default = "default_label")]
    pub currency_label: Option<String>,
}

fn default_label() -> Option<String> {
    Some(String::new())
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse catalog JSON")
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(DEMO.catalog_json).context("Embedded catalog is invalid")
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&json).context(format!("Failed to load catalog: {}", path.display()))
    }

    /// Drop the label slot (a page without a currency indicator)
    pub fn without_label(mut self) -> Self {
        self.currency_label = None;
        self
    }
}

impl PriceBoard for Catalog {
    fn price_tags(&mut self) -> Vec<&mut PriceTag> {
        self.products.iter_mut().map(|p| &mut p.price).collect()
    }

    fn currency_label(&mut self) -> Option<&mut String> {
        self.currency_label.as_mut()
    }
}
