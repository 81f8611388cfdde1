use serde::{Deserialize, Serialize};

use crate::domain::Currency;

/// A single price display on the page.
///
/// `base_amount` is the amount authored in the base currency, kept as raw
/// text exactly as the page content supplied it. `text` and `currency` are
/// what the synchronizer writes back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PriceTag {
    base_amount: String,
    #[serde(skip)]
    text: String,
    #[serde(skip)]
    currency: Option<Currency>,
}

impl PriceTag {
    pub fn new(base_amount: impl Into<String>) -> Self {
        Self {
            base_amount: base_amount.into(),
            text: String::new(),
            currency: None,
        }
    }

    pub fn raw_base_amount(&self) -> &str {
        &self.base_amount
    }

    /// The authored amount, or `None` if it is not a non-negative finite number.
    pub fn base_amount(&self) -> Option<f64> {
        let amount: f64 = self.base_amount.trim().parse().ok()?;
        (amount.is_finite() && amount >= 0.0).then_some(amount)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currency the visible text is currently expressed in
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    pub fn set_display(&mut self, text: String, currency: Currency) {
        self.text = text;
        self.currency = Some(currency);
    }
}

/// Provides the price tags of the current page plus its optional currency
/// label. The synchronizer never creates or removes tags; it only rewrites
/// the display fields of what the board hands out.
pub trait PriceBoard {
    fn price_tags(&mut self) -> Vec<&mut PriceTag>;

    /// The single "current currency" label, if the page has one
    fn currency_label(&mut self) -> Option<&mut String> {
        None
    }
}
