use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Display currencies supported by the storefront.
///
/// Declaration order is the toggle cycle order (KZT → RUB → USD → KZT).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Kzt,
    Rub,
    Usd,
}

impl Currency {
    /// ISO 4217 code, e.g. "KZT"
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Kzt => "KZT",
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Kzt => "₸",
            Currency::Rub => "₽",
            Currency::Usd => "$",
        }
    }

    /// Text shown on the currency label / toggle button, e.g. "KZT (₸)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }

    /// Parse a textual code. Case and surrounding whitespace are ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().to_uppercase().parse().ok()
    }

    /// Next currency in cycle order, wrapping around after the last one.
    pub fn next(self) -> Self {
        let order: Vec<Currency> = Currency::iter().collect();
        let idx = order.iter().position(|c| *c == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    pub fn cycle_len() -> usize {
        Currency::iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parse() {
        for currency in Currency::iter() {
            assert_eq!(currency.to_string(), currency.code());
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(Currency::from_code(" usd "), Some(Currency::Usd));
        assert_eq!(Currency::from_code("EUR"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn cycle_follows_declaration_order_and_wraps() {
        assert_eq!(Currency::Kzt.next(), Currency::Rub);
        assert_eq!(Currency::Rub.next(), Currency::Usd);
        assert_eq!(Currency::Usd.next(), Currency::Kzt);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for start in Currency::iter() {
            let mut current = start;
            for _ in 0..Currency::cycle_len() {
                current = current.next();
            }
            assert_eq!(current, start);
        }
    }

    #[test]
    fn labels_include_symbol() {
        assert_eq!(Currency::Kzt.label(), "KZT (₸)");
        assert_eq!(Currency::Rub.label(), "RUB (₽)");
        assert_eq!(Currency::Usd.label(), "USD ($)");
    }
}
