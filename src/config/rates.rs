//! Exchange-rate source configuration and the compiled-in fallback table.

use crate::domain::Currency;

/// Configuration for the remote exchange-rate API
pub struct RatesConfig {
    /// Base URL of the exchangerate-api v6 endpoint, access token included
    pub api_base_url: &'static str,
    /// Environment variable that overrides `api_base_url` on native builds
    pub api_url_env: &'static str,
    /// Currency every authored price is expressed in
    pub base: Currency,
    /// Rates used until (or instead of) a successful refresh.
    /// Multipliers are "1 base unit = x target units".
    pub fallback: &'static [(Currency, f64)],
}

impl RatesConfig {
    /// Full request URL for the latest rates relative to `base`
    pub fn latest_url(api_base_url: &str, base: Currency) -> String {
        format!("{}/latest/{}", api_base_url.trim_end_matches('/'), base)
    }

    /// Fallback multiplier for a currency, if the table lists it
    pub fn fallback_rate(&self, currency: Currency) -> Option<f64> {
        self.fallback
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, rate)| *rate)
    }
}

pub const RATES: RatesConfig = RatesConfig {
    api_base_url: "https://v6.exchangerate-api.com/v6/9f2eb0c3630d723581c4de26",
    api_url_env: "RATES_API_URL",
    base: Currency::Kzt,
    fallback: &[
        (Currency::Kzt, 1.0),
        // 1 KZT ≈ 0.16 RUB
        (Currency::Rub, 0.16),
        // 1 KZT ≈ 0.0021 USD
        (Currency::Usd, 0.0021),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fallback_covers_every_currency() {
        for currency in Currency::iter() {
            assert!(RATES.fallback_rate(currency).is_some(), "{currency} missing");
        }
        assert_eq!(RATES.fallback_rate(RATES.base), Some(1.0));
    }

    #[test]
    fn latest_url_appends_base_code() {
        assert_eq!(
            RatesConfig::latest_url("https://example.test/v6/token/", Currency::Kzt),
            "https://example.test/v6/token/latest/KZT"
        );
    }
}
