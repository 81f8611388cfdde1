use std::collections::{BTreeMap, HashMap};

use strum::IntoEnumIterator;

use crate::config::RATES;
use crate::domain::Currency;

/// Exchange-rate multipliers relative to the base currency.
///
/// Invariant: the base currency maps to exactly 1 and every rate is positive
/// and finite. Tables built with [`RateTable::fallback`] cover every currency
/// in the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: Currency,
    rates: BTreeMap<Currency, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl RateTable {
    /// The compiled-in fallback table
    pub fn fallback() -> Self {
        let mut rates = BTreeMap::new();
        for currency in Currency::iter() {
            if let Some(rate) = RATES.fallback_rate(currency) {
                rates.insert(currency, rate);
            }
        }
        rates.insert(RATES.base, 1.0);
        Self {
            base: RATES.base,
            rates,
        }
    }

    /// Build a table from explicit rates. Non-positive or non-finite entries
    /// are dropped and the base is forced to 1.
    pub fn from_rates(base: Currency, entries: impl IntoIterator<Item = (Currency, f64)>) -> Self {
        let mut rates: BTreeMap<Currency, f64> = entries
            .into_iter()
            .filter(|(_, rate)| is_usable_rate(*rate))
            .collect();
        rates.insert(base, 1.0);
        Self { base, rates }
    }

    pub fn base(&self) -> Currency {
        self.base
    }

    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }

    /// Convert a base-currency amount into `target`. No rounding.
    ///
    /// A missing entry converts as identity and logs a warning.
    pub fn convert(&self, amount: f64, target: Currency) -> f64 {
        match self.get(target) {
            Some(rate) => amount * rate,
            None => {
                log::warn!("No exchange rate for {}, showing base amount", target);
                amount
            }
        }
    }

    /// Like [`RateTable::convert`] for a textual code; unknown codes convert as identity.
    pub fn convert_code(&self, amount: f64, code: &str) -> f64 {
        match Currency::from_code(code) {
            Some(currency) => self.convert(amount, currency),
            None => {
                log::warn!("Unknown currency: {}", code);
                amount
            }
        }
    }

    /// Fold a freshly fetched code → rate map into the table.
    ///
    /// The base is set to 1 and every other cycle currency takes the live
    /// rate when one is present and usable, otherwise it keeps its last-known
    /// value. The new table is computed in full before it replaces the old
    /// one. Returns how many currencies took a live value.
    pub fn apply_live(&mut self, live: &HashMap<String, f64>) -> usize {
        let mut next = self.rates.clone();
        next.insert(self.base, 1.0);

        let mut updated = 0;
        for currency in Currency::iter().filter(|c| *c != self.base) {
            match live.get(currency.code()).copied() {
                Some(rate) if is_usable_rate(rate) => {
                    next.insert(currency, rate);
                    updated += 1;
                }
                Some(rate) => {
                    log::warn!("Ignoring unusable live rate {} for {}", rate, currency);
                }
                None => {
                    log::warn!(
                        "Live rates missing {}, keeping {:?}",
                        currency,
                        next.get(&currency)
                    );
                }
            }
        }

        self.rates = next;
        updated
    }
}

fn is_usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn fallback_has_base_of_one_and_every_currency() {
        let table = RateTable::fallback();
        assert_eq!(table.base(), Currency::Kzt);
        assert_eq!(table.get(Currency::Kzt), Some(1.0));
        assert_eq!(table.get(Currency::Rub), Some(0.16));
        assert_eq!(table.get(Currency::Usd), Some(0.0021));
    }

    #[test]
    fn converting_to_base_is_identity() {
        let table = RateTable::fallback();
        for amount in [0.0, 1.0, 999.99, 1_000_000.0, 2_490_000.0] {
            assert_eq!(table.convert(amount, Currency::Kzt), amount);
        }
    }

    #[test]
    fn converts_without_rounding() {
        let table = RateTable::fallback();
        assert!((table.convert(1000.0, Currency::Usd) - 2.1).abs() < 1e-12);
        assert!((table.convert(1234.0, Currency::Rub) - 197.44).abs() < 1e-9);
    }

    #[test]
    fn missing_entry_converts_as_identity() {
        let table = RateTable::from_rates(Currency::Kzt, [(Currency::Rub, 0.2)]);
        assert_eq!(table.get(Currency::Usd), None);
        assert_eq!(table.convert(500.0, Currency::Usd), 500.0);
    }

    #[test]
    fn unknown_code_converts_as_identity() {
        let table = RateTable::fallback();
        assert_eq!(table.convert_code(750.0, "EUR"), 750.0);
        assert!((table.convert_code(1000.0, "usd") - 2.1).abs() < 1e-12);
    }

    #[test]
    fn from_rates_drops_unusable_entries_and_pins_base() {
        let table = RateTable::from_rates(
            Currency::Kzt,
            [
                (Currency::Kzt, 3.0),
                (Currency::Rub, -1.0),
                (Currency::Usd, f64::NAN),
            ],
        );
        assert_eq!(table.get(Currency::Kzt), Some(1.0));
        assert_eq!(table.get(Currency::Rub), None);
        assert_eq!(table.get(Currency::Usd), None);
    }

    #[test]
    fn live_rates_replace_known_codes() {
        let mut table = RateTable::fallback();
        let updated = table.apply_live(&live(&[("KZT", 1.0), ("RUB", 0.18), ("USD", 0.0019)]));
        assert_eq!(updated, 2);
        assert_eq!(table.get(Currency::Rub), Some(0.18));
        assert_eq!(table.get(Currency::Usd), Some(0.0019));
        assert_eq!(table.get(Currency::Kzt), Some(1.0));
    }

    #[test]
    fn missing_live_key_keeps_last_known_rate() {
        let mut table = RateTable::fallback();
        table.apply_live(&live(&[("RUB", 0.17)]));
        let updated = table.apply_live(&live(&[("USD", 0.002), ("EUR", 0.0019)]));
        assert_eq!(updated, 1);
        assert_eq!(table.get(Currency::Rub), Some(0.17));
        assert_eq!(table.get(Currency::Usd), Some(0.002));
    }

    #[test]
    fn unusable_live_values_are_ignored() {
        let mut table = RateTable::fallback();
        let updated = table.apply_live(&live(&[("RUB", 0.0), ("USD", f64::INFINITY)]));
        assert_eq!(updated, 0);
        assert_eq!(table, RateTable::fallback());
    }

    #[test]
    fn live_base_value_never_overrides_one() {
        let mut table = RateTable::fallback();
        table.apply_live(&live(&[("KZT", 2.0)]));
        assert_eq!(table.get(Currency::Kzt), Some(1.0));
    }
}
