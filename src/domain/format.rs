//! Locale-specific price formatting.
//!
//! Each currency has a fixed policy (symbol, placement, decimals, digit
//! grouping). Formatting is pure and deterministic.

use crate::domain::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// How a currency amount is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// 0 = round half-up to an integer; otherwise fixed-point with this many places
    pub decimals: usize,
    /// Thousands separator for integer output (None = no grouping)
    pub group_separator: Option<char>,
}

impl FormatPolicy {
    /// Used for codes the storefront does not know about
    pub const FALLBACK: FormatPolicy = FormatPolicy {
        symbol: "$",
        position: SymbolPosition::Prefix,
        decimals: 2,
        group_separator: None,
    };

    pub fn for_currency(currency: Currency) -> Self {
        match currency {
            // en-US grouping
            Currency::Kzt => FormatPolicy {
                symbol: currency.symbol(),
                position: SymbolPosition::Suffix,
                decimals: 0,
                group_separator: Some(','),
            },
            // ru-RU grouping uses a no-break space
            Currency::Rub => FormatPolicy {
                symbol: currency.symbol(),
                position: SymbolPosition::Suffix,
                decimals: 0,
                group_separator: Some('\u{a0}'),
            },
            Currency::Usd => FormatPolicy {
                symbol: currency.symbol(),
                position: SymbolPosition::Prefix,
                decimals: 2,
                group_separator: None,
            },
        }
    }

    pub fn apply(&self, amount: f64) -> String {
        let number = if self.decimals == 0 {
            group_digits(round_half_up(amount), self.group_separator)
        } else {
            // `{:.N}` alone rounds exact ties to even
            let scale = 10f64.powi(self.decimals as i32);
            format!("{:.*}", self.decimals, round_half_up(amount * scale) / scale)
        };

        match self.position {
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
            SymbolPosition::Suffix => format!("{}{}", number, self.symbol),
        }
    }
}

/// Format an amount already converted into `currency`.
pub fn format_price(amount: f64, currency: Currency) -> String {
    FormatPolicy::for_currency(currency).apply(amount)
}

/// Format an amount for a textual currency code. Unknown codes fall back to
/// `FormatPolicy::FALLBACK` instead of failing.
pub fn format_price_code(amount: f64, code: &str) -> String {
    match Currency::from_code(code) {
        Some(currency) => format_price(amount, currency),
        None => {
            log::warn!("Unknown currency code '{}', using default price format", code);
            FormatPolicy::FALLBACK.apply(amount)
        }
    }
}

/// Nearest integer, ties rounded towards +∞
fn round_half_up(amount: f64) -> f64 {
    (amount + 0.5).floor()
}

fn group_digits(value: f64, separator: Option<char>) -> String {
    let raw = format!("{:.0}", value);
    let Some(separator) = separator else {
        return raw;
    };

    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        // inf / NaN
        return raw;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_two_decimals_and_prefix_symbol() {
        // 1000 KZT at 0.0021
        assert_eq!(format_price(1000.0 * 0.0021, Currency::Usd), "$2.10");
        assert_eq!(format_price(0.0, Currency::Usd), "$0.00");
        assert_eq!(format_price(5229.0, Currency::Usd), "$5229.00");
    }

    #[test]
    fn usd_ties_round_up() {
        assert_eq!(format_price(0.125, Currency::Usd), "$0.13");
        assert_eq!(format_price(1.125, Currency::Usd), "$1.13");
        assert_eq!(format_price(2.124, Currency::Usd), "$2.12");
        assert_eq!(format_price_code(0.125, "EUR"), "$0.13");
    }

    #[test]
    fn kzt_groups_with_commas_and_appends_symbol() {
        assert_eq!(format_price(1_000_000.0, Currency::Kzt), "1,000,000₸");
        assert_eq!(format_price(999.0, Currency::Kzt), "999₸");
        assert_eq!(format_price(1000.0, Currency::Kzt), "1,000₸");
        assert_eq!(format_price(0.0, Currency::Kzt), "0₸");
    }

    #[test]
    fn rub_groups_with_no_break_space() {
        assert_eq!(format_price(16_000.0, Currency::Rub), "16\u{a0}000₽");
        assert_eq!(format_price(160.0, Currency::Rub), "160₽");
        assert_eq!(
            format_price(1_234_567.0, Currency::Rub),
            "1\u{a0}234\u{a0}567₽"
        );
    }

    #[test]
    fn integer_currencies_round_half_up() {
        assert_eq!(format_price(1499.5, Currency::Kzt), "1,500₸");
        assert_eq!(format_price(1499.49, Currency::Kzt), "1,499₸");
        assert_eq!(format_price(30240.5, Currency::Rub), "30\u{a0}241₽");
    }

    #[test]
    fn unknown_code_falls_back_to_dollar_two_decimals() {
        assert_eq!(format_price_code(12.5, "EUR"), "$12.50");
        assert_eq!(format_price_code(1000.0, "kzt"), "1,000₸");
    }

    #[test]
    fn formatting_is_deterministic() {
        let first = format_price(123_456.789, Currency::Rub);
        let second = format_price(123_456.789, Currency::Rub);
        assert_eq!(first, second);
    }
}
