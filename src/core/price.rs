//! # Price Formatting
//!
//! Turns a [`Price`] into the currency string shown next to a dish.
//! The locale is fixed at construction (from config) so that formatting
//! is a pure function of the amount.
//!
//! ```text
//! en-US   $1,234.50
//! pt-BR   R$ 1.234,50
//! en-GB   £1,234.50
//! de-DE   1.234,50 €
//! ```
//!
//! Amounts are rounded half away from zero to whole cents, on the shortest
//! decimal form of the `f64` (the digits the API sent), so `1.005` becomes
//! `1.01` even though its binary value sits just below the half cent.

use serde::{Deserialize, Serialize};

use crate::catalog::{Price, PriceError};

/// Non-breaking space, as locale-aware formatters put between symbol and digits.
const NBSP: char = '\u{a0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurrencyLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
}

/// How a locale writes a currency amount.
struct Conventions {
    symbol: &'static str,
    symbol_first: bool,
    spaced: bool,
    group: char,
    decimal: char,
}

impl CurrencyLocale {
    pub const ALL: [CurrencyLocale; 4] = [
        CurrencyLocale::EnUs,
        CurrencyLocale::PtBr,
        CurrencyLocale::EnGb,
        CurrencyLocale::DeDe,
    ];

    /// BCP 47 tag, e.g. `"pt-BR"`.
    pub fn tag(self) -> &'static str {
        match self {
            CurrencyLocale::EnUs => "en-US",
            CurrencyLocale::PtBr => "pt-BR",
            CurrencyLocale::EnGb => "en-GB",
            CurrencyLocale::DeDe => "de-DE",
        }
    }

    /// Parses a locale tag. Case-insensitive, accepts `_` as separator.
    pub fn parse(tag: &str) -> Option<Self> {
        let wanted = tag.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&wanted))
    }

    fn conventions(self) -> Conventions {
        match self {
            CurrencyLocale::EnUs => Conventions {
                symbol: "$",
                symbol_first: true,
                spaced: false,
                group: ',',
                decimal: '.',
            },
            CurrencyLocale::PtBr => Conventions {
                symbol: "R$",
                symbol_first: true,
                spaced: true,
                group: '.',
                decimal: ',',
            },
            CurrencyLocale::EnGb => Conventions {
                symbol: "£",
                symbol_first: true,
                spaced: false,
                group: ',',
                decimal: '.',
            },
            CurrencyLocale::DeDe => Conventions {
                symbol: "€",
                symbol_first: false,
                spaced: true,
                group: '.',
                decimal: ',',
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormatter {
    locale: CurrencyLocale,
}

impl PriceFormatter {
    pub fn new(locale: CurrencyLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> CurrencyLocale {
        self.locale
    }

    pub fn format(&self, price: Price) -> String {
        let conv = self.locale.conventions();

        let (whole, cents) = split_cents(price.amount());
        let digits = group_digits(&whole, conv.group);
        let number = format!("{digits}{}{:02}", conv.decimal, cents);

        let mut out = String::with_capacity(number.len() + conv.symbol.len() + 2);
        if conv.symbol_first {
            out.push_str(conv.symbol);
            if conv.spaced {
                out.push(NBSP);
            }
            out.push_str(&number);
        } else {
            out.push_str(&number);
            if conv.spaced {
                out.push(NBSP);
            }
            out.push_str(conv.symbol);
        }
        out
    }

    /// Formats a raw amount, refusing negative and non-finite input.
    pub fn format_amount(&self, amount: f64) -> Result<String, PriceError> {
        Price::new(amount).map(|price| self.format(price))
    }
}

/// Splits a non-negative amount into whole-unit digits and rounded cents.
///
/// Works on the shortest round-trip decimal string, never on a scaled
/// float, so no second rounding error creeps in.
fn split_cents(amount: f64) -> (String, u8) {
    // `Display` for f64 never uses exponent notation.
    let repr = amount.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut fraction = fraction.bytes().map(|b| b - b'0');
    let tenths = fraction.next().unwrap_or(0);
    let hundredths = fraction.next().unwrap_or(0);
    let round_up = fraction.next().is_some_and(|d| d >= 5);

    let cents = tenths * 10 + hundredths + u8::from(round_up);
    if cents == 100 {
        (increment_digits(whole), 0)
    } else {
        (whole.to_string(), cents)
    }
}

/// Adds one to a string of decimal digits.
fn increment_digits(digits: &str) -> String {
    let mut digits: Vec<char> = digits.chars().collect();
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return digits.into_iter().collect();
        }
    }
    digits.insert(0, '1');
    digits.into_iter().collect()
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(amount: f64) -> Price {
        Price::new(amount).unwrap()
    }

    #[test]
    fn test_en_us_formatting() {
        let fmt = PriceFormatter::new(CurrencyLocale::EnUs);
        assert_eq!(fmt.format(price(42.5)), "$42.50");
        assert_eq!(fmt.format(price(0.0)), "$0.00");
        assert_eq!(fmt.format(price(1234567.891)), "$1,234,567.89");
        assert_eq!(fmt.format(price(999.999)), "$1,000.00");
    }

    #[test]
    fn test_pt_br_formatting() {
        let fmt = PriceFormatter::new(CurrencyLocale::PtBr);
        assert_eq!(fmt.format(price(19.9)), "R$\u{a0}19,90");
        assert_eq!(fmt.format(price(1234.5)), "R$\u{a0}1.234,50");
    }

    #[test]
    fn test_symbol_after_amount() {
        let fmt = PriceFormatter::new(CurrencyLocale::DeDe);
        assert_eq!(fmt.format(price(1234.5)), "1.234,50\u{a0}€");
        let gb = PriceFormatter::new(CurrencyLocale::EnGb);
        assert_eq!(gb.format(price(7.0)), "£7.00");
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        let fmt = PriceFormatter::default();
        assert_eq!(fmt.format(price(0.125)), "$0.13");
        assert_eq!(fmt.format(price(2.5)), "$2.50");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let fmt = PriceFormatter::new(CurrencyLocale::PtBr);
        for amount in [0.0, 0.01, 3.333, 10.0, 99999.995, 123456789.0] {
            let first = fmt.format(price(amount));
            for _ in 0..5 {
                assert_eq!(fmt.format(price(amount)), first);
            }
        }
    }

    #[test]
    fn test_format_amount_rejects_invalid_input() {
        let fmt = PriceFormatter::default();
        assert_eq!(fmt.format_amount(-1.0), Err(PriceError::Negative(-1.0)));
        assert!(matches!(
            fmt.format_amount(f64::NAN),
            Err(PriceError::NonFinite(_))
        ));
        assert_eq!(fmt.format_amount(5.0).as_deref(), Ok("$5.00"));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(CurrencyLocale::parse("pt-BR"), Some(CurrencyLocale::PtBr));
        assert_eq!(CurrencyLocale::parse("pt_br"), Some(CurrencyLocale::PtBr));
        assert_eq!(CurrencyLocale::parse(" EN-us "), Some(CurrencyLocale::EnUs));
        assert_eq!(CurrencyLocale::parse("fr-FR"), None);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("100", ','), "100");
        assert_eq!(group_digits("1000", '.'), "1.000");
        assert_eq!(group_digits("12345678", ','), "12,345,678");
    }

    #[test]
    fn test_half_cents_round_on_written_digits() {
        // None of these is exactly representable; each sits a hair below
        // the half cent in binary and still rounds up.
        let fmt = PriceFormatter::default();
        assert_eq!(fmt.format(price(1.005)), "$1.01");
        assert_eq!(fmt.format(price(1.115)), "$1.12");
        assert_eq!(fmt.format(price(2.675)), "$2.68");
        assert_eq!(fmt.format(price(8.325)), "$8.33");
        assert_eq!(fmt.format(price(1.0049)), "$1.00");
    }

    #[test]
    fn test_rounding_carries_into_whole_units() {
        let fmt = PriceFormatter::new(CurrencyLocale::DeDe);
        assert_eq!(fmt.format(price(9.995)), "10,00\u{a0}€");
        assert_eq!(fmt.format(price(99999.999)), "100.000,00\u{a0}€");
        assert_eq!(increment_digits("199"), "200");
        assert_eq!(increment_digits("999"), "1000");
    }

    #[test]
    fn test_huge_amounts_keep_every_digit() {
        let fmt = PriceFormatter::default();
        assert_eq!(fmt.format(price(1e21)), "$1,000,000,000,000,000,000,000.00");
    }
}
