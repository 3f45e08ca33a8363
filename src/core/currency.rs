use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::locale::Locale;

/// Invoice currencies, one per supported jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// UAE Dirham
    AED,
    /// Indian Rupee
    INR,
    /// Euro (Hungarian invoices are issued in EUR)
    EUR,
    /// Pound Sterling
    GBP,
}

impl Currency {
    /// Display scale. All four currencies print two fraction digits.
    pub fn scale(&self) -> u32 {
        2
    }

    /// Symbol used by the given locale. Locales without a native symbol for
    /// the currency fall back to the ISO code.
    pub fn symbol(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Currency::INR, Locale::EnIn) => "₹",
            (Currency::EUR, _) => "€",
            (Currency::GBP, _) => "£",
            (Currency::INR, _) => "INR",
            (Currency::AED, _) => "AED",
        }
    }

    /// Rounds half away from zero to the display scale
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats an amount for display with locale grouping, decimal mark and
    /// symbol placement. Presentation only; never feed the result back into
    /// a calculation.
    pub fn format_amount(&self, amount: Decimal, locale: Locale) -> String {
        let rounded = self.round(amount);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let fixed = format!("{:.width$}", rounded.abs(), width = self.scale() as usize);
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut number = locale.group_digits(whole);
        if !fraction.is_empty() {
            number.push(locale.decimal_separator());
            number.push_str(fraction);
        }

        let symbol = self.symbol(locale);
        let sign = if negative { "-" } else { "" };
        let alphabetic = symbol.chars().all(|c| c.is_ascii_alphabetic());

        match locale {
            Locale::HuHu => format!("{sign}{number}\u{a0}{symbol}"),
            _ if alphabetic => format!("{sign}{symbol}\u{a0}{number}"),
            _ => format!("{sign}{symbol}{number}"),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::AED => write!(f, "AED"),
            Currency::INR => write!(f, "INR"),
            Currency::EUR => write!(f, "EUR"),
            Currency::GBP => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AED" => Ok(Currency::AED),
            "INR" => Ok(Currency::INR),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

/// Formats `amount` in `currency` for `locale`
pub fn format_currency(amount: Decimal, currency: Currency, locale: Locale) -> String {
    currency.format_amount(amount, locale)
}
