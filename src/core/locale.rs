use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const NBSP: char = '\u{a0}';

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const HUNGARIAN_MONTHS: [&str; 12] = [
    "január", "február", "március", "április", "május", "június", "július", "augusztus",
    "szeptember", "október", "november", "december",
];

/// Display locales used by the four supported jurisdictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-AE")]
    EnAe,
    #[serde(rename = "en-IN")]
    EnIn,
    #[serde(rename = "hu-HU")]
    HuHu,
    #[serde(rename = "en-GB")]
    EnGb,
}

impl Locale {
    /// BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnAe => "en-AE",
            Locale::EnIn => "en-IN",
            Locale::HuHu => "hu-HU",
            Locale::EnGb => "en-GB",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::HuHu => ',',
            _ => '.',
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::HuHu => NBSP,
            _ => ',',
        }
    }

    /// Inserts group separators into a string of ASCII digits.
    ///
    /// en-IN groups the last three digits, then pairs (12,34,567);
    /// every other locale groups by thousands.
    pub fn group_digits(&self, digits: &str) -> String {
        let sep = self.group_separator();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 2);

        for (idx, ch) in digits.chars().enumerate() {
            let remaining = len - idx;
            if idx > 0 && self.is_group_boundary(remaining) {
                out.push(sep);
            }
            out.push(ch);
        }

        out
    }

    fn is_group_boundary(&self, remaining: usize) -> bool {
        match self {
            Locale::EnIn => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
            _ => remaining % 3 == 0,
        }
    }

    /// Long human-readable date, e.g. "5 January 2025" or "2025. január 5."
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            Locale::HuHu => format!(
                "{}. {} {}.",
                date.year(),
                HUNGARIAN_MONTHS[month],
                date.day()
            ),
            _ => format!("{} {} {}", date.day(), ENGLISH_MONTHS[month], date.year()),
        }
    }

    /// Short numeric date, e.g. "05/01/2025" or "2025. 01. 05."
    pub fn format_short_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::HuHu => date.format("%Y. %m. %d.").to_string(),
            _ => date.format("%d/%m/%Y").to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Long document date for an instant, taken on its UTC calendar day
pub fn format_date(date: DateTime<Utc>, locale: Locale) -> String {
    locale.format_long_date(date.date_naive())
}

pub fn format_short_date(date: DateTime<Utc>, locale: Locale) -> String {
    locale.format_short_date(date.date_naive())
}
