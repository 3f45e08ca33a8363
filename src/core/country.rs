use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Jurisdictions the business invoices and advises in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CountryCode {
    /// United Arab Emirates
    AE,
    /// India
    IN,
    /// Hungary
    HU,
    /// United Kingdom
    GB,
}

impl CountryCode {
    /// Fallback for unknown or empty codes
    pub const DEFAULT: CountryCode = CountryCode::AE;

    pub const ALL: [CountryCode; 4] = [
        CountryCode::AE,
        CountryCode::IN,
        CountryCode::HU,
        CountryCode::GB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::AE => "AE",
            CountryCode::IN => "IN",
            CountryCode::HU => "HU",
            CountryCode::GB => "GB",
        }
    }

    /// Strict parse, case-insensitive, surrounding whitespace ignored
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "AE" => Some(CountryCode::AE),
            "IN" => Some(CountryCode::IN),
            "HU" => Some(CountryCode::HU),
            "GB" => Some(CountryCode::GB),
            _ => None,
        }
    }

    /// Never fails: anything unrecognised resolves to [`CountryCode::DEFAULT`]
    pub fn resolve(code: &str) -> Self {
        Self::parse(code).unwrap_or(Self::DEFAULT)
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(CountryCode::resolve(&raw))
    }
}
