//! Compiled-in country catalog and host-based country detection.

use crate::core::CountryCode;
use crate::modules::countries::models::{ContactInfo, Country};

/// Chat model used when nothing else is configured
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

static COUNTRIES: [Country; 4] = [
    Country {
        code: CountryCode::AE,
        name: "United Arab Emirates",
        language: "en",
        contact: ContactInfo {
            phone: "+971-50-123-4567",
            email: "support-ae@skvchatgb.com",
            whatsapp: "971501234567",
        },
        system_prompt: "You are an expert business consultant for SKV Business Services in the UAE. \
            Focus on VAT (5%), Freezone and Mainland company setup, corporate tax regulations, \
            visa processing and PRO services. Provide accurate, up-to-date information about UAE \
            business regulations, licensing requirements, and compliance procedures. Be \
            professional, helpful, and specific in your responses.",
        model: DEFAULT_CHAT_MODEL,
    },
    Country {
        code: CountryCode::IN,
        name: "India",
        language: "hi",
        contact: ContactInfo {
            phone: "+91-98-7654-3210",
            email: "support-in@skvchatgb.com",
            whatsapp: "919876543210",
        },
        system_prompt: "You are an expert business consultant for SKV Business Services in India. \
            Focus on GST regulations, MCA company incorporation, MSME and UDYAM registration, \
            Import Export Code (IEC), FSSAI licensing, and compliance requirements. Provide \
            detailed guidance on Indian business laws, registration processes, and regulatory \
            compliance. Be knowledgeable about state-specific requirements and recent policy \
            changes.",
        model: DEFAULT_CHAT_MODEL,
    },
    Country {
        code: CountryCode::HU,
        name: "Hungary",
        language: "en",
        contact: ContactInfo {
            phone: "+36-20-123-4567",
            email: "support-hu@skvchatgb.com",
            whatsapp: "36201234567",
        },
        system_prompt: "You are an expert business consultant for SKV Business Services in Hungary. \
            Focus on Kft. (limited liability company) setup, EU VAT regulations, corporate tax \
            requirements, work permits and residency procedures, and business banking in \
            Hungary. Provide comprehensive information about Hungarian business environment, EU \
            regulations, and local compliance requirements.",
        model: DEFAULT_CHAT_MODEL,
    },
    Country {
        code: CountryCode::GB,
        name: "United Kingdom (London)",
        language: "en",
        contact: ContactInfo {
            phone: "+44-7444-123456",
            email: "support-uk@skvchatgb.com",
            whatsapp: "447444123456",
        },
        system_prompt: "You are an expert business consultant for SKV Business Services in the UK \
            (London). Focus on Limited Company (LTD) registration, Companies House filings, HMRC \
            compliance, VAT registration, PAYE systems, and post-Brexit business regulations. \
            Provide detailed guidance on UK business formation, tax obligations, and regulatory \
            requirements.",
        model: DEFAULT_CHAT_MODEL,
    },
];

pub fn country(code: CountryCode) -> &'static Country {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .unwrap_or(&COUNTRIES[0])
}

/// Country for a raw code; unknown or empty codes get the UAE entry
pub fn lookup(code: &str) -> &'static Country {
    country(CountryCode::resolve(code))
}

pub fn all_countries() -> &'static [Country] {
    &COUNTRIES
}

/// Country served by a host such as `hu.skvchatgb.com`.
///
/// Only the first label is considered; a port suffix is ignored. Hosts
/// without a country label (`localhost`, `www.…`) resolve to the default.
pub fn country_from_subdomain(host: &str) -> CountryCode {
    let host = host.split(':').next().unwrap_or_default();
    let label = host.split('.').next().unwrap_or_default();
    CountryCode::resolve(label)
}
