//! Static per-country tax table and the fixed issuer profile.
//!
//! Compiled into the binary; nothing here touches disk or network.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::core::{CountryCode, Currency, Locale};
use crate::modules::invoices::models::CompanyInfo;
use crate::modules::taxes::models::{CountryTaxProfile, TaxRule};

static TAX_PROFILES: Lazy<[CountryTaxProfile; 4]> = Lazy::new(|| {
    [
        CountryTaxProfile {
            country_code: CountryCode::AE,
            display_name: "United Arab Emirates",
            currency: Currency::AED,
            locale: Locale::EnAe,
            tax_rule: TaxRule::Vat {
                rate: dec!(5),
                label: "VAT",
                description: "Value Added Tax (5%)",
            },
            payment_terms: "Payment due within 30 days of invoice date",
            legal_notices: &[
                "This invoice is subject to UAE VAT regulations",
                "TRN: 100044161600003",
                "All amounts are in UAE Dirhams (AED)",
            ],
        },
        CountryTaxProfile {
            country_code: CountryCode::IN,
            display_name: "India",
            currency: Currency::INR,
            locale: Locale::EnIn,
            tax_rule: TaxRule::Gst {
                cgst: dec!(9),
                sgst: dec!(9),
                igst: dec!(18),
                label: "GST",
                description: "Goods and Services Tax",
            },
            payment_terms: "Payment due within 30 days of invoice date",
            legal_notices: &[
                "This invoice is subject to Indian GST regulations",
                "GSTIN: 07AAACH7409R1Z5",
                "All amounts are in Indian Rupees (INR)",
                "This is a computer generated invoice",
            ],
        },
        CountryTaxProfile {
            country_code: CountryCode::HU,
            display_name: "Hungary",
            currency: Currency::EUR,
            locale: Locale::HuHu,
            tax_rule: TaxRule::Vat {
                rate: dec!(27),
                label: "ÁFA",
                description: "Általános Forgalmi Adó (27%)",
            },
            payment_terms: "Fizetési határidő: 30 nap",
            legal_notices: &[
                "This invoice complies with Hungarian VAT regulations",
                "EU VAT Number: HU12345678",
                "All amounts are in Euros (EUR)",
                "Magyar számla / Hungarian Invoice",
            ],
        },
        CountryTaxProfile {
            country_code: CountryCode::GB,
            display_name: "United Kingdom",
            currency: Currency::GBP,
            locale: Locale::EnGb,
            tax_rule: TaxRule::Vat {
                rate: dec!(20),
                label: "VAT",
                description: "Value Added Tax (20%)",
            },
            payment_terms: "Payment due within 30 days of invoice date",
            legal_notices: &[
                "This invoice is subject to UK VAT regulations",
                "VAT Registration Number: GB123456789",
                "All amounts are in British Pounds (GBP)",
                "Company Registration Number: 12345678",
            ],
        },
    ]
});

/// Profile for a known country
pub fn profile(code: CountryCode) -> &'static CountryTaxProfile {
    TAX_PROFILES
        .iter()
        .find(|p| p.country_code == code)
        .unwrap_or(&TAX_PROFILES[0])
}

/// Profile for a raw country code. Unknown or empty codes resolve to the
/// UAE profile rather than failing.
pub fn lookup(country_code: &str) -> &'static CountryTaxProfile {
    profile(CountryCode::resolve(country_code))
}

pub fn all_profiles() -> &'static [CountryTaxProfile] {
    TAX_PROFILES.as_slice()
}

/// The issuing company printed on every invoice
pub fn issuer_company() -> CompanyInfo {
    CompanyInfo {
        name: "S K V GLOBAL BUSINESS SERVICES L.L.C".to_string(),
        address: vec![
            "Office 101, Al Daghaya,".to_string(),
            "Gold Souq Deira, Dubai".to_string(),
            "United Arab Emirates".to_string(),
        ],
        email: "Info@skvchatgb.com".to_string(),
        phone: "+971-50-123-4567".to_string(),
        website: Some("https://skvchatgb.com".to_string()),
        tax_number: Some("100044161600003".to_string()),
        registration_number: Some("CN-1234567".to_string()),
    }
}
