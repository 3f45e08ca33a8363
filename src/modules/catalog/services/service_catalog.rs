//! Default priced services per country, used to prefill invoice lines.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::CountryCode;
use crate::modules::catalog::models::{ServiceCategory, ServiceGroup, ServiceOffering};

fn offer(name: &'static str, price: Decimal) -> ServiceOffering {
    ServiceOffering {
        name,
        price,
        taxable: true,
    }
}

static SERVICE_CATEGORIES: Lazy<Vec<ServiceCategory>> = Lazy::new(|| {
    vec![
        ServiceCategory {
            id: "company-formation",
            name: "Company Formation Services",
            offerings: vec![
                (
                    CountryCode::AE,
                    vec![
                        offer("Mainland Company Setup", dec!(5000)),
                        offer("Freezone Company Setup", dec!(4000)),
                        offer("Offshore Company Setup", dec!(6000)),
                        offer("Business License Renewal", dec!(1500)),
                        offer("Visa Processing", dec!(2000)),
                    ],
                ),
                (
                    CountryCode::IN,
                    vec![
                        offer("Private Limited Company", dec!(15000)),
                        offer("LLP Formation", dec!(12000)),
                        offer("GST Registration", dec!(5000)),
                        offer("MSME Registration", dec!(3000)),
                        offer("IEC Code", dec!(4000)),
                    ],
                ),
                (
                    CountryCode::HU,
                    vec![
                        offer("Kft. Company Formation", dec!(2000)),
                        offer("EU VAT Registration", dec!(800)),
                        offer("Work Permit Processing", dec!(1500)),
                        offer("Bank Account Opening", dec!(1000)),
                        offer("Residence Permit", dec!(2500)),
                    ],
                ),
                (
                    CountryCode::GB,
                    vec![
                        offer("Limited Company Formation", dec!(500)),
                        offer("VAT Registration", dec!(300)),
                        offer("PAYE Setup", dec!(400)),
                        offer("Bank Account Opening", dec!(800)),
                        offer("Companies House Filing", dec!(200)),
                    ],
                ),
            ],
        },
        ServiceCategory {
            id: "compliance",
            name: "Compliance & Tax Services",
            offerings: vec![
                (
                    CountryCode::AE,
                    vec![
                        offer("VAT Return Filing", dec!(800)),
                        offer("Corporate Tax Compliance", dec!(1200)),
                        offer("Audit Support", dec!(2000)),
                        offer("ESR Filing", dec!(1000)),
                    ],
                ),
                (
                    CountryCode::IN,
                    vec![
                        offer("GST Return Filing", dec!(3000)),
                        offer("Income Tax Filing", dec!(5000)),
                        offer("TDS Compliance", dec!(2000)),
                        offer("ROC Compliance", dec!(4000)),
                    ],
                ),
                (
                    CountryCode::HU,
                    vec![
                        offer("Monthly VAT Returns", dec!(300)),
                        offer("Corporate Tax Filing", dec!(800)),
                        offer("Annual Reports", dec!(600)),
                        offer("Statistical Reports", dec!(400)),
                    ],
                ),
                (
                    CountryCode::GB,
                    vec![
                        offer("VAT Returns", dec!(200)),
                        offer("Corporation Tax", dec!(400)),
                        offer("Annual Confirmation", dec!(150)),
                        offer("PAYE Processing", dec!(300)),
                    ],
                ),
            ],
        },
        ServiceCategory {
            id: "consultation",
            name: "Business Consultation",
            offerings: vec![
                (
                    CountryCode::AE,
                    vec![
                        offer("Business Setup Consultation", dec!(500)),
                        offer("Tax Advisory", dec!(800)),
                        offer("Legal Consultation", dec!(1000)),
                    ],
                ),
                (
                    CountryCode::IN,
                    vec![
                        offer("Business Setup Consultation", dec!(2000)),
                        offer("Tax Advisory", dec!(3000)),
                        offer("Legal Consultation", dec!(4000)),
                    ],
                ),
                (
                    CountryCode::HU,
                    vec![
                        offer("Business Setup Consultation", dec!(200)),
                        offer("Tax Advisory", dec!(300)),
                        offer("Legal Consultation", dec!(400)),
                    ],
                ),
                (
                    CountryCode::GB,
                    vec![
                        offer("Business Setup Consultation", dec!(150)),
                        offer("Tax Advisory", dec!(250)),
                        offer("Legal Consultation", dec!(300)),
                    ],
                ),
            ],
        },
    ]
});

pub fn all_categories() -> &'static [ServiceCategory] {
    SERVICE_CATEGORIES.as_slice()
}

/// Offerings of every category that lists the country, in catalog order
pub fn services_by_country(code: CountryCode) -> Vec<ServiceGroup> {
    all_categories()
        .iter()
        .filter_map(|category| {
            category.offerings_for(code).map(|items| ServiceGroup {
                id: category.id,
                category: category.name,
                items,
            })
        })
        .collect()
}

/// Find an offering by exact name within a country's catalog
pub fn find_offering(code: CountryCode, name: &str) -> Option<&'static ServiceOffering> {
    all_categories()
        .iter()
        .filter_map(|category| category.offerings_for(code))
        .flatten()
        .find(|offering| offering.name == name)
}
