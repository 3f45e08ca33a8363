use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::CountryCode;
use crate::modules::invoices::models::InvoiceLineItem;

/// A billable service with its default price in the country's currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub name: &'static str,
    pub price: Decimal,
    pub taxable: bool,
}

impl ServiceOffering {
    /// A single-quantity invoice line prefilled from this offering
    pub fn to_line_item(&self) -> InvoiceLineItem {
        InvoiceLineItem::new(self.name, Decimal::ONE, self.price, self.taxable)
    }
}

/// A category with per-country offerings
#[derive(Debug, Clone)]
pub struct ServiceCategory {
    /// Stable slug, e.g. `company-formation`
    pub id: &'static str,
    pub name: &'static str,
    pub offerings: Vec<(CountryCode, Vec<ServiceOffering>)>,
}

impl ServiceCategory {
    pub fn offerings_for(&self, code: CountryCode) -> Option<&[ServiceOffering]> {
        self.offerings
            .iter()
            .find(|(country, _)| *country == code)
            .map(|(_, offerings)| offerings.as_slice())
    }
}

/// One category's offerings for a single country
#[derive(Debug, Clone, Serialize)]
pub struct ServiceGroup {
    pub id: &'static str,
    pub category: &'static str,
    pub items: &'static [ServiceOffering],
}
