mod tax_line;
mod tax_profile;

pub use tax_line::TaxLine;
pub use tax_profile::{CountryTaxProfile, TaxRule};
