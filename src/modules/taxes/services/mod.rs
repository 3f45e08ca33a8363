pub mod tax_calculator;
pub mod tax_config;

pub use tax_calculator::TaxCalculator;
pub use tax_config::{all_profiles, issuer_company, lookup, profile};
