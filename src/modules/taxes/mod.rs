pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CountryTaxProfile, TaxLine, TaxRule};
pub use services::TaxCalculator;
