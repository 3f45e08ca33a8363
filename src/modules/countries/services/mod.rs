pub mod country_catalog;

pub use country_catalog::{all_countries, country, country_from_subdomain, lookup};
