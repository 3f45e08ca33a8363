pub mod service_catalog;

pub use service_catalog::{all_categories, find_offering, services_by_country};
