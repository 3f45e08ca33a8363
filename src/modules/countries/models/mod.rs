mod country;

pub use country::{ContactInfo, Country};
