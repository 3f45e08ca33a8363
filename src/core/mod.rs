pub mod country;
pub mod currency;
pub mod error;
pub mod locale;

pub use country::CountryCode;
pub use currency::{format_currency, Currency};
pub use error::{AppError, Result};
pub use locale::{format_date, format_short_date, Locale};
