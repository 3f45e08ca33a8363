use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use skv_invoicing::core::{format_currency, format_date, Currency, Locale};

/// Display formatting tests
///
/// Validates:
/// - Currency symbols, grouping and decimal marks per locale
/// - Indian lakh/crore grouping
/// - Half-away-from-zero display rounding
/// - Long dates in English and Hungarian

#[test]
fn test_uae_dirham() {
    assert_eq!(
        format_currency(dec!(1234.5), Currency::AED, Locale::EnAe),
        "AED\u{a0}1,234.50"
    );
}

#[test]
fn test_indian_grouping() {
    assert_eq!(
        format_currency(dec!(123456), Currency::INR, Locale::EnIn),
        "₹1,23,456.00"
    );
    assert_eq!(
        format_currency(dec!(12345678.9), Currency::INR, Locale::EnIn),
        "₹1,23,45,678.90"
    );
    assert_eq!(format_currency(dec!(999), Currency::INR, Locale::EnIn), "₹999.00");
}

#[test]
fn test_hungarian_euro() {
    assert_eq!(
        format_currency(dec!(1234.5), Currency::EUR, Locale::HuHu),
        "1\u{a0}234,50\u{a0}€"
    );
}

#[test]
fn test_pound_sterling() {
    assert_eq!(
        format_currency(dec!(1234.567), Currency::GBP, Locale::EnGb),
        "£1,234.57"
    );
    assert_eq!(format_currency(dec!(-5), Currency::GBP, Locale::EnGb), "-£5.00");
    assert_eq!(format_currency(dec!(0.005), Currency::GBP, Locale::EnGb), "£0.01");
}

#[test]
fn test_long_dates() {
    let date = Utc.with_ymd_and_hms(2025, 3, 7, 15, 0, 0).unwrap();

    assert_eq!(format_date(date, Locale::EnGb), "7 March 2025");
    assert_eq!(format_date(date, Locale::EnIn), "7 March 2025");
    assert_eq!(format_date(date, Locale::HuHu), "2025. március 7.");
}
