use chrono::{Datelike, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use rust_decimal_macros::dec;
use skv_invoicing::core::{CountryCode, Currency, Locale};
use skv_invoicing::invoices::services::{generate_invoice_number, InvoiceAssembler};
use skv_invoicing::invoices::InvoiceStatus;
use skv_invoicing::taxes::services::tax_config;

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use helpers::*;

/// Invoice assembly tests
///
/// Validates:
/// - Country profile drives currency, locale, payment terms and tax
/// - Due date is exactly 30 days after issue
/// - Invoice numbers follow SKV-{CC}-{YYYYMM}-{NNNN}
/// - Issuer details are copied from the fixed company profile

#[test]
fn test_invoice_fields_per_country() {
    let assembler = InvoiceAssembler::new();
    let issued = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

    let cases = [
        ("AE", Currency::AED, Locale::EnAe, dec!(50)),
        ("IN", Currency::INR, Locale::EnIn, dec!(180)),
        ("HU", Currency::EUR, Locale::HuHu, dec!(270)),
        ("GB", Currency::GBP, Locale::EnGb, dec!(200)),
    ];

    for (code, currency, locale, tax) in cases {
        let invoice = assembler.assemble(
            vec![line_item("Tax Advisory", dec!(1), dec!(1000))],
            client_for(code),
            code,
            None,
            issued,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(invoice.country.as_str(), code);
        assert_eq!(invoice.currency, currency);
        assert_eq!(invoice.locale, locale);
        assert_eq!(invoice.total_tax, tax);
        assert_eq!(invoice.total, dec!(1000) + tax);
        assert_eq!(invoice.payment_terms, tax_config::lookup(code).payment_terms);
    }
}

#[test]
fn test_due_date_is_thirty_days_later() {
    let issued = Utc.with_ymd_and_hms(2024, 12, 15, 23, 59, 59).unwrap();
    let invoice = InvoiceAssembler::new().assemble(
        vec![line_item("VAT Returns", dec!(1), dec!(200))],
        client_for("GB"),
        "GB",
        None,
        issued,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();

    assert_eq!(invoice.due_date - invoice.issue_date, Duration::days(30));
    assert_eq!(invoice.due_date.year(), 2025);
    assert_eq!(invoice.due_date.month(), 1);
    assert_eq!(invoice.due_date.day(), 14);
}

#[test]
fn test_invoice_number_shape() {
    let pattern = Regex::new(r"^SKV-[A-Z]{2}-\d{6}-\d{4}$").unwrap();
    let issued = Utc.with_ymd_and_hms(2025, 11, 30, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        for code in CountryCode::ALL {
            let number = generate_invoice_number(code, issued, &mut rng);
            assert!(pattern.is_match(&number), "bad invoice number {}", number);
            assert!(number.starts_with(&format!("SKV-{}-202511-", code)));
        }
    }
}

#[test]
fn test_unknown_country_invoiced_as_uae() {
    let invoice = InvoiceAssembler::new().create_invoice(
        vec![line_item("ESR Filing", dec!(1), dec!(1000))],
        client_for("US"),
        "US",
        None,
    )
    .unwrap();

    assert_eq!(invoice.country, CountryCode::AE);
    assert!(invoice.invoice_number.starts_with("SKV-AE-"));
    assert_eq!(invoice.currency, Currency::AED);
}

#[test]
fn test_fresh_invoice_defaults() {
    let invoice = InvoiceAssembler::new().create_invoice(
        vec![
            line_item("Work Permit Processing", dec!(2), dec!(1500)),
            exempt_line_item("Stamp duty", dec!(1), dec!(50)),
        ],
        client_for("HU"),
        "HU",
        Some("Net 30".to_string()),
    )
    .unwrap();

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.created_at, invoice.issue_date);
    assert_eq!(invoice.updated_at, invoice.issue_date);
    assert_eq!(invoice.company, tax_config::issuer_company());
    assert_eq!(invoice.subtotal, dec!(3050));
    assert_eq!(invoice.total_tax, dec!(810));
    assert_eq!(invoice.total, dec!(3860));
    assert_eq!(invoice.items.len(), 2);
    assert!(!invoice.id.is_empty());
}

#[test]
fn test_invoice_json_uses_camel_case() {
    let invoice = InvoiceAssembler::new().create_invoice(
        vec![line_item("PAYE Setup", dec!(1), dec!(400))],
        client_for("GB"),
        "GB",
        None,
    )
    .unwrap();

    let json = serde_json::to_value(&invoice).unwrap();
    assert!(json.get("invoiceNumber").is_some());
    assert!(json.get("totalTax").is_some());
    assert_eq!(json["currency"], "GBP");
    assert_eq!(json["locale"], "en-GB");
    assert_eq!(json["status"], "draft");
    assert_eq!(json["items"][0]["lineTotal"], "400");
    assert!(json.get("notes").is_none());
}
