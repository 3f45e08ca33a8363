use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use skv_invoicing::core::CountryCode;
use skv_invoicing::taxes::services::tax_config;
use skv_invoicing::taxes::TaxCalculator;

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use helpers::*;

/// Property-based tests for tax calculation
///
/// Validates:
/// - Tax applies to taxable lines only, at the country's single rate
/// - total = subtotal + total tax, exactly, with no rounding
/// - Unknown countries are taxed as UAE
/// - No tax line is emitted when nothing is taxable

fn amount(cents: u64) -> Decimal {
    Decimal::from(cents) / Decimal::ONE_HUNDRED
}

#[test]
fn test_uae_vat_five_percent() {
    let calculator = TaxCalculator::new();
    let items = vec![line_item("Mainland Company Setup", dec!(1), dec!(5000))];

    let taxes = calculator.tax_lines(&items, "AE").unwrap();

    assert_eq!(taxes.len(), 1);
    assert_eq!(taxes[0].tax_type, "VAT");
    assert_eq!(taxes[0].rate, dec!(5));
    assert_eq!(taxes[0].amount, dec!(250));
    assert_eq!(taxes[0].description, "Value Added Tax (5%)");
}

#[test]
fn test_india_charges_igst_only() {
    let calculator = TaxCalculator::new();
    let items = vec![line_item("Private Limited Company", dec!(1), dec!(15000))];

    let taxes = calculator.tax_lines(&items, "IN").unwrap();

    assert_eq!(taxes.len(), 1);
    assert_eq!(taxes[0].tax_type, "GST");
    assert_eq!(taxes[0].rate, dec!(18));
    assert_eq!(taxes[0].amount, dec!(2700));
    assert!(taxes[0].description.contains("IGST 18%"));
}

#[test]
fn test_hungary_afa() {
    let calculator = TaxCalculator::new();
    let items = vec![line_item("Kft. Company Formation", dec!(1), dec!(2000))];

    let taxes = calculator.tax_lines(&items, "HU").unwrap();

    assert_eq!(taxes[0].tax_type, "ÁFA");
    assert_eq!(taxes[0].amount, dec!(540));
}

#[test]
fn test_uk_vat_ignores_exempt_lines() {
    let calculator = TaxCalculator::new();
    let items = vec![
        line_item("Limited Company Formation", dec!(1), dec!(500)),
        exempt_line_item("Companies House Fee", dec!(1), dec!(12)),
    ];

    let taxes = calculator.tax_lines(&items, "GB").unwrap();
    let subtotal = calculator.subtotal(&items).unwrap();

    assert_eq!(subtotal, dec!(512));
    assert_eq!(taxes[0].amount, dec!(100));
    assert_eq!(calculator.total(subtotal, &taxes).unwrap(), dec!(612));
}

#[test]
fn test_fractional_amounts_are_not_rounded() {
    let calculator = TaxCalculator::new();
    let items = vec![line_item("Hourly advisory", dec!(1.5), dec!(33.33))];

    let taxes = calculator.tax_lines(&items, "GB").unwrap();

    assert_eq!(calculator.subtotal(&items).unwrap(), dec!(49.995));
    assert_eq!(taxes[0].amount, dec!(9.999));
}

#[test]
fn test_nothing_taxable_means_no_tax_lines() {
    let calculator = TaxCalculator::new();
    let items = vec![exempt_line_item("Government Fees", dec!(1), dec!(300))];

    assert!(calculator.tax_lines(&items, "AE").unwrap().is_empty());
    assert!(calculator.tax_lines(&[], "IN").unwrap().is_empty());
    assert_eq!(calculator.total(dec!(300), &[]).unwrap(), dec!(300));
}

#[test]
fn test_unknown_country_taxed_as_uae() {
    let calculator = TaxCalculator::new();
    let items = vec![line_item("Audit Support", dec!(1), dec!(2000))];

    assert_eq!(
        calculator.tax_lines(&items, "US").unwrap(),
        calculator.tax_lines(&items, "AE").unwrap()
    );
    assert_eq!(calculator.tax_lines(&items, "").unwrap()[0].amount, dec!(100));
}

proptest! {
    #[test]
    fn test_tax_is_rate_times_taxable_amount(
        taxable_cents in proptest::collection::vec(0u64..10_000_000u64, 0..6),
        exempt_cents in proptest::collection::vec(0u64..10_000_000u64, 0..4),
        country_index in 0usize..4,
    ) {
        let country = CountryCode::ALL[country_index];
        let calculator = TaxCalculator::new();

        let mut items: Vec<_> = taxable_cents
            .iter()
            .map(|c| line_item("taxable", Decimal::ONE, amount(*c)))
            .collect();
        items.extend(
            exempt_cents
                .iter()
                .map(|c| exempt_line_item("exempt", Decimal::ONE, amount(*c))),
        );

        let taxable: Decimal = taxable_cents.iter().map(|c| amount(*c)).sum();
        let subtotal = calculator.subtotal(&items).unwrap();
        let taxes = calculator.tax_lines(&items, country.as_str()).unwrap();
        let rate = tax_config::profile(country).tax_rule.effective_rate();

        prop_assert!(taxes.len() <= 1);
        if taxable.is_zero() {
            prop_assert!(taxes.is_empty());
        } else {
            prop_assert_eq!(taxes[0].amount, taxable * rate / Decimal::ONE_HUNDRED);
            prop_assert!(taxes[0].amount > Decimal::ZERO);
        }

        let total = calculator.total(subtotal, &taxes).unwrap();
        prop_assert_eq!(total, subtotal + calculator.total_tax(&taxes).unwrap());
        prop_assert!(total >= subtotal);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals(
        lines in proptest::collection::vec((1u64..100u64, 0u64..1_000_000u64, any::<bool>()), 0..8),
    ) {
        let calculator = TaxCalculator::new();
        let items: Vec<_> = lines
            .iter()
            .map(|(qty, cents, taxable)| {
                skv_invoicing::invoices::InvoiceLineItem::new(
                    "service",
                    Decimal::from(*qty),
                    amount(*cents),
                    *taxable,
                )
            })
            .collect();

        let expected: Decimal = lines
            .iter()
            .map(|(qty, cents, _)| Decimal::from(*qty) * amount(*cents))
            .sum();

        prop_assert_eq!(calculator.subtotal(&items).unwrap(), expected);
        prop_assert!(calculator.taxable_amount(&items).unwrap() <= expected);
    }
}
