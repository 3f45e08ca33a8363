use rust_decimal::Decimal;

use super::tax_config;
use crate::core::{AppError, Result};
use crate::modules::invoices::models::InvoiceLineItem;
use crate::modules::taxes::models::TaxLine;

pub const AMOUNT_OUT_OF_RANGE: &str = "Invoice amounts are out of range";

fn out_of_range() -> AppError {
    AppError::validation(AMOUNT_OUT_OF_RANGE)
}

fn checked_sum(amounts: impl IntoIterator<Item = Option<Decimal>>) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| amount.and_then(|a| acc.checked_add(a)))
        .ok_or_else(out_of_range)
}

/// Pure invoice arithmetic: line totals, subtotal, tax lines, grand total.
///
/// No rounding happens here; amounts are rounded only when formatted for
/// display. Every operation is checked: an amount that does not fit in a
/// `Decimal` yields [`AppError::Validation`] instead of panicking.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// quantity × unit_price
    pub fn line_total(&self, item: &InvoiceLineItem) -> Result<Decimal> {
        item.quantity()
            .checked_mul(item.unit_price())
            .ok_or_else(out_of_range)
    }

    /// Sum of line totals over all items, taxable or not
    pub fn subtotal(&self, items: &[InvoiceLineItem]) -> Result<Decimal> {
        checked_sum(items.iter().map(InvoiceLineItem::line_total))
    }

    /// Sum of line totals over taxable items only
    pub fn taxable_amount(&self, items: &[InvoiceLineItem]) -> Result<Decimal> {
        checked_sum(
            items
                .iter()
                .filter(|item| item.taxable)
                .map(InvoiceLineItem::line_total),
        )
    }

    /// Tax lines owed for `items` under the rule of `country_code`.
    ///
    /// Empty when nothing taxable is on the invoice; zero-amount lines are
    /// never emitted. At most one line is produced.
    pub fn tax_lines(
        &self,
        items: &[InvoiceLineItem],
        country_code: &str,
    ) -> Result<Vec<TaxLine>> {
        let taxable_amount = self.taxable_amount(items)?;
        if taxable_amount.is_zero() {
            return Ok(Vec::new());
        }

        let rule = &tax_config::lookup(country_code).tax_rule;
        let rate = rule.effective_rate();
        let amount = taxable_amount
            .checked_mul(rate)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(out_of_range)?;

        Ok(vec![TaxLine {
            tax_type: rule.label().to_string(),
            rate,
            amount,
            description: rule.line_description(),
        }])
    }

    pub fn total_tax(&self, tax_lines: &[TaxLine]) -> Result<Decimal> {
        checked_sum(tax_lines.iter().map(|tax| Some(tax.amount)))
    }

    /// subtotal + Σ tax amounts
    pub fn total(&self, subtotal: Decimal, tax_lines: &[TaxLine]) -> Result<Decimal> {
        subtotal
            .checked_add(self.total_tax(tax_lines)?)
            .ok_or_else(out_of_range)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
