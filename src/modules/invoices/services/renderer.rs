//! HTML documents for an assembled invoice.
//!
//! Pure templating: every amount and date is formatted here from the raw
//! invoice values, and askama escapes all user-supplied text.

use askama::Template;
use chrono::Datelike;
use rust_decimal::Decimal;

use crate::core::{format_date, Result};
use crate::modules::invoices::models::Invoice;

struct ItemRow<'a> {
    description: &'a str,
    quantity: String,
    unit_price: String,
    line_total: String,
}

struct TaxRow<'a> {
    description: &'a str,
    amount: String,
}

/// Values shared by the document and the email
struct Summary<'a> {
    issue_date: String,
    due_date: String,
    subtotal: String,
    taxes: Vec<TaxRow<'a>>,
    total: String,
    year: i32,
}

impl<'a> Summary<'a> {
    fn of(invoice: &'a Invoice) -> Self {
        let money = |amount: Decimal| invoice.currency.format_amount(amount, invoice.locale);

        Self {
            issue_date: format_date(invoice.issue_date, invoice.locale),
            due_date: format_date(invoice.due_date, invoice.locale),
            subtotal: money(invoice.subtotal),
            taxes: invoice
                .taxes
                .iter()
                .map(|tax| TaxRow {
                    description: &tax.description,
                    amount: money(tax.amount),
                })
                .collect(),
            total: money(invoice.total),
            year: invoice.issue_date.year(),
        }
    }
}

#[derive(Template)]
#[template(path = "invoice_document.html")]
struct InvoiceDocument<'a> {
    invoice: &'a Invoice,
    country_name: &'a str,
    legal_notices: &'a [&'static str],
    client_address: Vec<&'a str>,
    items: Vec<ItemRow<'a>>,
    summary: Summary<'a>,
}

#[derive(Template)]
#[template(path = "invoice_email.html")]
struct InvoiceEmail<'a> {
    invoice: &'a Invoice,
    company_initial: char,
    summary: Summary<'a>,
}

/// Printable invoice document (stand-in for a PDF export)
pub fn render_invoice_document(invoice: &Invoice) -> Result<String> {
    let profile = invoice.tax_profile();
    let money = |amount: Decimal| invoice.currency.format_amount(amount, invoice.locale);

    let document = InvoiceDocument {
        invoice,
        country_name: profile.display_name,
        legal_notices: profile.legal_notices,
        client_address: invoice
            .client
            .address
            .iter()
            .map(|line| line.as_str())
            .filter(|line| !line.trim().is_empty())
            .collect(),
        items: invoice
            .items
            .iter()
            .map(|item| ItemRow {
                description: &item.description,
                quantity: item.quantity().normalize().to_string(),
                unit_price: money(item.unit_price()),
                line_total: item.line_total().map(&money).unwrap_or_default(),
            })
            .collect(),
        summary: Summary::of(invoice),
    };

    Ok(document.render()?)
}

/// HTML body of the invoice notification email
pub fn render_invoice_email(invoice: &Invoice) -> Result<String> {
    let email = InvoiceEmail {
        invoice,
        company_initial: invoice.company.name.chars().next().unwrap_or('S'),
        summary: Summary::of(invoice),
    };

    Ok(email.render()?)
}

/// Subject line of the invoice notification email
pub fn email_subject(invoice: &Invoice) -> String {
    format!(
        "Invoice {} from {}",
        invoice.invoice_number, invoice.company.name
    )
}
