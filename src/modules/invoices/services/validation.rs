//! Input validators for invoice assembly.
//!
//! Both validators collect every violation instead of stopping at the first,
//! so a form can show the whole list in one pass. An empty list means valid.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::modules::invoices::models::{ClientInfo, InvoiceLineItem};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Simple `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_invoice_items(items: &[InvoiceLineItem]) -> Vec<String> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push("At least one item is required".to_string());
    }

    for (index, item) in items.iter().enumerate() {
        let position = index + 1;
        if item.description.trim().is_empty() {
            errors.push(format!("Item {}: Description is required", position));
        }
        if item.quantity() <= Decimal::ZERO {
            errors.push(format!("Item {}: Quantity must be greater than 0", position));
        }
        if item.unit_price() < Decimal::ZERO {
            errors.push(format!("Item {}: Unit price cannot be negative", position));
        }
        if item.line_total().is_none() {
            errors.push(format!("Item {}: Line total is out of range", position));
        }
    }

    errors
}

pub fn validate_client_info(client: &ClientInfo) -> Vec<String> {
    let mut errors = Vec::new();

    if client.name.trim().is_empty() {
        errors.push("Client name is required".to_string());
    }

    if client.email.trim().is_empty() {
        errors.push("Client email is required".to_string());
    } else if !is_valid_email(&client.email) {
        errors.push("Valid email address is required".to_string());
    }

    if !client.address.iter().any(|line| !line.trim().is_empty()) {
        errors.push("Client address is required".to_string());
    }

    if client.country.trim().is_empty() {
        errors.push("Client country is required".to_string());
    }

    errors
}
