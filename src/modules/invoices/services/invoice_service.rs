use std::sync::Arc;

use chrono::Utc;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::invoices::models::{
    CreateInvoiceRequest, EmailReceipt, Invoice, InvoiceLineItem,
};
use crate::modules::invoices::services::invoice_assembler::InvoiceAssembler;
use crate::modules::invoices::services::mailer::{InvoiceMailer, OutgoingEmail};
use crate::modules::invoices::services::{renderer, validation};

/// Service for invoice business logic
pub struct InvoiceService {
    assembler: InvoiceAssembler,
    mailer: Arc<dyn InvoiceMailer>,
}

impl InvoiceService {
    pub fn new(mailer: Arc<dyn InvoiceMailer>) -> Self {
        Self {
            assembler: InvoiceAssembler::new(),
            mailer,
        }
    }

    /// Validate the request and assemble a fresh invoice.
    ///
    /// Every item and client violation is returned together as
    /// [`AppError::InvalidInput`]. The invoice country is the explicit
    /// `country` field, else the client's country, else UAE.
    pub fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<Invoice> {
        let items: Vec<InvoiceLineItem> = request.items.into_iter().map(Into::into).collect();

        let mut errors = validation::validate_invoice_items(&items);
        errors.extend(validation::validate_client_info(&request.client));
        if !errors.is_empty() {
            return Err(AppError::InvalidInput(errors));
        }

        let country_code = request
            .country
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| request.client.country.clone());
        let notes = request.notes.filter(|notes| !notes.trim().is_empty());

        let invoice =
            self.assembler
                .create_invoice(items, request.client, &country_code, notes)?;

        tracing::info!(
            invoice_number = %invoice.invoice_number,
            country = %invoice.country,
            total = %invoice.total,
            "Invoice assembled"
        );

        Ok(invoice)
    }

    /// Render the downloadable HTML document of an invoice
    pub fn render_document(&self, invoice: &Invoice) -> Result<String> {
        if invoice.id.trim().is_empty() {
            return Err(AppError::validation("Invalid invoice data"));
        }

        renderer::render_invoice_document(invoice)
    }

    /// Render the invoice email and hand it to the mailer.
    /// Single attempt; a delivery failure is returned as is.
    pub async fn send_invoice(&self, invoice: &Invoice, recipient: &str) -> Result<EmailReceipt> {
        let recipient = recipient.trim();
        if !validation::is_valid_email(recipient) {
            return Err(AppError::validation("Invalid email address"));
        }

        let email = OutgoingEmail {
            from: invoice.company.email.clone(),
            to: recipient.to_string(),
            subject: renderer::email_subject(invoice),
            html_body: renderer::render_invoice_email(invoice)?,
        };

        self.mailer.send(&email).await.map_err(|e| {
            tracing::error!(
                invoice_number = %invoice.invoice_number,
                recipient = %recipient,
                mailer = self.mailer.name(),
                error = %e,
                "Failed to send invoice email"
            );
            e
        })?;

        tracing::info!(
            invoice_number = %invoice.invoice_number,
            recipient = %recipient,
            mailer = self.mailer.name(),
            "Invoice email sent"
        );

        Ok(EmailReceipt {
            invoice_number: invoice.invoice_number.clone(),
            recipient: recipient.to_string(),
            sent_at: Utc::now(),
        })
    }
}
