use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::models::{
    CreateInvoiceRequest, Invoice, SendInvoiceRequest, SendInvoiceResponse,
};
use crate::modules::invoices::services::InvoiceService;

/// Assemble a new invoice
/// POST /invoice
pub async fn create_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create_invoice(request.into_inner())?;

    Ok(HttpResponse::Created().json(invoice))
}

/// Download the printable invoice document
/// POST /invoice/pdf
///
/// Returns HTML as an attachment named after the invoice number; a real PDF
/// conversion is out of scope.
pub async fn generate_document(
    service: web::Data<Arc<InvoiceService>>,
    invoice: web::Json<Invoice>,
) -> Result<HttpResponse, AppError> {
    let html = service.render_document(&invoice)?;

    tracing::info!(invoice_number = %invoice.invoice_number, "Invoice document generated");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.html\"", invoice.invoice_number),
        ))
        .body(html))
}

/// Email an invoice to a recipient
/// POST /invoice/email
pub async fn send_invoice_email(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<SendInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let SendInvoiceRequest {
        invoice,
        recipient_email,
    } = request.into_inner();

    let (invoice, recipient) = match (invoice, recipient_email) {
        (Some(invoice), Some(recipient)) if !recipient.trim().is_empty() => (invoice, recipient),
        _ => {
            return Err(AppError::validation(
                "Invoice data and recipient email are required",
            ))
        }
    };

    let details = service.send_invoice(&invoice, &recipient).await?;

    Ok(HttpResponse::Ok().json(SendInvoiceResponse {
        success: true,
        message: "Invoice sent successfully".to_string(),
        details,
    }))
}

/// Mailer service information
/// GET /invoice/email
pub async fn email_service_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Invoice email service is running",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Professional email templates",
            "Invoice summary in email",
            "Country-specific formatting",
        ],
    }))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoice")
            .route("", web::post().to(create_invoice))
            .route("/pdf", web::post().to(generate_document))
            .route("/email", web::post().to(send_invoice_email))
            .route("/email", web::get().to(email_service_info)),
    );
}
