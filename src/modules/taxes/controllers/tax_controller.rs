//! Tax configuration endpoints
//!
//! Read-only views of the compiled-in tax table, used by the invoice form to
//! show currency, rate and legal text before an invoice is assembled.

use actix_web::{web, HttpResponse};

use crate::modules::taxes::services::tax_config;

/// List all tax profiles
///
/// GET /taxes
pub async fn list_tax_profiles() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "taxes": tax_config::all_profiles(),
    }))
}

/// Get the tax profile for a country code; unknown codes get the UAE profile
///
/// GET /taxes/{code}
pub async fn get_tax_profile(code: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(tax_config::lookup(&code))
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("", web::get().to(list_tax_profiles))
            .route("/{code}", web::get().to(get_tax_profile)),
    );
}
