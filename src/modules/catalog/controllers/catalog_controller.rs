use actix_web::{web, HttpResponse};

use crate::core::CountryCode;
use crate::modules::catalog::services::service_catalog;
use crate::modules::taxes::services::tax_config;

/// Service catalog for a country, with the currency prices are quoted in.
/// Unknown codes get the UAE catalog.
///
/// GET /catalog/{code}
pub async fn get_catalog(code: web::Path<String>) -> HttpResponse {
    let country = CountryCode::resolve(&code);

    HttpResponse::Ok().json(serde_json::json!({
        "country": country,
        "currency": tax_config::profile(country).currency,
        "categories": service_catalog::services_by_country(country),
    }))
}

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/catalog").route("/{code}", web::get().to(get_catalog)));
}
