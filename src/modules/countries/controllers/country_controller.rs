use actix_web::{web, HttpResponse};

use crate::modules::countries::services::country_catalog;

/// List all countries
///
/// GET /countries
pub async fn list_countries() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "countries": country_catalog::all_countries(),
        "default": crate::core::CountryCode::DEFAULT,
    }))
}

/// GET /countries/{code}
pub async fn get_country(code: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(country_catalog::lookup(&code))
}

/// Configure country routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/countries")
            .route("", web::get().to(list_countries))
            .route("/{code}", web::get().to(get_country)),
    );
}
