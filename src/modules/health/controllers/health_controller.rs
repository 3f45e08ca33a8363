use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::{countries, taxes};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    /// Number of compiled-in tax profiles
    pub tax_profiles: usize,
    pub countries: usize,
}

/// GET /health - Liveness probe
///
/// The service has no external dependencies to probe; the static tables are
/// touched so a broken build fails here rather than on the first invoice.
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            tax_profiles: taxes::services::tax_config::all_profiles().len(),
            countries: countries::services::all_countries().len(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
