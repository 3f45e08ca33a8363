use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::RateLimiter;
use crate::modules::chat::models::ChatRequest;
use crate::modules::chat::services::ChatService;

/// Send a message to the country consultant
/// POST /chat
pub async fn send_message(
    service: web::Data<Arc<ChatService>>,
    req: HttpRequest,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let host = req.connection_info().host().to_string();
    let response = service.reply(request.into_inner(), Some(&host)).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Chat service information
/// GET /chat
pub async fn chat_info(service: web::Data<Arc<ChatService>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "SKV chat API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": service.provider_name(),
        "endpoints": {
            "chat": "/chat (POST)",
        },
    }))
}

/// Configure chat routes behind the chat rate limiter
pub fn configure(cfg: &mut web::ServiceConfig, limiter: RateLimiter) {
    cfg.service(
        web::scope("/chat")
            .wrap(limiter)
            .route("", web::post().to(send_message))
            .route("", web::get().to(chat_info)),
    );
}
