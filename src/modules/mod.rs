use actix_web::web;

use crate::middleware::RateLimiter;

pub mod catalog;
pub mod chat;
pub mod countries;
pub mod health;
pub mod invoices;
pub mod taxes;

/// Register every module's routes. Only `/chat` sits behind the limiter.
pub fn configure(cfg: &mut web::ServiceConfig, chat_limiter: RateLimiter) {
    health::configure(cfg);
    chat::controllers::configure(cfg, chat_limiter);
    invoices::configure(cfg);
    taxes::configure(cfg);
    countries::configure(cfg);
    catalog::configure(cfg);
}
