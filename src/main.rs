use actix_cors::Cors;
use actix_web::{http::header, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skv_invoicing::config::Config;
use skv_invoicing::middleware::{ErrorLogger, RequestId};
use skv_invoicing::AppState;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "skv_invoicing={level},actix_web=info",
            level = config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config
        .validate()
        .context("Configuration validation failed")?;

    let state = AppState::from_config(&config).context("Failed to build application state")?;

    tracing::info!(
        env = %config.app.env,
        bind = %config.server.bind_address(),
        workers = config.server.workers,
        chat_provider = state.chat_provider(),
        "Starting SKV invoicing service"
    );

    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(cors(cors_origin.as_deref()))
            .configure(|cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await
    .context("HTTP server terminated")?;

    Ok(())
}
