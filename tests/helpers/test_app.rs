// In-process application for HTTP-level tests.
//
// Uses the same route and data wiring as the binary, with the mock chat
// provider and no simulated delays. A macro rather than a function, so the
// service type never has to be spelled out.

#![allow(unused_macros)]

/// Chat quota high enough that only the rate limit tests ever hit it
pub const GENEROUS_CHAT_LIMIT: u32 = 10_000;

macro_rules! init_app {
    () => {
        init_app!($crate::helpers::GENEROUS_CHAT_LIMIT)
    };
    ($chat_limit:expr) => {{
        let state = skv_invoicing::AppState::for_tests($chat_limit)
            .expect("test application state should build");

        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(skv_invoicing::middleware::ErrorLogger)
                .wrap(skv_invoicing::middleware::RequestId)
                .configure(|cfg| state.configure(cfg)),
        )
        .await
    }};
}
