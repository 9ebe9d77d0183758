pub mod contact;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::rate_limit::RateLimitState;

/// Build the REST API router. When a limiter is supplied it guards the
/// contact route only — health stays reachable after the contact quota
/// is spent.
pub fn api_router(limiter: Option<RateLimitState>) -> Router {
    let mut router = Router::new().route("/api/contact", post(contact::submit_contact));

    if let Some(limiter) = limiter {
        router = router.route_layer(middleware::from_fn_with_state(
            limiter,
            crate::rate_limit::rate_limit_middleware,
        ));
    }

    router.route("/health", get(crate::health::health_check))
}
