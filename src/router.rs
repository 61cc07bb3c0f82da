use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use roster_config::CorsConfig;
use roster_core::panic_response;
use roster_observability::logging_middleware;

use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(init_auth_router())
        .merge(
            init_users_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .with_state(state.clone());

    apply_middleware(routes, &state)
}

/// Wraps `router` in the shared interceptor chain. Outermost first: request
/// logging, CORS, panic guard.
pub fn apply_middleware(router: Router, state: &AppState) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .expose_headers([axum::http::header::LOCATION])
        .allow_credentials(true)
}
