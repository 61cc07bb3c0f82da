use crate::modules::auth::controller::generate_token;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/generate-token", post(generate_token))
}
