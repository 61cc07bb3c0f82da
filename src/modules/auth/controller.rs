use axum::{Json, extract::State};
use tracing::{info, instrument};

use roster_auth::{TOKEN_SUBJECT, issue_token};
use roster_core::AppError;
use roster_models::TokenResponse;

use crate::state::AppState;

/// Mint a bearer token for the fixed test identity. No authentication required.
#[instrument(skip(state))]
pub async fn generate_token(
    State(state): State<AppState>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = issue_token(&state.jwt_config)?;

    info!(
        subject = TOKEN_SUBJECT,
        expires_in = state.jwt_config.token_expiry,
        "Issued bearer token"
    );
    Ok(Json(TokenResponse { token }))
}
