use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::auth::CredencialesRequest,
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// POST /api/auth/login - Authenticate and obtain a bearer token
///
/// # Returns
/// - `200 OK`: `{token, username, rol}`
/// - `401 Unauthorized`: Unknown user, inactive account, or wrong password,
///   always with the same generic message
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredencialesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt, &state.hasher);
    let token = auth_service.login(&body.username, &body.password).await?;

    Ok((StatusCode::OK, Json(token)))
}

/// POST /api/auth/register - Create a customer account and log it in
///
/// # Returns
/// - `200 OK`: `{token, username, rol}` for the new account
/// - `400 Bad Request`: Username under 3 or password under 4 characters
/// - `409 Conflict`: Username already taken (case-insensitive)
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredencialesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.jwt, &state.hasher);
    let token = auth_service
        .register(&body.username, &body.password)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}
