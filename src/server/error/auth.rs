use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed: unknown username, inactive account, or wrong password.
    ///
    /// All three cases map to the same generic message so callers cannot
    /// distinguish which one occurred.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token was present on a request that requires one.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, issuer, or audience validation.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// The bearer token is past its expiry.
    #[error("Expired bearer token")]
    ExpiredToken,

    /// The caller is authenticated but lacks the required role or ownership.
    ///
    /// # Fields
    /// - Server-side description of the denied action, never sent to the client
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential failures carry the deliberately vague Spanish message the
/// front-end displays. Token failures return a bare 401 and role/ownership
/// failures a bare 403; the denial detail is only logged.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid, or expired token; bad credentials
/// - 403 Forbidden - Authenticated caller without the required role or ownership
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    message: "Usuario o contraseña incorrectos.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken | Self::ExpiredToken => {
                StatusCode::UNAUTHORIZED.into_response()
            }
            Self::AccessDenied(detail) => {
                tracing::debug!("Access denied: {}", detail);
                StatusCode::FORBIDDEN.into_response()
            }
        }
    }
}
