use entity::usuario::Rol;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredencialesRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login/registration response: a bearer token plus the identity
/// the front-end needs to render without decoding the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenDto {
    pub token: String,
    pub username: String,
    pub rol: Rol,
}
