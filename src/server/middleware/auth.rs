use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::token::{Claims, JwtService},
};

pub enum Permission {
    Admin,
}

/// Bearer token guard for protected endpoints.
///
/// Controllers construct one per request from the shared token service and the
/// request headers, then call [`require`](AuthGuard::require) with the
/// permissions the endpoint needs.
pub struct AuthGuard<'a> {
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { jwt, headers }
    }

    /// Validates the bearer token and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold
    ///
    /// # Returns
    /// - `Ok(Claims)` - The caller's validated claims
    /// - `Err(AuthError::MissingToken)` - No Authorization header or not a Bearer scheme
    /// - `Err(AuthError::InvalidToken | AuthError::ExpiredToken)` - Token rejected
    /// - `Err(AuthError::AccessDenied)` - Valid token without a required permission
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let claims = self.claims()?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin() {
                        return Err(AuthError::AccessDenied(format!(
                            "account {} attempted an admin-only operation",
                            claims.sub
                        ))
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }

    /// Validates the bearer token when one is present.
    ///
    /// Used by endpoints that work anonymously but attach ownership when the
    /// caller is logged in. An invalid or expired token is treated the same as
    /// no token.
    ///
    /// # Returns
    /// - `Some(Claims)` - A valid token was presented
    /// - `None` - No token, or the token failed validation
    pub fn optional(&self) -> Option<Claims> {
        self.claims().ok()
    }

    fn claims(&self) -> Result<Claims, AuthError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        self.jwt.validate(token.trim())
    }
}
