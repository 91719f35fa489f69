//! JWT issuance and validation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use entity::usuario::Rol;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::usuario::Usuario,
    util::parse::parse_i32_from_string,
};

/// Tokens are valid for 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

/// Bearer token claims.
///
/// `sub` carries the account id as a string; issuer and audience are enforced
/// during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub rol: Rol,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
}

impl Claims {
    /// Parses the account id out of the subject claim.
    ///
    /// # Returns
    /// - `Ok(i32)` - The caller's account id
    /// - `Err(AppError::InternalErr)` - The subject claim is not a numeric id
    pub fn usuario_id(&self) -> Result<i32, AppError> {
        parse_i32_from_string(&self.sub)
    }

    pub fn is_admin(&self) -> bool {
        self.rol == Rol::Admin
    }
}

/// JWT service for generating and validating bearer tokens.
///
/// Signs with a symmetric HS256 key. Cheap to clone; the key material is
/// reference-counted.
#[derive(Clone)]
pub struct JwtService {
    secret: Arc<String>,
    issuer: Arc<String>,
    audience: Arc<String>,
}

impl JwtService {
    /// Creates a new JWT service.
    ///
    /// # Arguments
    /// - `secret` - Symmetric signing key
    /// - `issuer` - Issuer claim written and enforced
    /// - `audience` - Audience claim written and enforced
    ///
    /// # Returns
    /// - `JwtService` - New service instance
    pub fn new(secret: String, issuer: String, audience: String) -> Self {
        Self {
            secret: Arc::new(secret),
            issuer: Arc::new(issuer),
            audience: Arc::new(audience),
        }
    }

    /// Issues a signed token for an account, valid for 7 days.
    ///
    /// # Arguments
    /// - `usuario` - The authenticated account
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalError)` - Encoding failure
    pub fn issue(&self, usuario: &Usuario) -> Result<String, AppError> {
        let exp = Utc::now() + Duration::days(TOKEN_TTL_DAYS);
        let claims = Claims {
            sub: usuario.id.to_string(),
            name: usuario.username.clone(),
            rol: usuario.rol,
            iss: self.issuer.as_ref().clone(),
            aud: self.audience.as_ref().clone(),
            exp: exp.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to encode JWT: {}", e)))
    }

    /// Validates a token's signature, issuer, audience, and expiry.
    ///
    /// # Arguments
    /// - `token` - Encoded bearer token
    ///
    /// # Returns
    /// - `Ok(Claims)` - Validated claims
    /// - `Err(AuthError::ExpiredToken)` - Token past its expiry
    /// - `Err(AuthError::InvalidToken)` - Any other validation failure
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            }
        })
    }
}
