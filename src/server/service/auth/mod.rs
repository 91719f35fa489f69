//! Authentication business logic: login, registration, tokens, hashing.

pub mod password;
pub mod token;

use entity::usuario::Rol;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::TokenDto,
    server::{
        data::usuario::UsuarioRepository,
        error::{auth::AuthError, AppError},
        model::usuario::CreateUsuarioParam,
        service::auth::{password::PasswordHasher, token::JwtService},
    },
};

/// Service providing login and self-registration.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Token service used to issue bearer tokens
    /// - `hasher` - Password hashing service
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, hasher: &'a PasswordHasher) -> Self {
        Self { db, jwt, hasher }
    }

    /// Authenticates an account and issues a bearer token.
    ///
    /// Unknown usernames, inactive accounts, and wrong passwords all collapse
    /// into the same generic credentials error so the response does not reveal
    /// which part failed.
    ///
    /// # Arguments
    /// - `username` - Exact username as submitted
    /// - `password` - Plain-text password attempt
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Token plus identity for the front-end
    /// - `Err(AuthError::InvalidCredentials)` - Authentication failed
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenDto, AppError> {
        let repository = UsuarioRepository::new(self.db);

        let Some(usuario) = repository.find_active_by_username(username).await? else {
            tracing::debug!(username, "Login rejected: unknown or inactive account");
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = self
            .hasher
            .verify(password.to_string(), usuario.password_hash.clone())
            .await?;
        if !matches {
            tracing::debug!(username, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(&usuario)?;
        tracing::info!(username = %usuario.username, "Account logged in");

        Ok(TokenDto {
            token,
            username: usuario.username,
            rol: usuario.rol,
        })
    }

    /// Registers a new customer account and logs it in.
    ///
    /// The username is trimmed before validation and storage. Duplicates are
    /// rejected case-insensitively. New accounts always get the user role.
    ///
    /// # Arguments
    /// - `username` - Requested username
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Token plus identity for the new account
    /// - `Err(AppError::BadRequest)` - Username under 3 or password under 4 characters
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(&self, username: &str, password: &str) -> Result<TokenDto, AppError> {
        let username = username.trim();

        if username.chars().count() < 3 {
            return Err(AppError::BadRequest(
                "El usuario debe tener al menos 3 caracteres.".to_string(),
            ));
        }
        if password.chars().count() < 4 {
            return Err(AppError::BadRequest(
                "La contraseña debe tener al menos 4 caracteres.".to_string(),
            ));
        }

        let repository = UsuarioRepository::new(self.db);

        if repository.exists_username_ci(username).await? {
            return Err(AppError::Conflict(
                "Ese nombre de usuario ya existe.".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(password.to_string()).await?;
        let usuario = repository
            .create(CreateUsuarioParam {
                username: username.to_string(),
                password_hash,
                rol: Rol::User,
            })
            .await?;

        let token = self.jwt.issue(&usuario)?;
        tracing::info!(username = %usuario.username, "Account registered");

        Ok(TokenDto {
            token,
            username: usuario.username,
            rol: usuario.rol,
        })
    }
}
