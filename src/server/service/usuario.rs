//! Account management business logic for the admin endpoints.

use entity::usuario::Rol;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::usuario::UsuarioRepository,
    error::AppError,
    model::usuario::{CreateUsuarioParam, Usuario},
    service::auth::password::PasswordHasher,
};

/// Service providing account management operations.
pub struct UsuarioService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
}

impl<'a> UsuarioService<'a> {
    /// Creates a new UsuarioService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `hasher` - Password hashing service
    ///
    /// # Returns
    /// - `UsuarioService` - New service instance
    pub fn new(db: &'a DatabaseConnection, hasher: &'a PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Retrieves all accounts, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Usuario>)` - All accounts
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Usuario>, AppError> {
        Ok(UsuarioRepository::new(self.db).get_all().await?)
    }

    /// Creates an account on behalf of an admin.
    ///
    /// Unlike self-registration there are no length rules, only presence and
    /// uniqueness. The new account gets the user role.
    ///
    /// # Arguments
    /// - `username` - Requested username
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok(Usuario)` - The created account
    /// - `Err(AppError::BadRequest)` - Missing username or password
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn create(&self, username: &str, password: &str) -> Result<Usuario, AppError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Usuario y contraseña son requeridos.".to_string(),
            ));
        }

        let repository = UsuarioRepository::new(self.db);

        if repository.exists_username(username).await? {
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

        tracing::info!(username = %usuario.username, "Account created by admin");

        Ok(usuario)
    }

    /// Deletes an account.
    ///
    /// Admin accounts cannot be deleted through this path. Orders owned by the
    /// account survive with their owner cleared.
    ///
    /// # Arguments
    /// - `id` - Account id
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::BadRequest)` - The account is an admin
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repository = UsuarioRepository::new(self.db);

        let usuario = repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if usuario.rol == Rol::Admin {
            return Err(AppError::BadRequest(
                "No puedes eliminar un admin.".to_string(),
            ));
        }

        repository.delete(id).await?;
        tracing::info!(username = %usuario.username, "Account deleted");

        Ok(())
    }
}
