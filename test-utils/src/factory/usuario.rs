//! Usuario factory for creating test account entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::usuario::Rol;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating usuario entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::usuario::UsuarioFactory;
///
/// let admin = UsuarioFactory::new(&db)
///     .username("ciberzone")
///     .rol(Rol::Admin)
///     .build()
///     .await?;
/// ```
pub struct UsuarioFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    rol: Rol,
    creado_en: DateTime<Utc>,
    activo: bool,
}

impl<'a> UsuarioFactory<'a> {
    /// Creates a new UsuarioFactory with default values.
    ///
    /// Defaults:
    /// - username: `"usuario{id}"` where id is auto-incremented
    /// - password_hash: `"hash-{id}"` (not a real argon2 hash)
    /// - rol: `Rol::User`
    /// - creado_en: now
    /// - activo: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UsuarioFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("usuario{}", id),
            password_hash: format!("hash-{}", id),
            rol: Rol::User,
            creado_en: Utc::now(),
            activo: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn rol(mut self, rol: Rol) -> Self {
        self.rol = rol;
        self
    }

    pub fn creado_en(mut self, creado_en: DateTime<Utc>) -> Self {
        self.creado_en = creado_en;
        self
    }

    pub fn activo(mut self, activo: bool) -> Self {
        self.activo = activo;
        self
    }

    /// Builds and inserts the usuario entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::usuario::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::usuario::Model, DbErr> {
        entity::usuario::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            rol: ActiveValue::Set(self.rol),
            creado_en: ActiveValue::Set(self.creado_en),
            activo: ActiveValue::Set(self.activo),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `UsuarioFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::usuario::Model)` - Created account entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_usuario(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).build().await
}
