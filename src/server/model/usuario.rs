//! Account domain models and parameters.

use chrono::{DateTime, Utc};
use entity::usuario::Rol;

use crate::model::usuario::UsuarioDto;

/// Login account with role and active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: i32,
    pub username: String,
    /// Argon2id PHC string. Never leaves the server.
    pub password_hash: String,
    pub rol: Rol,
    pub creado_en: DateTime<Utc>,
    pub activo: bool,
}

impl Usuario {
    /// Converts the account domain model to a DTO for API responses.
    ///
    /// The password hash is dropped at this boundary.
    ///
    /// # Returns
    /// - `UsuarioDto` - The converted account DTO
    pub fn into_dto(self) -> UsuarioDto {
        UsuarioDto {
            id: self.id,
            username: self.username,
            rol: self.rol,
            creado_en: self.creado_en,
            activo: self.activo,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Usuario` - The converted account domain model
    pub fn from_entity(entity: entity::usuario::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            rol: entity.rol,
            creado_en: entity.creado_en,
            activo: entity.activo,
        }
    }
}

/// Parameters for creating an account.
///
/// Used by registration, the admin user endpoint, and the bootstrap admin.
/// The password arrives here already hashed.
#[derive(Debug, Clone)]
pub struct CreateUsuarioParam {
    pub username: String,
    pub password_hash: String,
    pub rol: Rol,
}
