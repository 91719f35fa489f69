use chrono::{DateTime, Utc};
use entity::usuario::Rol;
use serde::{Deserialize, Serialize};

/// Account projection returned by the admin user endpoints.
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioDto {
    pub id: i32,
    pub username: String,
    pub rol: Rol,
    pub creado_en: DateTime<Utc>,
    pub activo: bool,
}
