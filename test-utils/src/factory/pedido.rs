//! Pedido factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::pedido::EstadoPedido;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Provides a builder pattern for creating pedido entities with default values
/// that can be overridden as needed for specific test scenarios. Orders are
/// anonymous (no owning account) unless `usuario_id` is set.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pedido::PedidoFactory;
///
/// let pedido = PedidoFactory::new(&db)
///     .nombre("Maria")
///     .estado(EstadoPedido::Completado)
///     .usuario_id(owner.id)
///     .build()
///     .await?;
/// ```
pub struct PedidoFactory<'a> {
    db: &'a DatabaseConnection,
    nombre: String,
    telefono: String,
    servicio: String,
    detalles: String,
    fecha_pref: Option<String>,
    estado: EstadoPedido,
    origen: String,
    creado_en: DateTime<Utc>,
    archivos_json: Option<String>,
    usuario_id: Option<i32>,
}

impl<'a> PedidoFactory<'a> {
    /// Creates a new PedidoFactory with default values.
    ///
    /// Defaults:
    /// - nombre: `"Cliente {id}"` where id is auto-incremented
    /// - telefono: `"5555-{id}"`
    /// - servicio: `"Impresion"`
    /// - detalles: empty
    /// - estado: `EstadoPedido::Pendiente`
    /// - origen: `"Web"`
    /// - creado_en: now
    /// - archivos_json / usuario_id / fecha_pref: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PedidoFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nombre: format!("Cliente {}", id),
            telefono: format!("5555-{}", id),
            servicio: "Impresion".to_string(),
            detalles: String::new(),
            fecha_pref: None,
            estado: EstadoPedido::Pendiente,
            origen: "Web".to_string(),
            creado_en: Utc::now(),
            archivos_json: None,
            usuario_id: None,
        }
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = nombre.into();
        self
    }

    pub fn telefono(mut self, telefono: impl Into<String>) -> Self {
        self.telefono = telefono.into();
        self
    }

    pub fn servicio(mut self, servicio: impl Into<String>) -> Self {
        self.servicio = servicio.into();
        self
    }

    pub fn detalles(mut self, detalles: impl Into<String>) -> Self {
        self.detalles = detalles.into();
        self
    }

    pub fn fecha_pref(mut self, fecha_pref: impl Into<String>) -> Self {
        self.fecha_pref = Some(fecha_pref.into());
        self
    }

    pub fn estado(mut self, estado: EstadoPedido) -> Self {
        self.estado = estado;
        self
    }

    pub fn origen(mut self, origen: impl Into<String>) -> Self {
        self.origen = origen.into();
        self
    }

    pub fn creado_en(mut self, creado_en: DateTime<Utc>) -> Self {
        self.creado_en = creado_en;
        self
    }

    pub fn archivos_json(mut self, archivos_json: impl Into<String>) -> Self {
        self.archivos_json = Some(archivos_json.into());
        self
    }

    pub fn usuario_id(mut self, usuario_id: i32) -> Self {
        self.usuario_id = Some(usuario_id);
        self
    }

    /// Builds and inserts the pedido entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pedido::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pedido::Model, DbErr> {
        entity::pedido::ActiveModel {
            nombre: ActiveValue::Set(self.nombre),
            telefono: ActiveValue::Set(self.telefono),
            servicio: ActiveValue::Set(self.servicio),
            detalles: ActiveValue::Set(self.detalles),
            fecha_pref: ActiveValue::Set(self.fecha_pref),
            estado: ActiveValue::Set(self.estado),
            origen: ActiveValue::Set(self.origen),
            creado_en: ActiveValue::Set(self.creado_en),
            archivos_json: ActiveValue::Set(self.archivos_json),
            usuario_id: ActiveValue::Set(self.usuario_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
///
/// Shorthand for `PedidoFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::pedido::Model)` - Created order entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pedido(db: &DatabaseConnection) -> Result<entity::pedido::Model, DbErr> {
    PedidoFactory::new(db).build().await
}
