//! Order data repository for database operations.
//!
//! This module provides the `PedidoRepository` for managing order records:
//! creation, filtered listing, per-owner listing, status and metadata updates,
//! and deletion. Entities are converted to domain models at this boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::{Condition, Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::pedido::EstadoPedido;

use crate::server::model::pedido::{CreatePedidoParam, ListPedidosParam, Pedido};

/// Repository providing database operations for order management.
pub struct PedidoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PedidoRepository<'a> {
    /// Creates a new PedidoRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PedidoRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order from parameter model.
    ///
    /// New orders always start in `Pendiente`.
    ///
    /// # Arguments
    /// - `param` - Order parameters, already trimmed and defaulted
    ///
    /// # Returns
    /// - `Ok(Pedido)` - The created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePedidoParam) -> Result<Pedido, DbErr> {
        let entity = entity::pedido::ActiveModel {
            nombre: ActiveValue::Set(param.nombre),
            telefono: ActiveValue::Set(param.telefono),
            servicio: ActiveValue::Set(param.servicio),
            detalles: ActiveValue::Set(param.detalles),
            fecha_pref: ActiveValue::Set(param.fecha_pref),
            estado: ActiveValue::Set(EstadoPedido::Pendiente),
            origen: ActiveValue::Set(param.origen),
            creado_en: ActiveValue::Set(Utc::now()),
            archivos_json: ActiveValue::Set(param.archivos_json),
            usuario_id: ActiveValue::Set(param.usuario_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pedido::from_entity(entity))
    }

    /// Finds an order by its id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(Some(Pedido))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pedido>, DbErr> {
        let entity = entity::prelude::Pedido::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Pedido::from_entity))
    }

    /// Retrieves all orders matching the given filters, newest first.
    ///
    /// The status filter is an exact match. The search text is lowercased and
    /// substring-matched against nombre, telefono, and servicio.
    ///
    /// # Arguments
    /// - `param` - Optional status and search filters
    ///
    /// # Returns
    /// - `Ok(Vec<Pedido>)` - Matching orders ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, param: ListPedidosParam) -> Result<Vec<Pedido>, DbErr> {
        let mut query = entity::prelude::Pedido::find();

        if let Some(estado) = param.estado {
            query = query.filter(entity::pedido::Column::Estado.eq(estado));
        }

        if let Some(search) = param.search.filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim().to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::pedido::Column::Nombre)))
                            .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::pedido::Column::Telefono)))
                            .like(&pattern),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::pedido::Column::Servicio)))
                            .like(&pattern),
                    ),
            );
        }

        let entities = query
            .order_by_desc(entity::pedido::Column::CreadoEn)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pedido::from_entity).collect())
    }

    /// Retrieves the orders owned by one account, newest first.
    ///
    /// # Arguments
    /// - `usuario_id` - Owning account id
    ///
    /// # Returns
    /// - `Ok(Vec<Pedido>)` - The account's orders ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_usuario(&self, usuario_id: i32) -> Result<Vec<Pedido>, DbErr> {
        let entities = entity::prelude::Pedido::find()
            .filter(entity::pedido::Column::UsuarioId.eq(usuario_id))
            .order_by_desc(entity::pedido::Column::CreadoEn)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pedido::from_entity).collect())
    }

    /// Updates an order's status.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `estado` - New status
    ///
    /// # Returns
    /// - `Ok(Some(Pedido))` - Updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_estado(
        &self,
        id: i32,
        estado: EstadoPedido,
    ) -> Result<Option<Pedido>, DbErr> {
        let Some(entity) = entity::prelude::Pedido::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.estado = ActiveValue::Set(estado);
        let updated = active.update(self.db).await?;

        Ok(Some(Pedido::from_entity(updated)))
    }

    /// Replaces an order's stored metadata blob text.
    ///
    /// The whole column is rewritten; concurrent edits are last-write-wins.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `archivos_json` - New blob text, or None to clear
    ///
    /// # Returns
    /// - `Ok(Some(Pedido))` - Updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_archivos_json(
        &self,
        id: i32,
        archivos_json: Option<String>,
    ) -> Result<Option<Pedido>, DbErr> {
        let Some(entity) = entity::prelude::Pedido::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.archivos_json = ActiveValue::Set(archivos_json);
        let updated = active.update(self.db).await?;

        Ok(Some(Pedido::from_entity(updated)))
    }

    /// Deletes an order by id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(true)` - Order existed and was deleted
    /// - `Ok(false)` - No order with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pedido::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
