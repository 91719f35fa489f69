//! Order business logic: creation rules, status transitions, metadata merges.

use chrono::Utc;
use entity::pedido::EstadoPedido;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::pedido::PedidoRepository,
    error::{auth::AuthError, AppError},
    model::pedido::{CreatePedidoParam, ListPedidosParam, Pedido, PedidoMeta},
    service::{auth::token::Claims, upload::SavedFile},
};

/// Service providing order operations.
pub struct PedidoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PedidoService<'a> {
    /// Creates a new PedidoService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PedidoService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all orders matching the given filters, newest first.
    ///
    /// # Arguments
    /// - `param` - Optional status and search filters
    ///
    /// # Returns
    /// - `Ok(Vec<Pedido>)` - Matching orders
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self, param: ListPedidosParam) -> Result<Vec<Pedido>, AppError> {
        Ok(PedidoRepository::new(self.db).get_all(param).await?)
    }

    /// Retrieves the caller's own orders, newest first.
    ///
    /// # Arguments
    /// - `usuario_id` - Owning account id
    ///
    /// # Returns
    /// - `Ok(Vec<Pedido>)` - The account's orders
    /// - `Err(AppError)` - Database error
    pub async fn get_mine(&self, usuario_id: i32) -> Result<Vec<Pedido>, AppError> {
        Ok(PedidoRepository::new(self.db)
            .get_by_usuario(usuario_id)
            .await?)
    }

    /// Creates an order from raw request fields.
    ///
    /// Text fields are trimmed; servicio defaults to "Otro" and origen to
    /// "Web" when blank. The preferred date is an opaque front-end string and
    /// is stored as sent. New orders always start pending.
    ///
    /// # Arguments
    /// - `param` - Raw order fields as submitted
    ///
    /// # Returns
    /// - `Ok(Pedido)` - The created order
    /// - `Err(AppError::BadRequest)` - Missing nombre or telefono
    pub async fn create(&self, param: CreatePedidoParam) -> Result<Pedido, AppError> {
        let nombre = param.nombre.trim();
        let telefono = param.telefono.trim();

        if nombre.is_empty() || telefono.is_empty() {
            return Err(AppError::BadRequest(
                "Nombre y telefono son requeridos.".to_string(),
            ));
        }

        let servicio = match param.servicio.trim() {
            "" => "Otro".to_string(),
            s => s.to_string(),
        };
        let origen = match param.origen.trim() {
            "" => "Web".to_string(),
            s => s.to_string(),
        };

        let pedido = PedidoRepository::new(self.db)
            .create(CreatePedidoParam {
                nombre: nombre.to_string(),
                telefono: telefono.to_string(),
                servicio,
                detalles: param.detalles.trim().to_string(),
                fecha_pref: param.fecha_pref,
                origen,
                archivos_json: param.archivos_json,
                usuario_id: param.usuario_id,
            })
            .await?;

        tracing::info!(id = pedido.id, origen = %pedido.origen, "Order created");

        Ok(pedido)
    }

    /// Finds an order or fails with not-found.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(Pedido)` - The order
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn find_required(&self, id: i32) -> Result<Pedido, AppError> {
        PedidoRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Updates an order's status.
    ///
    /// Only the three literal status names are accepted.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `estado` - Raw status text from the request
    ///
    /// # Returns
    /// - `Ok(Pedido)` - Updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::BadRequest)` - Status text not recognized
    pub async fn update_estado(&self, id: i32, estado: &str) -> Result<Pedido, AppError> {
        let repository = PedidoRepository::new(self.db);

        // Existence is checked first so an unknown order gets 404 even when
        // the status text is also bad.
        repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let estado = match estado {
            "Pendiente" => EstadoPedido::Pendiente,
            "Completado" => EstadoPedido::Completado,
            "Cancelado" => EstadoPedido::Cancelado,
            _ => return Err(AppError::BadRequest("Estado invalido.".to_string())),
        };

        let pedido = repository
            .update_estado(id, estado)
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::info!(id, estado = ?pedido.estado, "Order status updated");

        Ok(pedido)
    }

    /// Deletes an order.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(())` - Order deleted
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PedidoRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(id, "Order deleted");

        Ok(())
    }

    /// Merges the admin price and comment into the order's metadata blob.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `precio` - Raw price text, blank clears
    /// - `comentario` - Raw comment text, blank clears
    ///
    /// # Returns
    /// - `Ok(Pedido)` - Updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn update_admin_data(
        &self,
        id: i32,
        precio: Option<&str>,
        comentario: Option<&str>,
    ) -> Result<Pedido, AppError> {
        let repository = PedidoRepository::new(self.db);

        let pedido = repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let mut meta = PedidoMeta::from_stored(pedido.archivos_json.as_deref());
        meta.set_admin_data(precio, comentario);

        let pedido = repository
            .update_archivos_json(id, Some(meta.to_stored()?))
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::info!(id, "Order admin data updated");

        Ok(pedido)
    }

    /// Appends freshly stored admin files to the order's metadata blob.
    ///
    /// Each descriptor is stamped with the upload time before being appended
    /// under `adminFiles`. Existing entries and unrelated keys are preserved.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `files` - Descriptors of the files stored for this request
    ///
    /// # Returns
    /// - `Ok(Pedido)` - Updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::BadRequest)` - The request carried no files
    pub async fn append_admin_files(
        &self,
        id: i32,
        files: Vec<SavedFile>,
    ) -> Result<Pedido, AppError> {
        let repository = PedidoRepository::new(self.db);

        let pedido = repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if files.is_empty() {
            return Err(AppError::BadRequest(
                "Debes adjuntar al menos un archivo.".to_string(),
            ));
        }

        let uploaded_at = Utc::now().to_rfc3339();
        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            let mut entry = serde_json::to_value(file)?;
            if let Value::Object(map) = &mut entry {
                map.insert("uploadedAt".to_string(), Value::String(uploaded_at.clone()));
            }
            entries.push(entry);
        }

        let mut meta = PedidoMeta::from_stored(pedido.archivos_json.as_deref());
        meta.push_admin_files(entries);

        let pedido = repository
            .update_archivos_json(id, Some(meta.to_stored()?))
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::info!(id, count = files.len(), "Admin files attached to order");

        Ok(pedido)
    }

    /// Records the customer's decision on an admin proposal.
    ///
    /// Non-admin callers may only respond to orders they own. The decision,
    /// when present, must be one of the two literal decision texts.
    ///
    /// # Arguments
    /// - `claims` - The caller's validated token claims
    /// - `id` - Order id
    /// - `decision` - Raw decision text from the request
    /// - `comentario` - Raw comment text from the request
    ///
    /// # Returns
    /// - `Ok(Pedido)` - Updated order
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AuthError::AccessDenied)` - Caller does not own the order
    /// - `Err(AppError::BadRequest)` - Decision text not recognized
    pub async fn update_user_response(
        &self,
        claims: &Claims,
        id: i32,
        decision: Option<&str>,
        comentario: Option<&str>,
    ) -> Result<Pedido, AppError> {
        let repository = PedidoRepository::new(self.db);

        let pedido = repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if !claims.is_admin() {
            let caller = claims.usuario_id()?;
            if pedido.usuario_id != Some(caller) {
                return Err(AuthError::AccessDenied(format!(
                    "account {} attempted to respond to order {} it does not own",
                    caller, id
                ))
                .into());
            }
        }

        let decision = decision.map(str::trim).unwrap_or("");
        if !decision.is_empty() && decision != "Aceptado" && decision != "No aceptado" {
            return Err(AppError::BadRequest("Decision invalida.".to_string()));
        }

        let mut meta = PedidoMeta::from_stored(pedido.archivos_json.as_deref());
        meta.set_user_response(Some(decision), comentario, Utc::now());

        let pedido = repository
            .update_archivos_json(id, Some(meta.to_stored()?))
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::info!(id, "Order user response recorded");

        Ok(pedido)
    }
}
