//! Order domain models, parameters, and the metadata blob.

use chrono::{DateTime, Utc};
use entity::pedido::EstadoPedido;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{model::pedido::PedidoDto, server::error::AppError};

/// Customer service request.
#[derive(Debug, Clone, PartialEq)]
pub struct Pedido {
    pub id: i32,
    pub nombre: String,
    pub telefono: String,
    pub servicio: String,
    pub detalles: String,
    pub fecha_pref: Option<String>,
    pub estado: EstadoPedido,
    pub origen: String,
    pub creado_en: DateTime<Utc>,
    /// Stored metadata blob as raw JSON text. Decode through
    /// [`PedidoMeta::from_stored`] before mutating.
    pub archivos_json: Option<String>,
    pub usuario_id: Option<i32>,
}

impl Pedido {
    /// Converts the order domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PedidoDto` - The converted order DTO
    pub fn into_dto(self) -> PedidoDto {
        PedidoDto {
            id: self.id,
            nombre: self.nombre,
            telefono: self.telefono,
            servicio: self.servicio,
            detalles: self.detalles,
            fecha_pref: self.fecha_pref,
            estado: self.estado,
            origen: self.origen,
            creado_en: self.creado_en,
            archivos_json: self.archivos_json,
            usuario_id: self.usuario_id,
        }
    }

    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Pedido` - The converted order domain model
    pub fn from_entity(entity: entity::pedido::Model) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            telefono: entity.telefono,
            servicio: entity.servicio,
            detalles: entity.detalles,
            fecha_pref: entity.fecha_pref,
            estado: entity.estado,
            origen: entity.origen,
            creado_en: entity.creado_en,
            archivos_json: entity.archivos_json,
            usuario_id: entity.usuario_id,
        }
    }
}

/// Parameters for creating an order. Controllers pass the raw request
/// fields; the service trims and defaults them before persisting.
#[derive(Debug, Clone)]
pub struct CreatePedidoParam {
    pub nombre: String,
    pub telefono: String,
    pub servicio: String,
    pub detalles: String,
    pub fecha_pref: Option<String>,
    pub origen: String,
    pub archivos_json: Option<String>,
    pub usuario_id: Option<i32>,
}

/// Filters for the admin order list.
#[derive(Debug, Clone, Default)]
pub struct ListPedidosParam {
    /// Exact status match. `None` lists every status.
    pub estado: Option<EstadoPedido>,
    /// Case-insensitive substring matched against nombre, telefono, servicio.
    pub search: Option<String>,
}

/// The order's metadata blob.
///
/// A schemaless JSON document stored in the `archivos_json` column that
/// accumulates negotiation state between admin and customer. Known keys are
/// decoded individually; everything else round-trips untouched through the
/// passthrough map, so a merge never drops keys it does not set. Text fields
/// use double options to distinguish "absent" (key not written) from
/// "explicit null" (key written as `null`).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PedidoMeta {
    /// Customer-uploaded file descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_precio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comentario: Option<Option<String>>,
    /// Admin-uploaded file descriptors, appended to and never rewritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_files: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_decision: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comentario: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_responded_at: Option<String>,
    /// Keys this server does not know about, and known keys holding a value
    /// of an unexpected type. Preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PedidoMeta {
    /// Decodes the stored blob text.
    ///
    /// Absent, blank, or unparseable text yields a fresh blob with an empty
    /// `files` array. A bare top-level array (the oldest stored shape) is
    /// wrapped as `{"files": <array>}`. Anything else that is not an object
    /// is likewise discarded and reinitialized rather than failing the
    /// request. Objects are decoded key by key; a known key holding an
    /// off-type value moves to the passthrough map instead of poisoning the
    /// rest of the blob.
    ///
    /// # Arguments
    /// - `raw` - The stored column text, if any
    ///
    /// # Returns
    /// - `PedidoMeta` - Decoded or freshly initialized blob
    pub fn from_stored(raw: Option<&str>) -> Self {
        let fresh = || Self {
            files: Some(Value::Array(Vec::new())),
            ..Self::default()
        };

        let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
            return fresh();
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(files)) => Self {
                files: Some(Value::Array(files)),
                ..Self::default()
            },
            Ok(Value::Object(map)) => Self::from_object(map),
            _ => fresh(),
        }
    }

    fn from_object(mut map: Map<String, Value>) -> Self {
        Self {
            files: map.remove("files"),
            admin_precio: take_nullable_string(&mut map, "adminPrecio"),
            admin_comentario: take_nullable_string(&mut map, "adminComentario"),
            admin_files: map.remove("adminFiles"),
            user_decision: take_nullable_string(&mut map, "userDecision"),
            user_comentario: take_nullable_string(&mut map, "userComentario"),
            user_responded_at: match map.remove("userRespondedAt") {
                Some(Value::String(stamp)) => Some(stamp),
                Some(other) => {
                    map.insert("userRespondedAt".to_string(), other);
                    None
                }
                None => None,
            },
            extra: map,
        }
    }

    /// Serializes the blob back to column text.
    ///
    /// # Returns
    /// - `Ok(String)` - The JSON text to store
    /// - `Err(AppError::JsonErr)` - Serialization failure
    pub fn to_stored(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Merges the admin price and comment into the blob.
    ///
    /// Blank values are stored as explicit null rather than omitted, so a
    /// cleared price stays visible as cleared.
    ///
    /// # Arguments
    /// - `precio` - Raw price text from the request
    /// - `comentario` - Raw comment text from the request
    pub fn set_admin_data(&mut self, precio: Option<&str>, comentario: Option<&str>) {
        self.admin_precio = Some(non_blank(precio));
        self.admin_comentario = Some(non_blank(comentario));
        // An off-type leftover parked under the same key would serialize the
        // key twice.
        self.extra.remove("adminPrecio");
        self.extra.remove("adminComentario");
    }

    /// Appends admin file descriptors to the `adminFiles` array.
    ///
    /// Previously recorded entries are preserved. A stored non-array value
    /// under that key is replaced by a fresh array without touching sibling
    /// keys.
    ///
    /// # Arguments
    /// - `entries` - Descriptors for the files saved in this request
    pub fn push_admin_files(&mut self, entries: Vec<Value>) {
        let mut files = match self.admin_files.take() {
            Some(Value::Array(existing)) => existing,
            _ => Vec::new(),
        };
        files.extend(entries);
        self.admin_files = Some(Value::Array(files));
    }

    /// Merges the customer's decision and comment into the blob and stamps
    /// the response time.
    ///
    /// # Arguments
    /// - `decision` - Validated decision text (already trimmed)
    /// - `comentario` - Raw comment text from the request
    /// - `responded_at` - Timestamp of this response
    pub fn set_user_response(
        &mut self,
        decision: Option<&str>,
        comentario: Option<&str>,
        responded_at: DateTime<Utc>,
    ) {
        self.user_decision = Some(non_blank(decision));
        self.user_comentario = Some(non_blank(comentario));
        self.user_responded_at = Some(responded_at.to_rfc3339());
        self.extra.remove("userDecision");
        self.extra.remove("userComentario");
        self.extra.remove("userRespondedAt");
    }
}

/// Pops a text key out of the decoded object. A present-but-null value maps
/// to `Some(None)` so it is written back as null instead of silently dropped
/// on the next merge; a value of any other type stays in the object.
fn take_nullable_string(map: &mut Map<String, Value>, key: &str) -> Option<Option<String>> {
    match map.remove(key)? {
        Value::String(text) => Some(Some(text)),
        Value::Null => Some(None),
        other => {
            map.insert(key.to_string(), other);
            None
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
