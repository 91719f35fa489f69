use chrono::{DateTime, Utc};
use entity::pedido::EstadoPedido;
use serde::{Deserialize, Serialize};

/// JSON request body for `POST /api/orders`.
///
/// The multipart variant of the endpoint carries the same text fields as form
/// parts plus repeated `archivos` file parts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePedidoRequest {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub servicio: String,
    #[serde(default)]
    pub detalles: String,
    pub fecha_pref: Option<String>,
    pub origen: Option<String>,
    pub archivos_json: Option<String>,
}

/// Query string for the admin order list: `?estado=&search=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PedidoListQuery {
    pub estado: Option<String>,
    pub search: Option<String>,
}

/// Request body for `PATCH /api/orders/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEstadoRequest {
    #[serde(default)]
    pub estado: String,
}

/// Request body for `PATCH /api/orders/{id}/admin`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdminDataRequest {
    pub precio: Option<String>,
    pub comentario: Option<String>,
}

/// Request body for `PATCH /api/orders/{id}/user-response`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserResponseRequest {
    pub decision: Option<String>,
    pub comentario: Option<String>,
}

/// Order projection returned by every order endpoint.
///
/// `archivos_json` is passed through as stored; the front-end owns its shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PedidoDto {
    pub id: i32,
    pub nombre: String,
    pub telefono: String,
    pub servicio: String,
    pub detalles: String,
    pub fecha_pref: Option<String>,
    pub estado: EstadoPedido,
    pub origen: String,
    pub creado_en: DateTime<Utc>,
    pub archivos_json: Option<String>,
    pub usuario_id: Option<i32>,
}
