use axum::{
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::pedido::EstadoPedido;

use crate::{
    model::pedido::{
        CreatePedidoRequest, PedidoListQuery, UpdateAdminDataRequest, UpdateEstadoRequest,
        UpdateUserResponseRequest,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pedido::{CreatePedidoParam, ListPedidosParam},
        service::{
            pedido::PedidoService,
            upload::{SavedFile, UploadKind},
        },
        state::AppState,
    },
};

/// GET /api/orders - List orders with optional filters
///
/// Query parameters `estado` and `search`. A blank or `all` estado lists
/// every status; an unrecognized value matches no stored status and yields
/// an empty list. The search text is matched case-insensitively against
/// nombre, telefono, and servicio.
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: JSON array of PedidoDto, newest first
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<PedidoListQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let pedidos = match parse_estado_filter(query.estado.as_deref()) {
        EstadoFilter::NoMatch => Vec::new(),
        filter => {
            let estado = match filter {
                EstadoFilter::Only(estado) => Some(estado),
                _ => None,
            };
            PedidoService::new(&state.db)
                .get_all(ListPedidosParam {
                    estado,
                    search: query.search,
                })
                .await?
        }
    };

    let pedidos_dto: Vec<_> = pedidos.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(pedidos_dto)))
}

/// GET /api/orders/mis-pedidos - List the caller's own orders
///
/// # Authentication
/// Requires a valid bearer token (any role)
///
/// # Returns
/// - `200 OK`: JSON array of PedidoDto owned by the caller, newest first
pub async fn get_mis_pedidos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.jwt, &headers).require(&[])?;
    let usuario_id = claims.usuario_id()?;

    let pedido_service = PedidoService::new(&state.db);
    let pedidos = pedido_service.get_mine(usuario_id).await?;

    let pedidos_dto: Vec<_> = pedidos.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(pedidos_dto)))
}

/// POST /api/orders - Create an order
///
/// Accepts either a JSON body or a multipart form with the same text fields
/// plus repeated `archivos` file parts. A valid bearer token attaches
/// ownership; anonymous submissions are accepted without one.
///
/// # Returns
/// - `200 OK`: PedidoDto of the new order
/// - `400 Bad Request`: Missing nombre/telefono, or a file over 50 MB
pub async fn create(
    State(state): State<AppState>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let headers = request.headers().clone();
    let usuario_id = match AuthGuard::new(&state.jwt, &headers).optional() {
        Some(claims) => Some(claims.usuario_id()?),
        None => None,
    };

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let (mut param, files) = if content_type.starts_with("multipart/form-data") {
        read_multipart_create(&state, request).await?
    } else {
        let Json(body) = Json::<CreatePedidoRequest>::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        (param_from_request(body, None), Vec::new())
    };
    param.usuario_id = usuario_id;

    let pedido_service = PedidoService::new(&state.db);
    let pedido = match pedido_service.create(param).await {
        Ok(pedido) => pedido,
        Err(error) => {
            // A failed request must not leave its uploads behind.
            remove_files(&state, &files).await;
            return Err(error);
        }
    };

    Ok((StatusCode::OK, Json(pedido.into_dto())))
}

/// PATCH /api/orders/{id}/status - Update an order's status
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: Updated PedidoDto
/// - `400 Bad Request`: Unrecognized status text
/// - `404 Not Found`: No order with that id (empty body)
pub async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<UpdateEstadoRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let pedido_service = PedidoService::new(&state.db);
    let pedido = pedido_service.update_estado(id, &body.estado).await?;

    Ok((StatusCode::OK, Json(pedido.into_dto())))
}

/// DELETE /api/orders/{id} - Delete an order
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `204 No Content`: Order deleted
/// - `404 Not Found`: No order with that id (empty body)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let pedido_service = PedidoService::new(&state.db);
    pedido_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/orders/{id}/admin - Set the admin price and comment
///
/// Blank values clear the corresponding key to an explicit null; other
/// metadata keys are untouched.
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: Updated PedidoDto
/// - `404 Not Found`: No order with that id (empty body)
pub async fn update_admin_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<UpdateAdminDataRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let pedido_service = PedidoService::new(&state.db);
    let pedido = pedido_service
        .update_admin_data(id, body.precio.as_deref(), body.comentario.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(pedido.into_dto())))
}

/// POST /api/orders/{id}/admin-files - Attach admin deliverables
///
/// Multipart form with repeated `archivos` file parts. The order is looked up
/// before any file is written so an unknown id never leaves files behind.
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: Updated PedidoDto
/// - `400 Bad Request`: No files in the request, or a file over 50 MB
/// - `404 Not Found`: No order with that id (empty body)
pub async fn upload_admin_files(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let headers = request.headers().clone();
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let pedido_service = PedidoService::new(&state.db);
    pedido_service.find_required(id).await?;

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut files: Vec<SavedFile> = Vec::new();
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("archivos") {
            continue;
        }
        if let Some(saved) = state.uploads.save_field(UploadKind::Admin, &mut field).await? {
            files.push(saved);
        }
    }

    let pedido = pedido_service.append_admin_files(id, files).await?;

    Ok((StatusCode::OK, Json(pedido.into_dto())))
}

/// PATCH /api/orders/{id}/user-response - Record the customer's decision
///
/// # Authentication
/// Requires a valid bearer token; non-admin callers must own the order
///
/// # Returns
/// - `200 OK`: Updated PedidoDto
/// - `400 Bad Request`: Decision text not `Aceptado` or `No aceptado`
/// - `403 Forbidden`: Caller does not own the order (empty body)
/// - `404 Not Found`: No order with that id (empty body)
pub async fn update_user_response(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<UpdateUserResponseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let pedido_service = PedidoService::new(&state.db);
    let pedido = pedido_service
        .update_user_response(&claims, id, body.decision.as_deref(), body.comentario.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(pedido.into_dto())))
}

/// Interpretation of the `estado` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EstadoFilter {
    /// Absent, blank, or `all`: list every status.
    All,
    /// One of the recognized status literals.
    Only(EstadoPedido),
    /// Unrecognized text. It can never equal a stored status, so the list
    /// comes back empty instead of silently unfiltered.
    NoMatch,
}

fn parse_estado_filter(raw: Option<&str>) -> EstadoFilter {
    let Some(raw) = raw else {
        return EstadoFilter::All;
    };

    match raw.trim() {
        "" | "all" => EstadoFilter::All,
        "Pendiente" => EstadoFilter::Only(EstadoPedido::Pendiente),
        "Completado" => EstadoFilter::Only(EstadoPedido::Completado),
        "Cancelado" => EstadoFilter::Only(EstadoPedido::Cancelado),
        _ => EstadoFilter::NoMatch,
    }
}

fn param_from_request(body: CreatePedidoRequest, archivos_json: Option<String>) -> CreatePedidoParam {
    CreatePedidoParam {
        nombre: body.nombre,
        telefono: body.telefono,
        servicio: body.servicio,
        detalles: body.detalles,
        fecha_pref: body.fecha_pref,
        origen: body.origen.unwrap_or_default(),
        archivos_json: archivos_json.or(body.archivos_json),
        usuario_id: None,
    }
}

/// Reads the multipart variant of order creation: text fields by name plus
/// repeated `archivos` file parts streamed to the upload store.
///
/// Files already on disk are removed again when a later part fails, so a
/// rejected request never leaves uploads behind.
async fn read_multipart_create(
    state: &AppState,
    request: Request,
) -> Result<(CreatePedidoParam, Vec<SavedFile>), AppError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut body = CreatePedidoRequest::default();
    let mut files: Vec<SavedFile> = Vec::new();

    if let Err(error) = read_create_fields(state, &mut multipart, &mut body, &mut files).await {
        remove_files(state, &files).await;
        return Err(error);
    }

    let archivos_json = if files.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&files)?)
    };

    Ok((param_from_request(body, archivos_json), files))
}

async fn read_create_fields(
    state: &AppState,
    multipart: &mut Multipart,
    body: &mut CreatePedidoRequest,
    files: &mut Vec<SavedFile>,
) -> Result<(), AppError> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "archivos" => {
                if let Some(saved) = state
                    .uploads
                    .save_field(UploadKind::Pedido, &mut field)
                    .await?
                {
                    files.push(saved);
                }
            }
            "nombre" => body.nombre = field_text(field).await?,
            "telefono" => body.telefono = field_text(field).await?,
            "servicio" => body.servicio = field_text(field).await?,
            "detalles" => body.detalles = field_text(field).await?,
            "fechaPref" => body.fecha_pref = Some(field_text(field).await?),
            "origen" => body.origen = Some(field_text(field).await?),
            _ => {}
        }
    }

    Ok(())
}

async fn remove_files(state: &AppState, files: &[SavedFile]) {
    for file in files {
        state.uploads.remove(file).await;
    }
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
