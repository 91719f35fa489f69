use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::auth::CredencialesRequest,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::usuario::UsuarioService,
        state::AppState,
    },
};

/// GET /api/users - List all accounts
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: JSON array of UsuarioDto, newest first, without password hashes
pub async fn get_all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let usuario_service = UsuarioService::new(&state.db, &state.hasher);
    let usuarios = usuario_service.get_all().await?;

    let usuarios_dto: Vec<_> = usuarios.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(usuarios_dto)))
}

/// POST /api/users - Create an account with the user role
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: UsuarioDto of the new account
/// - `400 Bad Request`: Missing username or password
/// - `409 Conflict`: Username already taken
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CredencialesRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let usuario_service = UsuarioService::new(&state.db, &state.hasher);
    let usuario = usuario_service.create(&body.username, &body.password).await?;

    Ok((StatusCode::OK, Json(usuario.into_dto())))
}

/// DELETE /api/users/{id} - Delete an account
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `204 No Content`: Account deleted
/// - `400 Bad Request`: The target account is an admin
/// - `404 Not Found`: No account with that id (empty body)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let usuario_service = UsuarioService::new(&state.db, &state.hasher);
    usuario_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
