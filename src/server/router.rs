use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::server::{
    controller::{auth, health, pedido, usuario},
    service::upload::MAX_REQUEST_BYTES,
    state::AppState,
};

/// Builds the API router.
///
/// The body limit covers the multipart order endpoints; per-file limits are
/// enforced separately by the upload store.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/orders", get(pedido::get_all).post(pedido::create))
        .route("/api/orders/mis-pedidos", get(pedido::get_mis_pedidos))
        .route("/api/orders/{id}", delete(pedido::delete))
        .route("/api/orders/{id}/status", patch(pedido::update_estado))
        .route("/api/orders/{id}/admin", patch(pedido::update_admin_data))
        .route(
            "/api/orders/{id}/admin-files",
            post(pedido::upload_admin_files),
        )
        .route(
            "/api/orders/{id}/user-response",
            patch(pedido::update_user_response),
        )
        .route(
            "/api/users",
            get(usuario::get_all).post(usuario::create),
        )
        .route("/api/users/{id}", delete(usuario::delete))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(CorsLayer::permissive())
}

/// Wraps the API router with the static front-end.
///
/// The web root is served at `/` with an SPA fallback to `index.html`, so
/// unmatched non-API paths land on the front-end and uploaded attachments
/// under `<web_root>/uploads/` are directly reachable.
pub fn with_static_files(api: Router<AppState>, web_root: &Path) -> Router<AppState> {
    let spa = ServeDir::new(web_root)
        .fallback(ServeFile::new(web_root.join("index.html")));

    api.fallback_service(spa)
}
