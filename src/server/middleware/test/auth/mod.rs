use axum::http::{header, HeaderMap, HeaderValue};
use chrono::Utc;
use entity::usuario::Rol;

use crate::server::{
    middleware::auth::AuthGuard,
    model::usuario::Usuario,
    service::auth::token::JwtService,
};

mod optional;
mod require;

fn jwt() -> JwtService {
    JwtService::new(
        "guard-test-secret".to_string(),
        "CiberZone".to_string(),
        "CiberZoneApp".to_string(),
    )
}

fn usuario(id: i32, rol: Rol) -> Usuario {
    Usuario {
        id,
        username: format!("cuenta{}", id),
        password_hash: "hash".to_string(),
        rol,
        creado_en: Utc::now(),
        activo: true,
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
