//! Wire-format DTOs shared by every HTTP endpoint.
//!
//! These types define the JSON contract of the API. Field names follow the
//! front-end's camelCase convention; domain models live in `server::model`.

pub mod api;
pub mod auth;
pub mod pedido;
pub mod usuario;
