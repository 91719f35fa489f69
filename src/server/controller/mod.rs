//! HTTP request handlers.
//!
//! Controllers translate between the wire (extractors, DTOs, status codes)
//! and the service layer. Authorization runs here through [`AuthGuard`]
//! before any service call.
//!
//! [`AuthGuard`]: super::middleware::auth::AuthGuard

pub mod auth;
pub mod health;
pub mod pedido;
pub mod usuario;
