//! Business logic services.
//!
//! Services own the application rules: validation, defaults, authorization
//! checks, and metadata merges. They call into repositories for persistence
//! and never touch entities or HTTP types directly.

pub mod auth;
pub mod pedido;
pub mod upload;
pub mod usuario;

#[cfg(test)]
mod test;
