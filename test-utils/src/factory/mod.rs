//! Entity factories for tests.
//!
//! Each factory builds one entity with sensible defaults that can be overridden
//! through a builder pattern, keeping test setup short and intention-revealing.

pub mod helpers;
pub mod pedido;
pub mod usuario;
