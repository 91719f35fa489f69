//! Domain models and operation-specific parameter types.

pub mod pedido;
pub mod usuario;
