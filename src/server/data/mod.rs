//! Database repositories.
//!
//! Repositories own all SeaORM queries and convert entity models to domain
//! models at this boundary. Nothing above this layer touches entities.

pub mod pedido;
pub mod usuario;

#[cfg(test)]
mod test;
