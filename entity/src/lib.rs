pub mod pedido;
pub mod prelude;
pub mod usuario;
