pub use super::pedido::Entity as Pedido;
pub use super::usuario::Entity as Usuario;
