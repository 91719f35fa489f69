mod pedido;
mod usuario;
