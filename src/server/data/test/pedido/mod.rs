use entity::pedido::EstadoPedido;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{pedido::PedidoFactory, usuario::UsuarioFactory},
};

use crate::server::{
    data::pedido::PedidoRepository,
    model::pedido::{CreatePedidoParam, ListPedidosParam},
};

mod create;
mod delete;
mod get_all;
mod get_by_usuario;
mod update_archivos_json;
mod update_estado;
