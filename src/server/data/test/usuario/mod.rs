use entity::usuario::Rol;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::usuario::UsuarioFactory};

use crate::server::{data::usuario::UsuarioRepository, model::usuario::CreateUsuarioParam};

mod create;
mod delete;
mod exists_username;
mod exists_username_ci;
mod find_active_by_username;
mod get_all;
