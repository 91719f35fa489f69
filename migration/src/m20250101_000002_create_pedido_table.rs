use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000001_create_usuario_table::Usuario;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pedido::Table)
                    .if_not_exists()
                    .col(pk_auto(Pedido::Id))
                    .col(string_len(Pedido::Nombre, 200))
                    .col(string_len(Pedido::Telefono, 30))
                    .col(string_len(Pedido::Servicio, 200))
                    .col(text(Pedido::Detalles))
                    .col(text_null(Pedido::FechaPref))
                    .col(string_len(Pedido::Estado, 30).default("Pendiente"))
                    .col(string_len(Pedido::Origen, 50).default("Web"))
                    .col(timestamp_with_time_zone(Pedido::CreadoEn))
                    .col(text_null(Pedido::ArchivosJson))
                    .col(integer_null(Pedido::UsuarioId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pedido_usuario")
                            .from(Pedido::Table, Pedido::UsuarioId)
                            .to(Usuario::Table, Usuario::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pedido_usuario_id")
                    .table(Pedido::Table)
                    .col(Pedido::UsuarioId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pedido::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pedido {
    #[sea_orm(iden = "pedidos")]
    Table,
    Id,
    Nombre,
    Telefono,
    Servicio,
    Detalles,
    FechaPref,
    Estado,
    Origen,
    CreadoEn,
    ArchivosJson,
    UsuarioId,
}
