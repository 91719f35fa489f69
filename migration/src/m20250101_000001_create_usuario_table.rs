use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuario::Id))
                    .col(string_len_uniq(Usuario::Username, 100))
                    .col(text(Usuario::PasswordHash))
                    .col(string_len(Usuario::Rol, 20).default("user"))
                    .col(timestamp_with_time_zone(Usuario::CreadoEn))
                    .col(boolean(Usuario::Activo).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuario {
    #[sea_orm(iden = "usuarios")]
    Table,
    Id,
    Username,
    PasswordHash,
    Rol,
    CreadoEn,
    Activo,
}
