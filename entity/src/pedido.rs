use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order status. The persistence layer never stores any other value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
pub enum EstadoPedido {
    #[sea_orm(string_value = "Pendiente")]
    Pendiente,
    #[sea_orm(string_value = "Completado")]
    Completado,
    #[sea_orm(string_value = "Cancelado")]
    Cancelado,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "pedidos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub telefono: String,
    pub servicio: String,
    pub detalles: String,
    pub fecha_pref: Option<String>,
    pub estado: EstadoPedido,
    pub origen: String,
    pub creado_en: DateTimeUtc,
    /// Raw JSON metadata blob (customer files, admin price/comment, admin
    /// files, user decision). Opaque at this layer.
    pub archivos_json: Option<String>,
    pub usuario_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UsuarioId",
        to = "super::usuario::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Usuario,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
