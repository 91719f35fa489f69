//! Account data repository for database operations.
//!
//! This module provides the `UsuarioRepository` for managing account records in
//! the database. It handles creation, lookups by username in the variants the
//! auth flows need, listing, and deletion, with conversion between entity
//! models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::usuario::{CreateUsuarioParam, Usuario};

/// Repository providing database operations for account management.
pub struct UsuarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioRepository<'a> {
    /// Creates a new UsuarioRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UsuarioRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account from parameter model.
    ///
    /// The unique index on `username` is the final guard against duplicates;
    /// callers perform their own duplicate checks first to produce friendly
    /// conflict messages.
    ///
    /// # Arguments
    /// - `param` - Account parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Usuario)` - The created account
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, param: CreateUsuarioParam) -> Result<Usuario, DbErr> {
        let entity = entity::usuario::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            rol: ActiveValue::Set(param.rol),
            creado_en: ActiveValue::Set(Utc::now()),
            activo: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Usuario::from_entity(entity))
    }

    /// Finds an account by its id.
    ///
    /// # Arguments
    /// - `id` - Account id
    ///
    /// # Returns
    /// - `Ok(Some(Usuario))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Usuario::from_entity))
    }

    /// Finds an active account by exact username match.
    ///
    /// Used by login: inactive accounts are invisible to authentication.
    ///
    /// # Arguments
    /// - `username` - Exact username
    ///
    /// # Returns
    /// - `Ok(Some(Usuario))` - Active account found
    /// - `Ok(None)` - No active account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_username(&self, username: &str) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Username.eq(username))
            .filter(entity::usuario::Column::Activo.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Usuario::from_entity))
    }

    /// Checks whether any account exists with the given username, ignoring case.
    ///
    /// Used by registration to reject usernames differing only by case.
    ///
    /// # Arguments
    /// - `username` - Username to check
    ///
    /// # Returns
    /// - `Ok(true)` - A case-insensitive match exists
    /// - `Ok(false)` - No match
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_username_ci(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Usuario::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::usuario::Column::Username)))
                    .eq(username.to_lowercase()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any account exists with the given username, exact match.
    ///
    /// Used by the admin create-user endpoint and the bootstrap admin check.
    ///
    /// # Arguments
    /// - `username` - Username to check
    ///
    /// # Returns
    /// - `Ok(true)` - An exact match exists
    /// - `Ok(false)` - No match
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves all accounts, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Usuario>)` - All accounts ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Usuario>, DbErr> {
        let entities = entity::prelude::Usuario::find()
            .order_by_desc(entity::usuario::Column::CreadoEn)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Usuario::from_entity).collect())
    }

    /// Deletes an account by id.
    ///
    /// Orders owned by the account keep existing; the foreign key sets their
    /// owner to null.
    ///
    /// # Arguments
    /// - `id` - Account id
    ///
    /// # Returns
    /// - `Ok(true)` - Account existed and was deleted
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Usuario::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
