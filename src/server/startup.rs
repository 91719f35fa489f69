//! Startup sequence: database connection, retried migrations, bootstrap admin.

use std::time::Duration;

use entity::usuario::Rol;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config,
    data::usuario::UsuarioRepository,
    db,
    error::AppError,
    model::usuario::CreateUsuarioParam,
    service::auth::password::PasswordHasher,
};

const MIGRATION_ATTEMPTS: u32 = 5;
const MIGRATION_RETRY_STEP_MS: u64 = 3000;

/// Builds the database connection pool from the resolved connection settings.
///
/// The connection is lazy: the database does not need to be reachable yet.
/// Reachability is checked by the migration loop.
///
/// # Arguments
/// - `config` - Application configuration holding the raw connection sources
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection pool handle
/// - `Err(AppError)` - Malformed pool options
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let settings = db::resolve_database_url(config);

    let mut opt = ConnectOptions::new(&settings.url);
    opt.sqlx_logging(false);
    opt.connect_lazy(true);
    if let Some(timeout) = settings.connect_timeout {
        opt.connect_timeout(timeout);
    }

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Runs pending migrations with retries for a database that is still coming up.
///
/// Five attempts with a linearly growing delay (3s, 6s, 9s, 12s). When every
/// attempt fails the server still starts so the static front-end and health
/// endpoint stay reachable; API calls will surface database errors.
///
/// # Arguments
/// - `db` - Database connection pool
///
/// # Returns
/// - `true` - Schema is up to date
/// - `false` - All attempts failed; running degraded
pub async fn run_migrations(db: &DatabaseConnection) -> bool {
    for attempt in 1..=MIGRATION_ATTEMPTS {
        match Migrator::up(db, None).await {
            Ok(()) => {
                tracing::info!("Database migrations applied");
                return true;
            }
            Err(e) if attempt < MIGRATION_ATTEMPTS => {
                let delay = Duration::from_millis(MIGRATION_RETRY_STEP_MS * attempt as u64);
                tracing::warn!(
                    attempt,
                    "Migration attempt failed, retrying in {:?}: {}",
                    delay,
                    e
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                tracing::error!(
                    "All {} migration attempts failed, starting without a database: {}",
                    MIGRATION_ATTEMPTS,
                    e
                );
            }
        }
    }

    false
}

/// Creates the bootstrap admin account when it does not exist yet.
///
/// Only called after migrations succeed. The credentials come from
/// configuration with hardcoded fallbacks so a fresh deployment is always
/// reachable.
///
/// # Arguments
/// - `db` - Database connection pool
/// - `config` - Application configuration with the bootstrap credentials
/// - `hasher` - Password hashing service
///
/// # Returns
/// - `Ok(())` - Admin present, created now or previously
/// - `Err(AppError)` - Database or hashing failure
pub async fn bootstrap_admin(
    db: &DatabaseConnection,
    config: &Config,
    hasher: &PasswordHasher,
) -> Result<(), AppError> {
    let repository = UsuarioRepository::new(db);

    if repository
        .exists_username(&config.admin_bootstrap_username)
        .await?
    {
        return Ok(());
    }

    let password_hash = hasher
        .hash(config.admin_bootstrap_password.clone())
        .await?;

    repository
        .create(CreateUsuarioParam {
            username: config.admin_bootstrap_username.clone(),
            password_hash,
            rol: Rol::Admin,
        })
        .await?;

    tracing::info!(
        username = %config.admin_bootstrap_username,
        "Bootstrap admin account created"
    );

    Ok(())
}
