mod model;
mod server;

use std::{net::SocketAddr, path::PathBuf};

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::{
        auth::{password::PasswordHasher, token::JwtService},
        upload::UploadStore,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    if startup::run_migrations(&db).await {
        let hasher = PasswordHasher::new()?;
        if let Err(error) = startup::bootstrap_admin(&db, &config, &hasher).await {
            tracing::warn!("Admin bootstrap skipped: {}", error);
        }
    }

    let web_root = PathBuf::from(&config.web_root);
    let state = AppState::new(
        db,
        JwtService::new(
            config.jwt_key.clone(),
            config.jwt_issuer.clone(),
            config.jwt_audience.clone(),
        ),
        PasswordHasher::new()?,
        UploadStore::new(&web_root),
    );

    let app = router::with_static_files(router::router(), &web_root).with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
