use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_KEY: &str = "CiberZoneSecretKey2025!MuySegura";
const DEFAULT_JWT_ISSUER: &str = "CiberZone";
const DEFAULT_JWT_AUDIENCE: &str = "CiberZoneApp";
const DEFAULT_ADMIN_USERNAME: &str = "ciberzone";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin2025#";
const DEFAULT_WEB_ROOT: &str = "wwwroot";
const DEFAULT_PORT: u16 = 8080;

/// Environment-driven configuration.
///
/// Every value except the connection sources carries a hardcoded fallback so
/// the server boots in a bare environment. The two connection sources stay
/// optional; `server::db` resolves them into one canonical URL.
pub struct Config {
    /// Explicit connection string (`DEFAULT_CONNECTION`). Wins when set.
    pub default_connection: Option<String>,
    /// Platform-provided `DATABASE_URL`, either URI or key-value form.
    pub database_url: Option<String>,

    pub jwt_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,

    pub admin_bootstrap_username: String,
    pub admin_bootstrap_password: String,

    /// Directory holding the bundled front-end and the uploads tree.
    pub web_root: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            default_connection: std::env::var("DEFAULT_CONNECTION").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
            jwt_key: std::env::var("JWT_KEY").unwrap_or_else(|_| DEFAULT_JWT_KEY.to_string()),
            jwt_issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            jwt_audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            admin_bootstrap_username: std::env::var("ADMIN_BOOTSTRAP_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_bootstrap_password: std::env::var("ADMIN_BOOTSTRAP_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            web_root: std::env::var("WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.to_string()),
            port,
        })
    }
}
