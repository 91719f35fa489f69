//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone: the
//! database connection is a pool handle and the services are
//! reference-counted or plain value types.

use sea_orm::DatabaseConnection;

use super::service::{
    auth::{password::PasswordHasher, token::JwtService},
    upload::UploadStore,
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Token service for issuing and validating bearer tokens.
    pub jwt: JwtService,

    /// Password hashing service shared by login, registration, and the admin
    /// user endpoints.
    pub hasher: PasswordHasher,

    /// File store for order attachments under the static web root.
    pub uploads: UploadStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token service
    /// - `hasher` - Password hashing service
    /// - `uploads` - Attachment store
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtService,
        hasher: PasswordHasher,
        uploads: UploadStore,
    ) -> Self {
        Self {
            db,
            jwt,
            hasher,
            uploads,
        }
    }
}
