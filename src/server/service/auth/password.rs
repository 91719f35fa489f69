//! Password hashing using Argon2id.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as Argon2Hash, PasswordHasher as Argon2Hasher,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::AppError;

/// Password hashing service using Argon2id.
///
/// Hashing and verification run on the blocking thread pool so concurrent
/// logins do not starve the async runtime.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// OWASP minimum recommended memory cost: 19 MiB.
    const MEMORY_COST: u32 = 19_456;
    /// OWASP recommended iterations.
    const TIME_COST: u32 = 2;
    /// OWASP recommended parallelism.
    const PARALLELISM: u32 = 1;
    /// Output hash length in bytes.
    const OUTPUT_LEN: usize = 32;

    /// Creates a hasher with the default parameters.
    ///
    /// # Returns
    /// - `Ok(PasswordHasher)` - New hasher instance
    /// - `Err(AppError::InternalError)` - Parameters rejected by the argon2 crate
    pub fn new() -> Result<Self, AppError> {
        Self::with_params(Self::MEMORY_COST, Self::TIME_COST, Self::PARALLELISM)
    }

    /// Creates a hasher with custom parameters.
    ///
    /// Intended for tests that cannot afford the production memory cost.
    ///
    /// # Arguments
    /// - `memory_cost` - Memory cost in KiB
    /// - `time_cost` - Iteration count
    /// - `parallelism` - Lane count
    ///
    /// # Returns
    /// - `Ok(PasswordHasher)` - New hasher instance
    /// - `Err(AppError::InternalError)` - Parameters rejected by the argon2 crate
    pub fn with_params(memory_cost: u32, time_cost: u32, parallelism: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_cost, time_cost, parallelism, Some(Self::OUTPUT_LEN))
            .map_err(|e| AppError::InternalError(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    /// Hashes a password into a PHC-format string.
    ///
    /// # Arguments
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok(String)` - Argon2id PHC string ready to store
    /// - `Err(AppError::InternalError)` - Hashing failure or task panic
    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let params = self.params.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password hash task panicked: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against a stored PHC-format hash.
    ///
    /// # Arguments
    /// - `password` - Plain-text password attempt
    /// - `hash` - Stored PHC string
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::InternalError)` - Unparseable stored hash or task panic
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        tokio::task::spawn_blocking(move || {
            let parsed = Argon2Hash::new(&hash)
                .map_err(|e| AppError::InternalError(format!("Failed to parse stored hash: {}", e)))?;

            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Password verify task panicked: {}", e)))?
    }
}
