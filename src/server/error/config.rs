use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but could not be parsed.
    ///
    /// # Fields
    /// - Name of the environment variable
    /// - The raw value that failed to parse
    #[error("Invalid value for environment variable {0}: '{1}'")]
    InvalidEnvVar(String, String),
}
