//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Domain rule rejected a value the harness expected to be valid
    #[error("Domain error: {0}")]
    Domain(#[from] bistro_domain::DomainError),

    /// Repository error
    #[error("Store error: {0}")]
    Store(#[from] bistro_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An exercise saw a domain rule accept a value it should reject
    #[error("Exercise failed: {0}")]
    Exercise(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
