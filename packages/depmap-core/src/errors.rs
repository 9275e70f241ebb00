//! Error types for depmap-core
//!
//! Graph construction and component analysis never fail; errors only come
//! from configuration and worker pool setup.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for depmap-core operations
#[derive(Debug, Error)]
pub enum DepmapError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for depmap operations
pub type Result<T> = std::result::Result<T, DepmapError>;
