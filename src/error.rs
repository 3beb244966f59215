// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] wildcard::ParseError),
    #[error("invalid separator {0:?}, use a single character")]
    InvalidSeparator(String),
    #[error("file {filename:?} not found")]
    FileNotFound { filename: String },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
