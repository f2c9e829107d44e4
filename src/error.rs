//! Error types for coordkit

use std::fmt;

/// Result type for coordkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in coordkit operations
#[derive(Debug)]
pub enum Error {
    /// UTM zone number outside 1..=60
    InvalidZone(u8),

    /// Projection backend failure on otherwise well-formed input
    Projection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidZone(zone) => write!(f, "Invalid UTM zone: {}", zone),
            Error::Projection(msg) => write!(f, "Projection error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
