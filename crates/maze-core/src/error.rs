//! Error types for maze generation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimensions: {rows}x{cols} (minimum {min}x{min})")]
    InvalidDimensions { rows: i32, cols: i32, min: i32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid cell code: {0}")]
    InvalidCell(u8),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::InvalidDimensions {
            rows: 3,
            cols: 8,
            min: 5,
        };
        assert_eq!(err.to_string(), "Invalid dimensions: 3x8 (minimum 5x5)");
    }

    #[test]
    fn test_serde_json_conversion() {
        let err: Error = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
