//! Error handling for password hashing operations

use std::fmt;
use thiserror::Error;

use crate::salt::MIN_SALT_LEN;

/// Boxed source error returned by [`Encoding::decode`](crate::Encoding::decode)
pub type DecodeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Textual argument that failed to decode in a string operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The encoded password
    Password,
    /// The encoded salt
    Salt,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password => f.write_str("password"),
            Self::Salt => f.write_str("salt"),
        }
    }
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum SaltPassError {
    /// No algorithm is registered under the requested name
    #[error("unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Requested salt is shorter than the entropy floor
    #[error("insufficient salt length: {requested} (minimum {MIN_SALT_LEN})")]
    InsufficientEntropy {
        /// Requested length in bytes
        requested: usize,
    },

    /// The random source could not fill the salt buffer
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// The hash primitive rejected a write
    #[error("hashing error: {0}")]
    Hashing(String),

    /// A [`Factory`](crate::Factory) was used without a constructor
    #[error("hash factory has no constructor")]
    NoConstructor,

    /// A textual argument could not be decoded with the active encoding
    #[error("invalid {field}: {source}")]
    InvalidEncoding {
        /// Which argument failed
        field: Field,
        /// Decoder error
        #[source]
        source: DecodeError,
    },
}

impl SaltPassError {
    /// Create a hashing error
    #[must_use]
    pub fn hashing(msg: impl Into<String>) -> Self {
        Self::Hashing(msg.into())
    }

    /// Create an `InvalidEncoding` error for `field`
    #[must_use]
    pub fn invalid_encoding(field: Field, source: DecodeError) -> Self {
        Self::InvalidEncoding { field, source }
    }
}

/// Result type for password hashing operations
pub type Result<T> = std::result::Result<T, SaltPassError>;
