//! Salted password hashing with algorithms selected by name
//!
//! ```
//! use saltpass::SaltPass;
//!
//! let passwords = SaltPass::default();
//!
//! let salt = passwords.salt(0).unwrap();
//! let hashed = passwords.hash("sha512", b"letmein", &salt).unwrap();
//!
//! assert!(passwords.check("sha512", &hashed, b"letmein", &salt).unwrap());
//! assert!(!passwords.just_check("sha512", &hashed, b"god", &salt));
//! ```
//!
//! The `*_string` operations take and return text in the facade's
//! [`Encoding`] (URL-safe base64 unless configured otherwise), and every
//! operation has a `just_*` form that trades the error for an empty result.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod algorithms;
pub mod config;
pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod global;
pub mod registry;
pub mod salt;

// Re-export error types
pub use error::{Field, Result, SaltPassError};

pub use algorithm::{
    Digester, DigestPrimitive, Factory, IncrementalHash, PasswordHasher, compute_digest,
};
pub use config::SaltPassConfig;
pub use dispatch::{SaltPass, SaltPassBuilder};
pub use encoding::{Base64Encoding, Encoding, EncodingKind, HexEncoding, UnknownEncoding};
pub use registry::{AlgorithmRegistry, RegistryBuilder};
pub use salt::{DEFAULT_SALT_LEN, MIN_SALT_LEN};
