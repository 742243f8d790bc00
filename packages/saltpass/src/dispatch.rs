//! The public hashing facade
//!
//! [`SaltPass`] bundles an [`AlgorithmRegistry`], an [`Encoding`] and the
//! default salt length. Its operations come in three flavours:
//!
//! - byte oriented: [`hash`](SaltPass::hash), [`check`](SaltPass::check),
//!   [`salt`](SaltPass::salt)
//! - text oriented, through the encoding: `hash_string`, `check_string`,
//!   `salt_string`
//! - `just_*` forms of all of the above, which swallow the error and return
//!   an empty value (`false` for checks)

use std::sync::Arc;

use rand::rngs::OsRng;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::encoding::{Base64Encoding, Encoding};
use crate::error::Field;
use crate::registry::{AlgorithmRegistry, RegistryBuilder};
use crate::salt::{self, DEFAULT_SALT_LEN};
use crate::{PasswordHasher, Result, SaltPassConfig};

/// Salted password hashing over a registry of named algorithms
#[derive(Debug, Clone)]
pub struct SaltPass {
    registry: AlgorithmRegistry,
    encoding: Arc<dyn Encoding>,
    default_salt_len: usize,
}

impl Default for SaltPass {
    /// All built-in algorithms, URL-safe base64, 24 byte default salt
    fn default() -> Self {
        Self::new(AlgorithmRegistry::with_builtin(), Base64Encoding::url_safe())
    }
}

impl SaltPass {
    /// Facade over `registry` using `encoding` for the string API
    #[must_use]
    pub fn new<E>(registry: AlgorithmRegistry, encoding: E) -> Self
    where
        E: Encoding + 'static,
    {
        Self {
            registry,
            encoding: Arc::new(encoding),
            default_salt_len: DEFAULT_SALT_LEN,
        }
    }

    /// Start composing a facade with an empty registry
    #[must_use]
    pub fn builder() -> SaltPassBuilder {
        SaltPassBuilder::default()
    }

    /// Build a facade from configuration
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::InsufficientEntropy` for a default salt length
    /// below 16 and `SaltPassError::UnknownAlgorithm` for an algorithm name
    /// that is not a compiled-in built-in.
    pub fn from_config(config: &SaltPassConfig) -> Result<Self> {
        config.validate()?;

        let registry = match &config.algorithms {
            Some(names) => RegistryBuilder::new().with_selected(names)?,
            None => RegistryBuilder::new().with_builtin(),
        };

        Ok(Self {
            registry: registry.build(),
            encoding: Arc::from(config.encoding.build()),
            default_salt_len: config.default_salt_len,
        })
    }

    /// The algorithm registry
    #[must_use]
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// The encoding used by the string API
    #[must_use]
    pub fn encoding(&self) -> &dyn Encoding {
        self.encoding.as_ref()
    }

    /// Salt length used for a request of zero bytes
    #[must_use]
    pub fn default_salt_len(&self) -> usize {
        self.default_salt_len
    }

    /// Hash `password` and `salt` with the algorithm registered as `name`
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::UnknownAlgorithm` if `name` is not registered,
    /// or whatever the algorithm itself reports.
    pub fn hash(&self, name: &str, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        let algorithm = self.registry.lookup(name)?;
        debug!(
            algorithm = name,
            salt_len = salt.len(),
            "computing password digest"
        );
        algorithm.hash(password, salt)
    }

    /// Check `password` and `salt` against an expected digest.
    ///
    /// Digests of different lengths never match. Otherwise every byte is
    /// compared.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`hash`](Self::hash); a mismatch is
    /// `Ok(false)`, not an error.
    pub fn check(&self, name: &str, expected: &[u8], password: &[u8], salt: &[u8]) -> Result<bool> {
        let digest = self.hash(name, password, salt)?;
        Ok(digests_match(&digest, expected))
    }

    /// Generate `len` bytes of salt; `0` selects the default length
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::InsufficientEntropy` for lengths in `1..16`
    /// and `SaltPassError::RandomSource` if the OS source fails.
    pub fn salt(&self, len: usize) -> Result<Vec<u8>> {
        salt::generate_from(&mut OsRng, len, self.default_salt_len)
    }

    /// [`hash`](Self::hash) over encoded password and salt, returning an
    /// encoded digest
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::InvalidEncoding` naming the argument that
    /// failed to decode, or any error from [`hash`](Self::hash).
    pub fn hash_string(&self, name: &str, password: &str, salt: &str) -> Result<String> {
        let password = self.decode(Field::Password, password)?;
        let salt = self.decode(Field::Salt, salt)?;
        let digest = self.hash(name, &password, &salt)?;
        Ok(self.encoding.encode(&digest))
    }

    /// [`check`](Self::check) over encoded values.
    ///
    /// The recomputed digest is encoded and compared with `expected` as text.
    ///
    /// # Errors
    ///
    /// Same as [`hash_string`](Self::hash_string).
    pub fn check_string(
        &self,
        name: &str,
        expected: &str,
        password: &str,
        salt: &str,
    ) -> Result<bool> {
        let digest = self.hash_string(name, password, salt)?;
        Ok(digests_match(digest.as_bytes(), expected.as_bytes()))
    }

    /// [`salt`](Self::salt), encoded
    ///
    /// # Errors
    ///
    /// Same as [`salt`](Self::salt).
    pub fn salt_string(&self, len: usize) -> Result<String> {
        let salt = self.salt(len)?;
        Ok(self.encoding.encode(&salt))
    }

    /// [`hash`](Self::hash), or an empty digest on error
    #[must_use]
    pub fn just_hash(&self, name: &str, password: &[u8], salt: &[u8]) -> Vec<u8> {
        discard("hash", self.hash(name, password, salt))
    }

    /// [`check`](Self::check), or `false` on error
    #[must_use]
    pub fn just_check(&self, name: &str, expected: &[u8], password: &[u8], salt: &[u8]) -> bool {
        discard("check", self.check(name, expected, password, salt))
    }

    /// [`salt`](Self::salt), or an empty salt on error
    #[must_use]
    pub fn just_salt(&self, len: usize) -> Vec<u8> {
        discard("salt", self.salt(len))
    }

    /// [`hash_string`](Self::hash_string), or `""` on error
    #[must_use]
    pub fn just_hash_string(&self, name: &str, password: &str, salt: &str) -> String {
        discard("hash_string", self.hash_string(name, password, salt))
    }

    /// [`check_string`](Self::check_string), or `false` on error
    #[must_use]
    pub fn just_check_string(&self, name: &str, expected: &str, password: &str, salt: &str) -> bool {
        discard(
            "check_string",
            self.check_string(name, expected, password, salt),
        )
    }

    /// [`salt_string`](Self::salt_string), or `""` on error
    #[must_use]
    pub fn just_salt_string(&self, len: usize) -> String {
        discard("salt_string", self.salt_string(len))
    }

    fn decode(&self, field: Field, text: &str) -> Result<Vec<u8>> {
        self.encoding
            .decode(text)
            .map_err(|source| crate::SaltPassError::invalid_encoding(field, source))
    }
}

fn digests_match(actual: &[u8], expected: &[u8]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    actual.ct_eq(expected).into()
}

fn discard<T: Default>(operation: &'static str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        debug!(operation, error = %e, "discarding error");
        T::default()
    })
}

/// Builder for [`SaltPass`]
#[derive(Debug)]
pub struct SaltPassBuilder {
    registry: RegistryBuilder,
    encoding: Arc<dyn Encoding>,
    default_salt_len: usize,
}

impl Default for SaltPassBuilder {
    fn default() -> Self {
        Self {
            registry: RegistryBuilder::new(),
            encoding: Arc::new(Base64Encoding::url_safe()),
            default_salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl SaltPassBuilder {
    /// Register `algorithm` under `name`
    #[must_use]
    pub fn register<A>(mut self, name: impl Into<String>, algorithm: A) -> Self
    where
        A: PasswordHasher + 'static,
    {
        self.registry = self.registry.register(name, algorithm);
        self
    }

    /// Register every built-in family enabled in this build
    #[must_use]
    pub fn with_builtin(mut self) -> Self {
        self.registry = self.registry.with_builtin();
        self
    }

    /// Use `encoding` for the string API
    #[must_use]
    pub fn encoding<E>(mut self, encoding: E) -> Self
    where
        E: Encoding + 'static,
    {
        self.encoding = Arc::new(encoding);
        self
    }

    /// Salt length substituted for a request of zero bytes.
    ///
    /// `0` keeps [`DEFAULT_SALT_LEN`]; [`build`](Self::build) rejects any
    /// other value below 16.
    #[must_use]
    pub fn default_salt_len(mut self, len: usize) -> Self {
        self.default_salt_len = len;
        self
    }

    /// Finish the facade
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::InsufficientEntropy` if the default salt length
    /// is below 16.
    pub fn build(self) -> Result<SaltPass> {
        let default_salt_len = salt::resolve_len(self.default_salt_len, DEFAULT_SALT_LEN)?;
        Ok(SaltPass {
            registry: self.registry.build(),
            encoding: self.encoding,
            default_salt_len,
        })
    }
}
