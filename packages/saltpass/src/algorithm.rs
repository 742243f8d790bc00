//! Adapters turning incremental hash primitives into password hashers
//!
//! A [`PasswordHasher`] computes `digest = H(password || salt)`. Three shapes
//! implement it:
//!
//! - plain closures `Fn(&[u8], &[u8]) -> Result<Vec<u8>>`
//! - [`Digester`], which owns one primitive and resets it on every call
//! - [`Factory`], which builds a fresh primitive per call

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use digest::{Digest, FixedOutputReset};

use crate::{Result, SaltPassError};

/// Something that hashes a password together with its salt
pub trait PasswordHasher: Send + Sync {
    /// Compute the digest of `password` followed by `salt`
    ///
    /// # Errors
    ///
    /// Implementations return `SaltPassError::Hashing` when the underlying
    /// primitive fails.
    fn hash(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>>;
}

impl<F> PasswordHasher for F
where
    F: Fn(&[u8], &[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn hash(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        self(password, salt)
    }
}

/// Incremental hash primitive: reset, write, sum
pub trait IncrementalHash: Send {
    /// Return to the freshly constructed state
    fn reset(&mut self);

    /// Feed bytes into the hash
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the primitive cannot accept input.
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Finalize and return the digest
    fn sum(&mut self) -> Vec<u8>;
}

impl<H: IncrementalHash + ?Sized> IncrementalHash for Box<H> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write(data)
    }

    fn sum(&mut self) -> Vec<u8> {
        (**self).sum()
    }
}

/// [`IncrementalHash`] over a RustCrypto digest
#[derive(Clone, Default)]
pub struct DigestPrimitive<D>(D);

impl<D: Digest> DigestPrimitive<D> {
    /// Wrap a freshly constructed digest
    #[must_use]
    pub fn new() -> Self {
        Self(D::new())
    }
}

impl<D> IncrementalHash for DigestPrimitive<D>
where
    D: Digest + FixedOutputReset + Send,
{
    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        Digest::update(&mut self.0, data);
        Ok(())
    }

    fn sum(&mut self) -> Vec<u8> {
        self.0.finalize_reset().to_vec()
    }
}

/// Run one password/salt pass through `primitive`.
///
/// The primitive is reset first, then fed the password and the salt in that
/// order.
///
/// # Errors
///
/// Returns `SaltPassError::Hashing` if either write fails; no partial digest
/// is produced.
pub fn compute_digest<H>(primitive: &mut H, password: &[u8], salt: &[u8]) -> Result<Vec<u8>>
where
    H: IncrementalHash + ?Sized,
{
    primitive.reset();
    primitive
        .write(password)
        .map_err(|e| SaltPassError::hashing(format!("writing password: {e}")))?;
    primitive
        .write(salt)
        .map_err(|e| SaltPassError::hashing(format!("writing salt: {e}")))?;
    Ok(primitive.sum())
}

/// Password hasher owning a single primitive.
///
/// Calls are serialized through a mutex and the primitive is reset each time,
/// so nothing from one call reaches the next.
pub struct Digester<H> {
    primitive: Mutex<H>,
}

impl<H: IncrementalHash> Digester<H> {
    /// Wrap `primitive`
    #[must_use]
    pub fn new(primitive: H) -> Self {
        Self {
            primitive: Mutex::new(primitive),
        }
    }
}

impl<H: IncrementalHash> PasswordHasher for Digester<H> {
    fn hash(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        let mut primitive = self
            .primitive
            .lock()
            .map_err(|_| SaltPassError::hashing("hash primitive lock poisoned"))?;
        compute_digest(&mut *primitive, password, salt)
    }
}

impl<H> fmt::Debug for Digester<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digester").finish_non_exhaustive()
    }
}

type Constructor = Arc<dyn Fn() -> Box<dyn IncrementalHash> + Send + Sync>;

/// Password hasher that constructs a fresh primitive for every call.
///
/// No primitive outlives a call, so a `Factory` can be shared between threads
/// freely.
#[derive(Clone, Default)]
pub struct Factory {
    new: Option<Constructor>,
}

impl Factory {
    /// Build primitives with `ctor`
    pub fn new<F, H>(ctor: F) -> Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: IncrementalHash + 'static,
    {
        Self {
            new: Some(Arc::new(move || Box::new(ctor()) as Box<dyn IncrementalHash>)),
        }
    }

    /// Factory for a RustCrypto digest type
    #[must_use]
    pub fn of<D>() -> Self
    where
        D: Digest + FixedOutputReset + Send + 'static,
    {
        Self::new(DigestPrimitive::<D>::new)
    }

    /// Factory without a constructor; every hash fails with `NoConstructor`
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a constructor is configured
    #[must_use]
    pub fn has_constructor(&self) -> bool {
        self.new.is_some()
    }
}

impl PasswordHasher for Factory {
    fn hash(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
        let ctor = self.new.as_ref().ok_or(SaltPassError::NoConstructor)?;
        let mut primitive = ctor();
        compute_digest(&mut primitive, password, salt)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("has_constructor", &self.has_constructor())
            .finish()
    }
}
