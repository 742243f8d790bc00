//! Random salt generation with a minimum entropy floor

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::{Result, SaltPassError};

/// Salt length used when a caller asks for zero bytes
pub const DEFAULT_SALT_LEN: usize = 24;

/// Shortest salt this crate will produce
pub const MIN_SALT_LEN: usize = 16;

/// Resolve a requested salt length.
///
/// A request of `0` selects `default`. Anything below [`MIN_SALT_LEN`] after
/// that substitution is rejected.
///
/// # Errors
///
/// Returns `SaltPassError::InsufficientEntropy` carrying the resolved length
/// when it is shorter than [`MIN_SALT_LEN`].
pub fn resolve_len(requested: usize, default: usize) -> Result<usize> {
    let len = if requested == 0 { default } else { requested };
    if len < MIN_SALT_LEN {
        return Err(SaltPassError::InsufficientEntropy { requested: len });
    }
    Ok(len)
}

/// Generate `len` random bytes from the operating system's secure source.
///
/// `0` requests [`DEFAULT_SALT_LEN`] bytes.
///
/// # Errors
///
/// Returns `SaltPassError::InsufficientEntropy` for lengths in `1..16` and
/// `SaltPassError::RandomSource` if the buffer cannot be allocated or the OS
/// source fails.
pub fn generate(len: usize) -> Result<Vec<u8>> {
    generate_from(&mut OsRng, len, DEFAULT_SALT_LEN)
}

/// Generate a salt from an explicit random source.
///
/// # Errors
///
/// Same as [`generate`]; `default` replaces [`DEFAULT_SALT_LEN`] for a request
/// of `0`. A length that cannot be allocated is also `RandomSource`.
pub fn generate_from<R>(rng: &mut R, len: usize, default: usize) -> Result<Vec<u8>>
where
    R: TryRngCore + ?Sized,
{
    let len = resolve_len(len, default)?;
    let mut salt: Vec<u8> = Vec::new();
    salt.try_reserve_exact(len)
        .map_err(|e| SaltPassError::RandomSource(format!("allocating {len} byte salt: {e}")))?;
    salt.resize(len, 0);
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| SaltPassError::RandomSource(e.to_string()))?;

    tracing::trace!(len, "generated salt");
    Ok(salt)
}
