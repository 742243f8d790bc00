//! Process-wide default facade
//!
//! Applications that do not want to pass a [`SaltPass`] around can install one
//! at startup and use the free functions below. The value is written at most
//! once; if nothing was installed the first read falls back to
//! [`SaltPass::default`].

use once_cell::sync::OnceCell;

use crate::{Result, SaltPass};

static DEFAULT: OnceCell<SaltPass> = OnceCell::new();

/// Install the process-wide facade.
///
/// # Errors
///
/// Hands `saltpass` back if a facade was already installed or already read.
pub fn install(saltpass: SaltPass) -> std::result::Result<(), SaltPass> {
    DEFAULT.set(saltpass)
}

/// The process-wide facade
pub fn get() -> &'static SaltPass {
    DEFAULT.get_or_init(SaltPass::default)
}

/// See [`SaltPass::hash`]
///
/// # Errors
///
/// Same as [`SaltPass::hash`].
pub fn hash(name: &str, password: &[u8], salt: &[u8]) -> Result<Vec<u8>> {
    get().hash(name, password, salt)
}

/// See [`SaltPass::check`]
///
/// # Errors
///
/// Same as [`SaltPass::check`].
pub fn check(name: &str, expected: &[u8], password: &[u8], salt: &[u8]) -> Result<bool> {
    get().check(name, expected, password, salt)
}

/// See [`SaltPass::salt`]
///
/// # Errors
///
/// Same as [`SaltPass::salt`].
pub fn salt(len: usize) -> Result<Vec<u8>> {
    get().salt(len)
}

/// See [`SaltPass::hash_string`]
///
/// # Errors
///
/// Same as [`SaltPass::hash_string`].
pub fn hash_string(name: &str, password: &str, salt: &str) -> Result<String> {
    get().hash_string(name, password, salt)
}

/// See [`SaltPass::check_string`]
///
/// # Errors
///
/// Same as [`SaltPass::check_string`].
pub fn check_string(name: &str, expected: &str, password: &str, salt: &str) -> Result<bool> {
    get().check_string(name, expected, password, salt)
}

/// See [`SaltPass::salt_string`]
///
/// # Errors
///
/// Same as [`SaltPass::salt_string`].
pub fn salt_string(len: usize) -> Result<String> {
    get().salt_string(len)
}

/// See [`SaltPass::just_hash`]
#[must_use]
pub fn just_hash(name: &str, password: &[u8], salt: &[u8]) -> Vec<u8> {
    get().just_hash(name, password, salt)
}

/// See [`SaltPass::just_check`]
#[must_use]
pub fn just_check(name: &str, expected: &[u8], password: &[u8], salt: &[u8]) -> bool {
    get().just_check(name, expected, password, salt)
}

/// See [`SaltPass::just_salt`]
#[must_use]
pub fn just_salt(len: usize) -> Vec<u8> {
    get().just_salt(len)
}

/// See [`SaltPass::just_hash_string`]
#[must_use]
pub fn just_hash_string(name: &str, password: &str, salt: &str) -> String {
    get().just_hash_string(name, password, salt)
}

/// See [`SaltPass::just_check_string`]
#[must_use]
pub fn just_check_string(name: &str, expected: &str, password: &str, salt: &str) -> bool {
    get().just_check_string(name, expected, password, salt)
}

/// See [`SaltPass::just_salt_string`]
#[must_use]
pub fn just_salt_string(len: usize) -> String {
    get().just_salt_string(len)
}
