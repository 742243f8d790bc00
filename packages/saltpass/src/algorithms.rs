//! Built-in digest families
//!
//! Each family sits behind a cargo feature: `md5`, `sha` (SHA-1 and SHA-2),
//! and `sha3`. [`register_builtin`] adds every enabled one to a registry.

use crate::registry::RegistryBuilder;
use crate::{Factory, Result, SaltPassError};

/// Registry name for MD5
pub const MD5: &str = "md5";
/// Registry name for SHA-1
pub const SHA1: &str = "sha1";
/// Registry name for SHA-224
pub const SHA224: &str = "sha224";
/// Registry name for SHA-256
pub const SHA256: &str = "sha256";
/// Registry name for SHA-384
pub const SHA384: &str = "sha384";
/// Registry name for SHA-512
pub const SHA512: &str = "sha512";
/// Registry name for SHA3-256
pub const SHA3_256: &str = "sha3-256";
/// Registry name for SHA3-512
pub const SHA3_512: &str = "sha3-512";

/// MD5 factory
#[cfg(feature = "md5")]
#[must_use]
pub fn md5() -> Factory {
    Factory::of::<::md5::Md5>()
}

/// SHA-1 factory
#[cfg(feature = "sha")]
#[must_use]
pub fn sha1() -> Factory {
    Factory::of::<::sha1::Sha1>()
}

/// SHA-224 factory
#[cfg(feature = "sha")]
#[must_use]
pub fn sha224() -> Factory {
    Factory::of::<sha2::Sha224>()
}

/// SHA-256 factory
#[cfg(feature = "sha")]
#[must_use]
pub fn sha256() -> Factory {
    Factory::of::<sha2::Sha256>()
}

/// SHA-384 factory
#[cfg(feature = "sha")]
#[must_use]
pub fn sha384() -> Factory {
    Factory::of::<sha2::Sha384>()
}

/// SHA-512 factory
#[cfg(feature = "sha")]
#[must_use]
pub fn sha512() -> Factory {
    Factory::of::<sha2::Sha512>()
}

/// SHA3-256 factory
#[cfg(feature = "sha3")]
#[must_use]
pub fn sha3_256() -> Factory {
    Factory::of::<sha3::Sha3_256>()
}

/// SHA3-512 factory
#[cfg(feature = "sha3")]
#[must_use]
pub fn sha3_512() -> Factory {
    Factory::of::<sha3::Sha3_512>()
}

/// Factory for a built-in family, if that family is compiled in
#[must_use]
pub fn builtin(name: &str) -> Option<Factory> {
    match name {
        #[cfg(feature = "md5")]
        MD5 => Some(md5()),
        #[cfg(feature = "sha")]
        SHA1 => Some(sha1()),
        #[cfg(feature = "sha")]
        SHA224 => Some(sha224()),
        #[cfg(feature = "sha")]
        SHA256 => Some(sha256()),
        #[cfg(feature = "sha")]
        SHA384 => Some(sha384()),
        #[cfg(feature = "sha")]
        SHA512 => Some(sha512()),
        #[cfg(feature = "sha3")]
        SHA3_256 => Some(sha3_256()),
        #[cfg(feature = "sha3")]
        SHA3_512 => Some(sha3_512()),
        _ => None,
    }
}

/// Names of every built-in family compiled into this build
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    [MD5, SHA1, SHA224, SHA256, SHA384, SHA512, SHA3_256, SHA3_512]
        .into_iter()
        .filter(|name| builtin(name).is_some())
        .collect()
}

/// Register every enabled built-in family
#[must_use]
pub fn register_builtin(builder: RegistryBuilder) -> RegistryBuilder {
    builtin_names().into_iter().fold(builder, |builder, name| {
        match builtin(name) {
            Some(factory) => builder.register(name, factory),
            None => builder,
        }
    })
}

/// Register only the named built-in families
///
/// # Errors
///
/// Returns `SaltPassError::UnknownAlgorithm` for a name that is not a
/// built-in family or whose feature is disabled.
pub fn register_selected<S: AsRef<str>>(
    mut builder: RegistryBuilder,
    names: &[S],
) -> Result<RegistryBuilder> {
    for name in names {
        let name = name.as_ref();
        let factory =
            builtin(name).ok_or_else(|| SaltPassError::UnknownAlgorithm(name.to_string()))?;
        builder = builder.register(name, factory);
    }
    Ok(builder)
}
