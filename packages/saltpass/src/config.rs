//! Serializable settings for building a [`SaltPass`](crate::SaltPass)

use serde::{Deserialize, Serialize};

use crate::encoding::EncodingKind;
use crate::salt::{DEFAULT_SALT_LEN, MIN_SALT_LEN};
use crate::{Result, SaltPassError};

/// Facade configuration
///
/// Every field has a default, so an empty document is a valid configuration:
///
/// ```
/// let config: saltpass::SaltPassConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.default_salt_len, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaltPassConfig {
    /// Encoding for the string API
    pub encoding: EncodingKind,
    /// Salt length substituted when a caller requests zero bytes
    pub default_salt_len: usize,
    /// Built-in algorithms to register; `None` registers all of them
    pub algorithms: Option<Vec<String>>,
}

impl Default for SaltPassConfig {
    fn default() -> Self {
        Self {
            encoding: EncodingKind::default(),
            default_salt_len: DEFAULT_SALT_LEN,
            algorithms: None,
        }
    }
}

impl SaltPassConfig {
    /// Check the settings that cannot be expressed in the type
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::InsufficientEntropy` if `default_salt_len` is
    /// below the entropy floor.
    pub fn validate(&self) -> Result<()> {
        if self.default_salt_len < MIN_SALT_LEN {
            return Err(SaltPassError::InsufficientEntropy {
                requested: self.default_salt_len,
            });
        }
        Ok(())
    }
}
