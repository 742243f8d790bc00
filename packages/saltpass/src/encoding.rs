//! Byte/text encodings used by the string API

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::GeneralPurpose;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Reversible mapping between bytes and text
pub trait Encoding: Send + Sync + fmt::Debug {
    /// Encode `bytes` as text
    fn encode(&self, bytes: &[u8]) -> String;

    /// Decode text produced by [`encode`](Encoding::encode)
    ///
    /// # Errors
    ///
    /// Returns the decoder's error when `text` is not valid in this encoding.
    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError>;
}

/// Base64 over one of the `base64` crate's general purpose engines
#[derive(Clone, Copy)]
pub struct Base64Encoding {
    engine: &'static GeneralPurpose,
    name: &'static str,
}

impl Base64Encoding {
    /// URL-safe alphabet with padding; the crate default
    #[must_use]
    pub const fn url_safe() -> Self {
        Self {
            engine: &general_purpose::URL_SAFE,
            name: "base64url",
        }
    }

    /// URL-safe alphabet without padding
    #[must_use]
    pub const fn url_safe_no_pad() -> Self {
        Self {
            engine: &general_purpose::URL_SAFE_NO_PAD,
            name: "base64url-nopad",
        }
    }

    /// Standard alphabet with padding
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            engine: &general_purpose::STANDARD,
            name: "base64",
        }
    }
}

impl Default for Base64Encoding {
    fn default() -> Self {
        Self::url_safe()
    }
}

impl fmt::Debug for Base64Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Base64Encoding").field(&self.name).finish()
    }
}

impl Encoding for Base64Encoding {
    fn encode(&self, bytes: &[u8]) -> String {
        self.engine.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        Ok(self.engine.decode(text)?)
    }
}

/// Lowercase hexadecimal
#[derive(Debug, Clone, Copy, Default)]
pub struct HexEncoding;

impl Encoding for HexEncoding {
    fn encode(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        Ok(hex::decode(text)?)
    }
}

/// Named encoding choice, as it appears in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EncodingKind {
    /// URL-safe base64 with padding
    #[default]
    #[serde(rename = "base64url")]
    Base64Url,
    /// URL-safe base64 without padding
    #[serde(rename = "base64url-nopad")]
    Base64UrlNoPad,
    /// Standard base64 with padding
    #[serde(rename = "base64")]
    Base64,
    /// Lowercase hexadecimal
    #[serde(rename = "hex")]
    Hex,
}

impl EncodingKind {
    /// Configuration name of this encoding
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base64Url => "base64url",
            Self::Base64UrlNoPad => "base64url-nopad",
            Self::Base64 => "base64",
            Self::Hex => "hex",
        }
    }

    /// Instantiate the encoding
    #[must_use]
    pub fn build(self) -> Box<dyn Encoding> {
        match self {
            Self::Base64Url => Box::new(Base64Encoding::url_safe()),
            Self::Base64UrlNoPad => Box::new(Base64Encoding::url_safe_no_pad()),
            Self::Base64 => Box::new(Base64Encoding::standard()),
            Self::Hex => Box::new(HexEncoding),
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an [`EncodingKind`] name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding: {0:?}")]
pub struct UnknownEncoding(pub String);

impl FromStr for EncodingKind {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64url" => Ok(Self::Base64Url),
            "base64url-nopad" => Ok(Self::Base64UrlNoPad),
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}
