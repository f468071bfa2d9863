//! # Signer Configuration
//!
//! Configuration parsed from host-provided JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::codec::FloatEncoding;
use crate::error::HashResult;
use crate::native::platform_library_name;

/// Accuracy used when the caller does not report one
pub const DEFAULT_ACCURACY: f64 = 5.0;

/// Signer configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Explicit path to the native hash library (overrides `library_dir`)
    #[serde(rename = "libraryPath")]
    pub library_path: Option<PathBuf>,

    /// Directory holding the per-platform hash libraries
    #[serde(rename = "libraryDir")]
    pub library_dir: PathBuf,

    /// Exported hash entry point
    pub symbol: String,

    /// Coordinate byte encoding
    #[serde(rename = "floatEncoding")]
    pub float_encoding: FloatEncoding,

    /// Accuracy used by `Signer::location`
    #[serde(rename = "defaultAccuracy")]
    pub default_accuracy: f64,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            library_dir: PathBuf::from("lib"),
            symbol: "compute_hash".to_string(),
            float_encoding: FloatEncoding::FixedWidth,
            default_accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl SignerConfig {
    /// Parse config from bytes (JSON)
    pub fn from_bytes(data: &[u8]) -> HashResult<Self> {
        if data.is_empty() {
            log::warn!("Empty config data, using defaults");
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_slice(data)?;
        log::debug!("Signer config loaded: {:?}", config);
        Ok(config)
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> HashResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Path of the native library to load
    pub fn resolve_library_path(&self) -> HashResult<PathBuf> {
        match &self.library_path {
            Some(path) => Ok(path.clone()),
            None => Ok(self.library_dir.join(platform_library_name()?)),
        }
    }
}
