//! # Native Hash Binding
//!
//! Loads the platform hash library and exposes its `compute_hash` export
//! as a [`HashPrimitive`].
//!
//! ## Lifecycle
//!
//! A [`NativeHash`] can be loaded and dropped like any value. Hosts that want
//! one process-wide binding use [`shared`], which loads on first use and
//! never reloads.

mod library;
pub mod platform;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::{HashError, HashResult};
use crate::hash::HashPrimitive;
use crate::signer::SignerConfig;

use library::{ComputeHashFn, Library};

pub use platform::{library_name_for, platform_library_name};

/// Process-wide binding
static SHARED: OnceCell<Arc<NativeHash>> = OnceCell::new();

/// The vendor hash primitive behind a dynamically loaded library
pub struct NativeHash {
    compute: ComputeHashFn,
    path: PathBuf,
    _library: Library,
}

impl NativeHash {
    /// Load `path` and resolve `symbol`
    pub fn load(path: impl AsRef<Path>, symbol: &str) -> HashResult<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(HashError::unavailable(format!(
                "could not find {} hash library {}",
                std::env::consts::OS,
                path.display()
            )));
        }

        let library = Library::open(path)?;
        // SAFETY: the vendor export is `uint64_t compute_hash(const uint8_t*, uint32_t)`.
        let compute = unsafe { library.compute_hash_fn(symbol)? };

        log::info!("Native hash library loaded: {} ({})", path.display(), symbol);

        Ok(Self {
            compute,
            path: path.to_path_buf(),
            _library: library,
        })
    }

    /// Load the library named by `config`
    pub fn from_config(config: &SignerConfig) -> HashResult<Self> {
        Self::load(config.resolve_library_path()?, &config.symbol)
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HashPrimitive for NativeHash {
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        let len = u32::try_from(data.len()).map_err(|_| {
            HashError::InvalidInput(format!(
                "buffer of {} bytes exceeds the primitive's u32 length",
                data.len()
            ))
        })?;

        // SAFETY: the export only reads `len` bytes from `data`.
        Ok(unsafe { (self.compute)(data.as_ptr(), len) })
    }
}

impl std::fmt::Debug for NativeHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeHash").field("path", &self.path).finish()
    }
}

/// Process-wide binding, loaded from `config` on first call.
///
/// Later calls return the same instance even if `config` names another
/// library.
pub fn shared(config: &SignerConfig) -> HashResult<Arc<NativeHash>> {
    let native = SHARED.get_or_try_init(|| NativeHash::from_config(config).map(Arc::new))?;

    if let Ok(requested) = config.resolve_library_path() {
        if requested != native.path() {
            log::warn!(
                "Native hash already loaded from {}, ignoring {}",
                native.path().display(),
                requested.display()
            );
        }
    }

    Ok(Arc::clone(native))
}

/// Is the process-wide binding loaded
pub fn is_loaded() -> bool {
    SHARED.get().is_some()
}
