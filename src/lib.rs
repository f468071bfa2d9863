//! # Fingerprint Core - Request Signature Hashing
//!
//! Bit-exact location and request fingerprints for signed API envelopes.
//!
//! ## Modules
//!
//! - **Codec**: canonical big-endian encoding of `f64` coordinates
//! - **Hash**: seed salting and 64→32 folding around an opaque primitive
//! - **Signer**: location / ticket-seeded location / request fingerprints
//! - **Native**: loader for the platform hash library
//! - **JNI**: exports for the JVM host
//!
//! ## Author
//!
//! Aiblox (Alexsandro Alves de Oliveira)

pub mod codec;
pub mod error;
pub mod hash;
pub mod jni;
pub mod native;
pub mod signer;
pub mod util;

// Re-exports
pub use codec::FloatEncoding;
pub use error::{HashError, HashResult};
pub use hash::{HashPrimitive, HASH_SEED};
pub use native::NativeHash;
pub use signer::{
    location_hash, location_hash_with_ticket, request_hash, Location, SignatureHashes, Signer,
    SignerConfig,
};

use std::sync::Arc;
use std::sync::Once;

/// Library version
pub const VERSION: &str = "1.0.0";

/// Library name
pub const NAME: &str = "fingerprint_core";

/// Logging guard
static LOGGING: Once = Once::new();

/// Load the process-wide native binding and build a signer over it.
///
/// The binding is loaded on the first call only; a load failure is returned
/// as [`HashError::PrimitiveUnavailable`] and nothing is cached.
pub fn initialize(config: SignerConfig) -> HashResult<Signer> {
    LOGGING.call_once(|| {
        init_logging();

        log::info!("{} v{}", NAME, VERSION);
        log::info!("Platform: {} {}", std::env::consts::OS, std::env::consts::ARCH);
    });

    let native = native::shared(&config).map_err(|e| {
        log::error!("Native hash init failed: {}", e);
        e
    })?;

    log::info!("Signer ready ({:?} float encoding)", config.float_encoding);

    Ok(Signer::new(native as Arc<dyn HashPrimitive>, config))
}

/// Is the native binding loaded
pub fn is_initialized() -> bool {
    native::is_loaded()
}

/// Initialize logging
fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .try_init();
}
