//! # Hash Pipeline
//!
//! Seed salting and bit-width reduction around an opaque 64-bit primitive.
//!
//! The primitive itself is a black box supplied from outside (the native
//! binding in production, a pure-Rust stand-in under test). Everything in
//! this module only assembles its input and post-processes its output.

pub mod reduce;
pub mod salted;

use std::sync::Arc;

use crate::error::HashResult;

pub use reduce::*;
pub use salted::*;

/// Static seed shared with the remote verifier.
///
/// Changing it breaks every fingerprint without any error on either side.
pub const HASH_SEED: u32 = 0x6124_7FBF;

/// Opaque 64-bit hash over a byte buffer
pub trait HashPrimitive: Send + Sync {
    /// Hash the whole buffer
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64>;
}

impl<P: HashPrimitive + ?Sized> HashPrimitive for Arc<P> {
    #[inline]
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        (**self).compute_hash(data)
    }
}

impl<P: HashPrimitive + ?Sized> HashPrimitive for &P {
    #[inline]
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        (**self).compute_hash(data)
    }
}
