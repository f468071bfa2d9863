//! # Stand-in Hash Primitives
//!
//! Pure-Rust primitives for tests, benchmarks and offline tooling. They are
//! deterministic but are NOT the verifier's algorithm.

use parking_lot::Mutex;

use crate::error::HashResult;
use crate::hash::HashPrimitive;

/// FNV-1a hash (fast, non-cryptographic)
pub fn fnv1a(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    let mut hash = FNV_OFFSET;
    for byte in data {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// FNV-1a 64 as a [`HashPrimitive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1a64;

impl HashPrimitive for Fnv1a64 {
    #[inline]
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        Ok(fnv1a(data))
    }
}

/// Wraps a primitive and keeps a copy of every buffer it hashes
pub struct RecordingHash<P> {
    inner: P,
    calls: Mutex<Vec<Vec<u8>>>,
}

impl<P: HashPrimitive> RecordingHash<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Buffers seen so far, in call order
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().clone()
    }

    /// Forget recorded buffers
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<P: HashPrimitive> HashPrimitive for RecordingHash<P> {
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        self.calls.lock().push(data.to_vec());
        self.inner.compute_hash(data)
    }
}
