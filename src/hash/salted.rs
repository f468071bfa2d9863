//! # Salted Hashing
//!
//! Prepends a big-endian seed to the payload before calling the primitive.

use super::HashPrimitive;
use crate::error::HashResult;

/// Hash `be32(seed) ++ payload`
pub fn salted_hash<P: HashPrimitive + ?Sized>(primitive: &P, seed: u32, payload: &[u8]) -> HashResult<u64> {
    primitive.compute_hash(&salted_buffer(&seed.to_be_bytes(), payload))
}

/// Hash `be64(seed) ++ payload`
pub fn salted_hash64<P: HashPrimitive + ?Sized>(primitive: &P, seed: u64, payload: &[u8]) -> HashResult<u64> {
    primitive.compute_hash(&salted_buffer(&seed.to_be_bytes(), payload))
}

fn salted_buffer(seed: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(seed.len() + payload.len());
    buf.extend_from_slice(seed);
    buf.extend_from_slice(payload);
    buf
}
