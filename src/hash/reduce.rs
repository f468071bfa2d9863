//! # Bit-Width Reduction
//!
//! Folding and two's-complement reinterpretation of raw hash output.
//! All arithmetic is done on the unsigned pattern.

/// XOR of the high and low 32-bit words
#[inline]
pub fn fold_to_uint32(h: u64) -> u32 {
    ((h >> 32) as u32) ^ (h as u32)
}

/// Two's-complement reinterpretation (values >= 2^31 become negative)
#[inline]
pub fn reinterpret_as_int32(v: u32) -> i32 {
    v as i32
}

/// Two's-complement reinterpretation (values >= 2^63 become negative)
#[inline]
pub fn reinterpret_as_int64(v: u64) -> i64 {
    v as i64
}
