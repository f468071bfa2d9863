//! # Float Codec
//!
//! Canonical byte encoding of `f64` coordinates for hashing.
//!
//! A coordinate is hashed as the raw IEEE-754 bit pattern written most
//! significant byte first, always 8 bytes wide.

use serde::{Deserialize, Serialize};

/// Encoded width of a single coordinate
pub const FLOAT_WIDTH: usize = 8;

/// How coordinates are turned into bytes before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloatEncoding {
    /// Exactly 8 big-endian bytes per value
    #[default]
    FixedWidth,
    /// Leading zero bytes dropped (hex round-trip behaviour of older clients)
    LegacyTrimmed,
}

impl FloatEncoding {
    /// Append the encoding of `x` to `out`
    #[inline]
    pub fn encode_into(self, x: f64, out: &mut Vec<u8>) {
        match self {
            FloatEncoding::FixedWidth => out.extend_from_slice(&float_to_big_endian_bytes(x)),
            FloatEncoding::LegacyTrimmed => out.extend_from_slice(trimmed(&float_to_big_endian_bytes(x))),
        }
    }
}

/// Bit-exact reinterpretation of an `f64`
#[inline]
pub fn float_to_raw_bits(x: f64) -> u64 {
    x.to_bits()
}

/// Raw bit pattern of `x`, most significant byte first
#[inline]
pub fn float_to_big_endian_bytes(x: f64) -> [u8; FLOAT_WIDTH] {
    float_to_raw_bits(x).to_be_bytes()
}

/// Inverse of [`float_to_big_endian_bytes`]
#[inline]
pub fn bytes_to_float(b: [u8; FLOAT_WIDTH]) -> f64 {
    f64::from_bits(u64::from_be_bytes(b))
}

/// Big-endian bit pattern with leading zero bytes removed.
///
/// Never returns fewer than one byte: `0.0` encodes as `[0x00]`.
pub fn float_to_trimmed_bytes(x: f64) -> Vec<u8> {
    trimmed(&float_to_big_endian_bytes(x)).to_vec()
}

fn trimmed(bytes: &[u8; FLOAT_WIDTH]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(FLOAT_WIDTH - 1);
    &bytes[start..]
}

/// `enc(lat) ++ enc(lng) ++ enc(accuracy)`
pub fn encode_location(lat: f64, lng: f64, accuracy: f64, encoding: FloatEncoding) -> Vec<u8> {
    let mut out = Vec::with_capacity(FLOAT_WIDTH * 3);
    encoding.encode_into(lat, &mut out);
    encoding.encode_into(lng, &mut out);
    encoding.encode_into(accuracy, &mut out);
    out
}
