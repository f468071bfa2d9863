//! # Request Signer
//!
//! Location and request fingerprints attached to every signed request
//! envelope.
//!
//! ## Pipelines
//!
//! - location: `i32(fold(H(be32(seed) ++ lat ++ lng ++ acc)))`
//! - location with ticket: same, with `seed = fold(H(be32(HASH_SEED) ++ ticket))`
//! - request: `i64(H(be64(H(be32(HASH_SEED) ++ ticket)) ++ request))`
//!
//! The chained seed of the ticket-seeded location hash is the folded
//! *unsigned* 32-bit value, while the request hash chains the full unfolded
//! 64-bit value.

pub mod config;

use std::sync::Arc;

use crate::codec::{encode_location, FloatEncoding};
use crate::error::HashResult;
use crate::hash::{
    fold_to_uint32, reinterpret_as_int32, reinterpret_as_int64, salted_hash, salted_hash64,
    HashPrimitive, HASH_SEED,
};

pub use config::{SignerConfig, DEFAULT_ACCURACY};

/// A position fix to fingerprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
}

impl Location {
    /// Location with the default accuracy
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: DEFAULT_ACCURACY,
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }
}

/// Every fingerprint of one signed envelope
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureHashes {
    pub location_hash_by_token_seed: i32,
    pub location_hash: i32,
    /// One per sub-request, same order as the input
    pub request_hashes: Vec<i64>,
}

/// 32-bit signed location fingerprint under `seed`
pub fn location_hash<P: HashPrimitive + ?Sized>(
    primitive: &P,
    lat: f64,
    lng: f64,
    accuracy: f64,
    seed: u32,
) -> HashResult<i32> {
    encoded_location_hash(primitive, lat, lng, accuracy, seed, FloatEncoding::FixedWidth)
}

/// Location fingerprint seeded by the auth ticket
pub fn location_hash_with_ticket<P: HashPrimitive + ?Sized>(
    primitive: &P,
    auth_ticket: &[u8],
    lat: f64,
    lng: f64,
    accuracy: f64,
) -> HashResult<i32> {
    encoded_location_hash_with_ticket(primitive, auth_ticket, lat, lng, accuracy, FloatEncoding::FixedWidth)
}

/// 64-bit signed fingerprint of one serialized request
pub fn request_hash<P: HashPrimitive + ?Sized>(
    primitive: &P,
    auth_ticket: &[u8],
    request_bytes: &[u8],
) -> HashResult<i64> {
    let stage1 = ticket_hash(primitive, auth_ticket)?;
    chained_request_hash(primitive, stage1, request_bytes)
}

/// `H(be32(HASH_SEED) ++ ticket)`, shared by both ticket-seeded pipelines
fn ticket_hash<P: HashPrimitive + ?Sized>(primitive: &P, auth_ticket: &[u8]) -> HashResult<u64> {
    salted_hash(primitive, HASH_SEED, auth_ticket)
}

fn chained_request_hash<P: HashPrimitive + ?Sized>(
    primitive: &P,
    stage1: u64,
    request_bytes: &[u8],
) -> HashResult<i64> {
    let h = salted_hash64(primitive, stage1, request_bytes)?;
    Ok(reinterpret_as_int64(h))
}

fn encoded_location_hash<P: HashPrimitive + ?Sized>(
    primitive: &P,
    lat: f64,
    lng: f64,
    accuracy: f64,
    seed: u32,
    encoding: FloatEncoding,
) -> HashResult<i32> {
    let payload = encode_location(lat, lng, accuracy, encoding);
    let h = salted_hash(primitive, seed, &payload)?;
    let hash = reinterpret_as_int32(fold_to_uint32(h));

    log::trace!("location hash ({}, {}, {}) seed={:#010x} -> {}", lat, lng, accuracy, seed, hash);
    Ok(hash)
}

fn encoded_location_hash_with_ticket<P: HashPrimitive + ?Sized>(
    primitive: &P,
    auth_ticket: &[u8],
    lat: f64,
    lng: f64,
    accuracy: f64,
    encoding: FloatEncoding,
) -> HashResult<i32> {
    let seed = fold_to_uint32(ticket_hash(primitive, auth_ticket)?);
    encoded_location_hash(primitive, lat, lng, accuracy, seed, encoding)
}

/// Computes fingerprints with an injected primitive
#[derive(Clone)]
pub struct Signer {
    primitive: Arc<dyn HashPrimitive>,
    config: SignerConfig,
}

impl Signer {
    /// Create a signer over `primitive`
    pub fn new(primitive: Arc<dyn HashPrimitive>, config: SignerConfig) -> Self {
        Self { primitive, config }
    }

    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// Location at the configured default accuracy
    pub fn location(&self, latitude: f64, longitude: f64) -> Location {
        Location::new(latitude, longitude).with_accuracy(self.config.default_accuracy)
    }

    /// Location fingerprint under the static seed
    pub fn location_hash(&self, location: &Location) -> HashResult<i32> {
        encoded_location_hash(
            &*self.primitive,
            location.latitude,
            location.longitude,
            location.accuracy,
            HASH_SEED,
            self.config.float_encoding,
        )
    }

    /// Location fingerprint seeded by `auth_ticket`
    pub fn location_hash_with_ticket(&self, auth_ticket: &[u8], location: &Location) -> HashResult<i32> {
        encoded_location_hash_with_ticket(
            &*self.primitive,
            auth_ticket,
            location.latitude,
            location.longitude,
            location.accuracy,
            self.config.float_encoding,
        )
    }

    /// Fingerprint of one serialized request
    pub fn request_hash(&self, auth_ticket: &[u8], request_bytes: &[u8]) -> HashResult<i64> {
        request_hash(&*self.primitive, auth_ticket, request_bytes)
    }

    /// All fingerprints for one envelope.
    ///
    /// The ticket is hashed once: folded it seeds the location hash, unfolded
    /// it seeds every request hash. Fails on the first error; no partial
    /// result is returned.
    pub fn sign<R: AsRef<[u8]>>(
        &self,
        auth_ticket: &[u8],
        location: &Location,
        requests: &[R],
    ) -> HashResult<SignatureHashes> {
        let span = tracing::debug_span!("sign", requests = requests.len());
        let _enter = span.enter();

        let primitive = &*self.primitive;
        let stage1 = ticket_hash(primitive, auth_ticket)?;

        let request_hashes = requests
            .iter()
            .map(|req| chained_request_hash(primitive, stage1, req.as_ref()))
            .collect::<HashResult<Vec<_>>>()?;

        let location_hash_by_token_seed = encoded_location_hash(
            primitive,
            location.latitude,
            location.longitude,
            location.accuracy,
            fold_to_uint32(stage1),
            self.config.float_encoding,
        )?;

        Ok(SignatureHashes {
            location_hash_by_token_seed,
            location_hash: self.location_hash(location)?,
            request_hashes,
        })
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer").field("config", &self.config).finish_non_exhaustive()
    }
}
