//! # Signature Integration Tests
//!
//! End-to-end fingerprint pipelines over stand-in primitives.

use std::sync::Arc;

use fingerprint_core::util::hash::{Fnv1a64, RecordingHash};
use fingerprint_core::*;

/// Returns the first 8 bytes of the buffer (zero padded) as a big-endian
/// `u64`, so every hash exposes the seed it was salted with.
struct PrefixHash;

impl HashPrimitive for PrefixHash {
    fn compute_hash(&self, data: &[u8]) -> HashResult<u64> {
        let mut word = [0u8; 8];
        let n = data.len().min(8);
        word[..n].copy_from_slice(&data[..n]);
        Ok(u64::from_be_bytes(word))
    }
}

/// Always fails, like a binding that went away
struct Unavailable;

impl HashPrimitive for Unavailable {
    fn compute_hash(&self, _data: &[u8]) -> HashResult<u64> {
        Err(HashError::PrimitiveUnavailable {
            reason: "binding not loaded".to_string(),
        })
    }
}

#[cfg(test)]
mod location_hash_tests {
    use super::*;

    #[test]
    fn test_golden_value() {
        assert_eq!(
            location_hash(&Fnv1a64, 1.0, 2.0, 5.0, HASH_SEED).unwrap(),
            -207_602_563
        );
    }

    #[test]
    fn test_deterministic() {
        let inputs = [(1.0, 2.0, 5.0), (40.7128, -74.006, 10.0), (0.0, 0.0, 0.0), (-33.86, 151.2, 65.0)];

        for (lat, lng, acc) in inputs {
            let a = location_hash(&Fnv1a64, lat, lng, acc, HASH_SEED).unwrap();
            let b = location_hash(&Fnv1a64, lat, lng, acc, HASH_SEED).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_buffer_layout() {
        let recorder = RecordingHash::new(Fnv1a64);
        location_hash(&recorder, 1.0, 2.0, 5.0, HASH_SEED).unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);

        let mut expected = HASH_SEED.to_be_bytes().to_vec();
        expected.extend_from_slice(&1.0f64.to_bits().to_be_bytes());
        expected.extend_from_slice(&2.0f64.to_bits().to_be_bytes());
        expected.extend_from_slice(&5.0f64.to_bits().to_be_bytes());
        assert_eq!(calls[0], expected);
        assert_eq!(&calls[0][..4], &[0x61, 0x24, 0x7F, 0xBF]);
    }

    #[test]
    fn test_prefix_stub() {
        // fold(0x61247FBF_3FF00000)
        assert_eq!(
            location_hash(&PrefixHash, 1.0, 2.0, 5.0, HASH_SEED).unwrap(),
            1_590_984_639
        );
    }

    #[test]
    fn test_seed_changes_result() {
        let a = location_hash(&Fnv1a64, 1.0, 2.0, 5.0, HASH_SEED).unwrap();
        let b = location_hash(&Fnv1a64, 1.0, 2.0, 5.0, HASH_SEED + 1).unwrap();
        assert_ne!(a, b);
    }
}

#[cfg(test)]
mod seed_chaining_tests {
    use super::*;

    #[test]
    fn test_ticket_seed_is_folded_u32() {
        let recorder = RecordingHash::new(PrefixHash);
        let hash = location_hash_with_ticket(&recorder, b"ABCD", 1.0, 2.0, 5.0).unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], b"\x61\x24\x7F\xBFABCD".to_vec());

        // 0x61247FBF ^ 0x41424344, 4 bytes wide, then the 24 coordinate bytes
        assert_eq!(calls[1].len(), 4 + 24);
        assert_eq!(&calls[1][..4], &[0x20, 0x66, 0x3C, 0xFB]);

        // fold(0x20663CFB_3FF00000)
        assert_eq!(hash, 529_939_707);
    }

    #[test]
    fn test_negative_intermediate_keeps_unsigned_bits() {
        let recorder = RecordingHash::new(PrefixHash);
        let hash = location_hash_with_ticket(&recorder, &[0xFF, 0x00, 0x00, 0x00], 1.0, 2.0, 5.0).unwrap();

        // fold = 0x9E247FBF, which is negative as an i32
        let calls = recorder.calls();
        assert_eq!(&calls[1][..4], &[0x9E, 0x24, 0x7F, 0xBF]);
        assert_eq!(hash, -1_579_909_185);
    }

    #[test]
    fn test_matches_manual_composition() {
        let ticket = b"auth-ticket-bytes";
        let seed = hash::fold_to_uint32(hash::salted_hash(&Fnv1a64, HASH_SEED, ticket).unwrap());

        assert_eq!(
            location_hash_with_ticket(&Fnv1a64, ticket, 37.42, -122.08, 5.0).unwrap(),
            location_hash(&Fnv1a64, 37.42, -122.08, 5.0, seed).unwrap()
        );
    }

    #[test]
    fn test_golden_value() {
        assert_eq!(
            location_hash_with_ticket(&Fnv1a64, b"ticket", 1.0, 2.0, 5.0).unwrap(),
            731_588_455
        );
    }
}

#[cfg(test)]
mod request_hash_tests {
    use super::*;

    #[test]
    fn test_stage_one_is_unfolded() {
        // PrefixHash returns the 64-bit seed it was handed
        assert_eq!(
            request_hash(&PrefixHash, b"ABCD", b"request").unwrap(),
            0x6124_7FBF_4142_4344
        );
    }

    #[test]
    fn test_golden_value() {
        assert_eq!(
            request_hash(&Fnv1a64, b"ticket", b"request").unwrap(),
            7_208_705_347_143_403_775
        );
    }

    #[test]
    fn test_empty_request() {
        let a = request_hash(&Fnv1a64, b"ticket", b"").unwrap();
        let b = request_hash(&Fnv1a64, b"ticket", b"").unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod signer_tests {
    use super::*;

    fn signer() -> Signer {
        Signer::new(Arc::new(Fnv1a64), SignerConfig::default())
    }

    #[test_log::test]
    fn test_sign_envelope() {
        let signer = signer();
        let location = Location::new(1.0, 2.0);
        let requests: [&[u8]; 3] = [b"request", b"other", b""];

        let hashes = signer.sign(b"ticket", &location, &requests).unwrap();

        assert_eq!(hashes.location_hash, -207_602_563);
        assert_eq!(hashes.location_hash_by_token_seed, 731_588_455);
        assert_eq!(hashes.request_hashes.len(), 3);
        assert_eq!(hashes.request_hashes[0], 7_208_705_347_143_403_775);
        assert_eq!(
            hashes.request_hashes[1],
            request_hash(&Fnv1a64, b"ticket", b"other").unwrap()
        );
    }

    #[test_log::test]
    fn test_sign_without_requests() {
        let hashes = signer()
            .sign::<Vec<u8>>(b"ticket", &Location::new(1.0, 2.0), &[])
            .unwrap();
        assert!(hashes.request_hashes.is_empty());
    }

    #[test_log::test]
    fn test_failure_is_surfaced() {
        let signer = Signer::new(Arc::new(Unavailable), SignerConfig::default());

        let err = signer
            .sign(b"ticket", &Location::new(1.0, 2.0), &[b"request"])
            .unwrap_err();
        assert!(matches!(err, HashError::PrimitiveUnavailable { .. }));

        assert!(signer.location_hash(&Location::new(1.0, 2.0)).is_err());
        assert!(signer.request_hash(b"ticket", b"request").is_err());
    }

    #[test_log::test]
    fn test_initialize_without_library() {
        let config = SignerConfig {
            library_path: Some("/nonexistent/libniantichash.so".into()),
            ..Default::default()
        };

        let err = initialize(config).unwrap_err();
        assert!(matches!(err, HashError::PrimitiveUnavailable { .. }));
        assert!(!is_initialized());
    }
}
