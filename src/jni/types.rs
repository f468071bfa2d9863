//! # JNI Type Conversions
//!
//! Signer handles and error mapping for JNI interop.

use crate::error::{HashError, HashResult};
use crate::signer::Signer;

/// A signer handle that can be passed to/from Java
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NativeHandle(pub u64);

impl NativeHandle {
    pub const INVALID: NativeHandle = NativeHandle(0);

    /// Move `signer` to the heap and hand out its address
    pub fn from_signer(signer: Signer) -> Self {
        NativeHandle(Box::into_raw(Box::new(signer)) as u64)
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub fn to_jlong(&self) -> i64 {
        self.0 as i64
    }

    pub fn from_jlong(value: i64) -> Self {
        NativeHandle(value as u64)
    }

    /// Borrow the signer behind this handle
    ///
    /// # Safety
    /// Handle must come from [`NativeHandle::from_signer`] and not be released.
    pub unsafe fn signer<'a>(self) -> HashResult<&'a Signer> {
        if !self.is_valid() {
            return Err(HashError::InvalidInput("invalid native handle".to_string()));
        }
        Ok(&*(self.0 as *const Signer))
    }

    /// Drop the signer behind this handle
    ///
    /// # Safety
    /// Handle must come from [`NativeHandle::from_signer`] and is dead afterwards.
    pub unsafe fn release(self) {
        if self.is_valid() {
            drop(Box::from_raw(self.0 as *mut Signer));
        }
    }
}

impl From<u64> for NativeHandle {
    fn from(value: u64) -> Self {
        NativeHandle(value)
    }
}

impl From<NativeHandle> for u64 {
    fn from(handle: NativeHandle) -> Self {
        handle.0
    }
}

/// Java exception class raised for `err`
pub fn exception_class(err: &HashError) -> &'static str {
    match err {
        HashError::InvalidInput(_) => "java/lang/IllegalArgumentException",
        HashError::PrimitiveUnavailable { .. } | HashError::Config(_) => "java/lang/IllegalStateException",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::{Location, SignerConfig};
    use crate::util::hash::Fnv1a64;
    use std::sync::Arc;

    #[test]
    fn test_invalid_handle() {
        assert!(!NativeHandle::INVALID.is_valid());
        let err = unsafe { NativeHandle::from_jlong(0).signer() }.unwrap_err();
        assert!(matches!(err, HashError::InvalidInput(_)));
    }

    #[test]
    fn test_handle_round_trip() {
        let handle = NativeHandle::from_signer(Signer::new(Arc::new(Fnv1a64), SignerConfig::default()));
        let handle = NativeHandle::from_jlong(handle.to_jlong());

        let hash = unsafe { handle.signer() }
            .unwrap()
            .location_hash(&Location::new(1.0, 2.0))
            .unwrap();
        assert_eq!(hash, -207_602_563);

        unsafe { handle.release() };
    }

    #[test]
    fn test_exception_class() {
        assert_eq!(
            exception_class(&HashError::InvalidInput("x".into())),
            "java/lang/IllegalArgumentException"
        );
        assert_eq!(
            exception_class(&HashError::Config("x".into())),
            "java/lang/IllegalStateException"
        );
    }
}
