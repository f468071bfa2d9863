//! # JNI Bridge Implementation
//!
//! Native methods of Java's `NativeSigner` class.
//!
//! ## Function Naming Convention
//!
//! JNI functions must follow this pattern:
//! `Java_<package>_<class>_<method>`
//!
//! For example:
//! `Java_dev_fingerprint_bridge_NativeSigner_nativeCreateSigner`
//!
//! On error a Java exception is pending and the returned value is 0.

use jni::objects::{JByteArray, JClass};
use jni::sys::{jdouble, jint, jlong};
use jni::JNIEnv;

use super::types::{exception_class, NativeHandle};
use crate::error::{HashError, HashResult};
use crate::signer::{Location, SignerConfig};

// ============================================================================
// LIFECYCLE FUNCTIONS
// ============================================================================

/// Create a signer over the process-wide native hash
#[no_mangle]
pub unsafe extern "system" fn Java_dev_fingerprint_bridge_NativeSigner_nativeCreateSigner(
    mut env: JNIEnv,
    _class: JClass,
    config: JByteArray,
) -> jlong {
    log::info!("JNI: nativeCreateSigner called");

    let result = read_bytes(&env, &config, "config")
        .and_then(|bytes| SignerConfig::from_bytes(&bytes))
        .and_then(crate::initialize)
        .map(|signer| {
            let handle = NativeHandle::from_signer(signer);
            log::info!("Signer created at 0x{:x}", handle.0);
            handle.to_jlong()
        });

    unwrap_or_throw(&mut env, result)
}

/// Destroy a signer
#[no_mangle]
pub unsafe extern "system" fn Java_dev_fingerprint_bridge_NativeSigner_nativeDestroySigner(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    NativeHandle::from_jlong(handle).release();
    log::info!("Signer destroyed");
}

// ============================================================================
// HASH FUNCTIONS
// ============================================================================

/// Location hash under the static seed
#[no_mangle]
pub unsafe extern "system" fn Java_dev_fingerprint_bridge_NativeSigner_nativeLocationHash(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    latitude: jdouble,
    longitude: jdouble,
    accuracy: jdouble,
) -> jint {
    let location = Location::new(latitude, longitude).with_accuracy(accuracy);

    let result = NativeHandle::from_jlong(handle)
        .signer()
        .and_then(|signer| signer.location_hash(&location));

    unwrap_or_throw(&mut env, result)
}

/// Location hash seeded by the auth ticket
#[no_mangle]
pub unsafe extern "system" fn Java_dev_fingerprint_bridge_NativeSigner_nativeLocationHashWithTicket(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    auth_ticket: JByteArray,
    latitude: jdouble,
    longitude: jdouble,
    accuracy: jdouble,
) -> jint {
    let location = Location::new(latitude, longitude).with_accuracy(accuracy);

    let result = NativeHandle::from_jlong(handle).signer().and_then(|signer| {
        let ticket = read_bytes(&env, &auth_ticket, "auth ticket")?;
        signer.location_hash_with_ticket(&ticket, &location)
    });

    unwrap_or_throw(&mut env, result)
}

/// Request hash of one serialized request
#[no_mangle]
pub unsafe extern "system" fn Java_dev_fingerprint_bridge_NativeSigner_nativeRequestHash(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    auth_ticket: JByteArray,
    request: JByteArray,
) -> jlong {
    let result = NativeHandle::from_jlong(handle).signer().and_then(|signer| {
        let ticket = read_bytes(&env, &auth_ticket, "auth ticket")?;
        let request = read_bytes(&env, &request, "request")?;
        signer.request_hash(&ticket, &request)
    });

    unwrap_or_throw(&mut env, result)
}

// ============================================================================
// HELPERS
// ============================================================================

fn read_bytes(env: &JNIEnv, array: &JByteArray, name: &str) -> HashResult<Vec<u8>> {
    if array.is_null() {
        return Err(HashError::InvalidInput(format!("{} is null", name)));
    }

    env.convert_byte_array(array)
        .map_err(|e| HashError::InvalidInput(format!("failed to read {}: {}", name, e)))
}

fn unwrap_or_throw<T: Default>(env: &mut JNIEnv, result: HashResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("JNI call failed: {}", e);
            if let Err(throw_err) = env.throw_new(exception_class(&e), e.to_string()) {
                log::error!("Failed to raise Java exception: {}", throw_err);
            }
            T::default()
        }
    }
}
