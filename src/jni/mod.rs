//! # JNI Bindings for Fingerprint Core
//!
//! Exports that let the JVM host create a signer and compute fingerprints.
//!
//! ## Safety
//!
//! All JNI functions are inherently unsafe as they deal with raw pointers
//! from the JVM. Handles and arrays are validated before use, and every
//! error is raised as a Java exception.

pub mod bridge;
pub mod types;

pub use bridge::*;
