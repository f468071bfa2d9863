//! # Utilities

pub mod hash;
