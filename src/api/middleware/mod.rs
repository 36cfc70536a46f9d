//! HTTP middleware for request processing.
//!
//! Provides request tracing and panic-to-envelope conversion.

pub mod panic;
pub mod tracing;
