//! # Unit Tests
//!
//! Fine-grained tests for the individual blocks of the device model, plus
//! the host-side pieces around it: configuration, statistics, and the
//! protocol driver.




/// Unit tests for configuration deserialization and defaults.
pub mod config;

/// Unit tests for the simulation statistics counters.
pub mod stats;
