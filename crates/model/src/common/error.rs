//! Host-side error types.
//!
//! The device model itself has no fault paths: every pin pattern decodes to
//! a defined behavior and divide-by-zero produces a defined result. Errors
//! only arise on the host side of the pins, in the driver and in
//! configuration parsing.

use thiserror::Error;

/// Errors returned by the protocol driver and configuration loading.
#[derive(Debug, Error)]
pub enum DriverError {
    /// An operation did not report done within the configured poll budget.
    #[error("operation still running after {budget} status polls")]
    PollTimeout {
        /// Number of status polls issued before giving up.
        budget: u64,
    },

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
