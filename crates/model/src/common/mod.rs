//! Shared definitions used across the simulator.

pub mod constants;
pub mod error;
pub mod flags;

pub use error::DriverError;
pub use flags::Flags;
