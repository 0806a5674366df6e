//! Simulator configuration.
//!
//! Configuration is split into two sections: timing parameters of the
//! device model itself and knobs for the host-side protocol driver. Every
//! field has a default, so any subset of the JSON may be supplied,
//! including the empty object.

use serde::Deserialize;

use crate::common::DriverError;

/// Default values used when a field is absent from the configuration.
pub mod defaults {
    /// Multiply latency in clock cycles.
    pub const MUL_LATENCY: u64 = 8;
    /// Divide latency in clock cycles.
    pub const DIV_LATENCY: u64 = 16;
    /// Status polls the driver issues before declaring a timeout.
    pub const POLL_BUDGET: u64 = 20;
    /// Cycles the driver holds reset asserted.
    pub const RESET_HOLD: u64 = 2;
}

/// Latency model of the execution engine.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Cycles a multiply spends in the running state. Clamped to at least
    /// one: no operation can complete on its own start edge.
    #[serde(default = "TimingConfig::default_mul_latency")]
    pub mul_latency: u64,
    /// Cycles a divide spends in the running state. Clamped like
    /// `mul_latency`.
    #[serde(default = "TimingConfig::default_div_latency")]
    pub div_latency: u64,
}

impl TimingConfig {
    /// Returns the default multiply latency.
    fn default_mul_latency() -> u64 {
        defaults::MUL_LATENCY
    }

    /// Returns the default divide latency.
    fn default_div_latency() -> u64 {
        defaults::DIV_LATENCY
    }
}

/// Protocol driver behavior.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct DriverConfig {
    /// Maximum status polls per operation before `PollTimeout`.
    #[serde(default = "DriverConfig::default_poll_budget")]
    pub poll_budget: u64,
    /// Cycles reset is held asserted by [`Driver::reset`].
    ///
    /// [`Driver::reset`]: crate::sim::Driver::reset
    #[serde(default = "DriverConfig::default_reset_hold")]
    pub reset_hold: u64,
}

impl DriverConfig {
    /// Returns the default poll budget.
    fn default_poll_budget() -> u64 {
        defaults::POLL_BUDGET
    }

    /// Returns the default reset hold time.
    fn default_reset_hold() -> u64 {
        defaults::RESET_HOLD
    }
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// ```
/// use ttalu_core::Config;
///
/// let config = Config::from_json(r#"{ "timing": { "div_latency": 12 } }"#).unwrap();
/// assert_eq!(config.timing.div_latency, 12);
/// assert_eq!(config.timing.mul_latency, 8);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Execution engine latencies.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Protocol driver knobs.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidConfig`] when the string is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, DriverError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            driver: DriverConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mul_latency: defaults::MUL_LATENCY,
            div_latency: defaults::DIV_LATENCY,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_budget: defaults::POLL_BUDGET,
            reset_hold: defaults::RESET_HOLD,
        }
    }
}
