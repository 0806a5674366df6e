//! A cycle-accurate simulator of a byte-serial 32-bit ALU.
//!
//! The device sits behind a deliberately narrow synchronous interface:
//! eight input pins carry a control word, eight bidirectional pins carry
//! load data or a readout selector, and eight output pins drive the
//! selected byte back. This crate models it with the following:
//!
//! 1. **Core:** the pin-sampled device model, ticked one clock edge at a
//!    time, with operand file, combinational ALU, multi-cycle execution
//!    engine, and readout multiplexer.
//! 2. **ISA:** the 3-bit opcode set and the control-word command format.
//! 3. **Driver:** a host-side helper that speaks the full protocol, from
//!    byte loads through status polling to result readout.
//! 4. **Config:** JSON-loadable latency and driver parameters.
//!
//! # Examples
//!
//! ```
//! use ttalu_core::{Config, Driver, Opcode};
//!
//! let mut driver = Driver::new(&Config::default());
//! driver.reset();
//! let done = driver.compute(Opcode::Add, 20, 30).unwrap();
//! assert_eq!(done.result, 50);
//! ```

/// Shared definitions: protocol constants, flags, error types.
pub mod common;
/// Simulator configuration.
pub mod config;
/// The device model.
pub mod core;
/// Opcodes and bus commands.
pub mod isa;
/// Host-side protocol driver.
pub mod sim;
/// Simulation statistics.
pub mod stats;

pub use crate::common::{DriverError, Flags};
pub use crate::config::Config;
pub use crate::core::{AluCore, Completion, OpState, Operand, Pins};
pub use crate::isa::Opcode;
pub use crate::sim::Driver;
pub use crate::stats::SimStats;
