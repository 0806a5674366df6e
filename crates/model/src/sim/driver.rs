//! Host-side protocol driver.
//!
//! The driver owns an [`AluCore`] and speaks the byte-serial protocol at
//! it: four load cycles per operand, a start cycle, status polls until the
//! done bit rises, then four readout cycles. Each helper issues complete
//! pin-accurate cycles, so a sequence of driver calls is exactly the cycle
//! trace a hardware testbench would produce.

use tracing::debug;

use crate::common::constants::{OPERAND_BYTES, STATUS_DONE, STATUS_FLAGS_MASK};
use crate::common::{DriverError, Flags};
use crate::config::Config;
use crate::core::{AluCore, Completion, Operand, Pins};
use crate::isa::Opcode;

/// Drives an [`AluCore`] through the pin protocol.
#[derive(Debug)]
pub struct Driver {
    core: AluCore,
    poll_budget: u64,
    reset_hold: u64,
}

impl Driver {
    /// Creates a driver around a freshly reset core.
    pub fn new(config: &Config) -> Self {
        Self {
            core: AluCore::new(config),
            poll_budget: config.driver.poll_budget.max(1),
            reset_hold: config.driver.reset_hold.max(1),
        }
    }

    /// Shared view of the device under the driver.
    pub const fn core(&self) -> &AluCore {
        &self.core
    }

    /// Exclusive view of the device, for custom pin sequences.
    pub const fn core_mut(&mut self) -> &mut AluCore {
        &mut self.core
    }

    /// Releases the device.
    pub fn into_core(self) -> AluCore {
        self.core
    }

    /// Applies one arbitrary cycle and returns the output byte.
    pub fn step(&mut self, pins: Pins) -> u8 {
        self.core.tick(pins)
    }

    /// Holds reset asserted for the configured number of cycles.
    pub fn reset(&mut self) {
        debug!("reset: holding for {} cycles", self.reset_hold);
        for _ in 0..self.reset_hold {
            let _ = self.core.tick(Pins::reset());
        }
    }

    /// Loads one operand byte (index 0 is the LSB).
    pub fn load_byte(&mut self, reg: Operand, index: u8, value: u8) {
        let _ = self.core.tick(Pins::load(reg.slot(index), value));
    }

    /// Loads all four bytes of operand A, least significant first.
    pub fn load_a(&mut self, value: u32) {
        self.load_word(Operand::A, value);
    }

    /// Loads all four bytes of operand B, least significant first.
    pub fn load_b(&mut self, value: u32) {
        self.load_word(Operand::B, value);
    }

    fn load_word(&mut self, reg: Operand, value: u32) {
        for index in 0..OPERAND_BYTES {
            self.load_byte(reg, index, (value >> (u32::from(index) * 8)) as u8);
        }
    }

    /// Strobes a start of `op`.
    pub fn start(&mut self, op: Opcode) {
        let _ = self.core.tick(Pins::start(op));
    }

    /// Reads the status byte without waiting.
    pub fn read_status(&mut self) -> u8 {
        self.core.tick(Pins::status())
    }

    /// Polls the status byte until the done bit rises.
    ///
    /// Returns the number of polls taken, which for an uncontended
    /// operation equals its latency.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::PollTimeout`] when the done bit stays low
    /// for the whole poll budget.
    pub fn wait_done(&mut self) -> Result<u64, DriverError> {
        for polls in 1..=self.poll_budget {
            let status = self.read_status();
            if status & STATUS_DONE != 0 {
                return Ok(polls);
            }
        }
        Err(DriverError::PollTimeout {
            budget: self.poll_budget,
        })
    }

    /// Reads the 32-bit result, least significant byte first.
    ///
    /// Readout is non-destructive; calling this repeatedly returns the
    /// same value until the next completion or reset.
    pub fn read_result(&mut self) -> u32 {
        let mut value = 0;
        for index in 0..OPERAND_BYTES {
            let byte = self.core.tick(Pins::select(index));
            value |= u32::from(byte) << (u32::from(index) * 8);
        }
        value
    }

    /// Reads the flags nibble out of the status byte.
    pub fn read_flags(&mut self) -> Flags {
        Flags::from_nibble(self.read_status() & STATUS_FLAGS_MASK)
    }

    /// Runs one full operation through the pin protocol.
    ///
    /// Loads both operands, strobes the start, polls for completion, and
    /// reads back the result and flags.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::PollTimeout`] when the poll budget is
    /// smaller than the operation's latency.
    pub fn compute(&mut self, op: Opcode, a: u32, b: u32) -> Result<Completion, DriverError> {
        self.load_a(a);
        self.load_b(b);
        self.start(op);
        let polls = self.wait_done()?;
        let result = self.read_result();
        let flags = self.read_flags();
        debug!("{op} a={a:#010x} b={b:#010x} -> {result:#010x} [{flags}] in {polls} polls");
        Ok(Completion { op, result, flags })
    }
}
