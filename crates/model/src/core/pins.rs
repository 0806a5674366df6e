//! Pin-level interface sampled on each clock edge.

use crate::common::constants::SEL_STATUS;
use crate::isa::{Opcode, encode_load, encode_start};

/// Input pin state for one clock edge.
///
/// The constructors build the common cycle shapes; tests that need an
/// arbitrary pattern can fill the fields directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pins {
    /// Control word: load enable, slot index or opcode, start strobe.
    pub control: u8,
    /// Bidirectional bus in the input direction: load data byte, or the
    /// readout selector on quiet cycles.
    pub bus: u8,
    /// Enable. While deasserted the core holds all state.
    pub ena: bool,
    /// Reset, active low.
    pub rst_n: bool,
}

impl Pins {
    /// A quiet cycle: no command, selector zero.
    pub const fn idle() -> Self {
        Self {
            control: 0,
            bus: 0,
            ena: true,
            rst_n: true,
        }
    }

    /// A cycle asserting reset.
    pub const fn reset() -> Self {
        Self {
            rst_n: false,
            ..Self::idle()
        }
    }

    /// A load cycle writing `value` into operand byte slot `slot`.
    pub const fn load(slot: u8, value: u8) -> Self {
        Self {
            control: encode_load(slot),
            bus: value,
            ..Self::idle()
        }
    }

    /// A start cycle strobing `op`.
    pub const fn start(op: Opcode) -> Self {
        Self {
            control: encode_start(op),
            ..Self::idle()
        }
    }

    /// A readout cycle driving `selector` on the bus.
    pub const fn select(selector: u8) -> Self {
        Self {
            bus: selector,
            ..Self::idle()
        }
    }

    /// A readout cycle selecting the status byte.
    pub const fn status() -> Self {
        Self::select(SEL_STATUS)
    }

    /// The same cycle with enable deasserted.
    pub const fn disabled(self) -> Self {
        Self { ena: false, ..self }
    }
}
