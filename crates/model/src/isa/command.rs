//! Bus command decoding and encoding.
//!
//! Every clock edge the device samples the control word and the
//! bidirectional bus together and decodes exactly one command. Bit 7 of the
//! control word picks the form: when set, bits 6:4 address an operand byte
//! slot and the bus carries the data byte; when clear, bit 0 is the start
//! strobe and bits 3:1 the opcode. A clear strobe with a clear load enable
//! is a quiet cycle, leaving the bus free to carry a readout selector.

use crate::common::constants::{
    CTRL_LOAD_ENABLE, CTRL_OPCODE_MASK, CTRL_OPCODE_SHIFT, CTRL_SLOT_MASK, CTRL_SLOT_SHIFT,
    CTRL_START_STROBE,
};
use crate::isa::Opcode;

/// One decoded bus command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Store `value` into operand byte slot `slot`.
    Load {
        /// Byte slot index: 0..=3 address A, 4..=7 address B, LSB first.
        slot: u8,
        /// The data byte sampled from the bus.
        value: u8,
    },
    /// Latch `op` and begin executing it.
    Start {
        /// The requested operation.
        op: Opcode,
    },
    /// No command this cycle.
    Nop,
}

impl Command {
    /// Decodes the control word and bus byte sampled on one clock edge.
    ///
    /// Load enable wins over the start strobe: a word with both set decodes
    /// as a load.
    pub const fn decode(control: u8, bus: u8) -> Self {
        if control & CTRL_LOAD_ENABLE != 0 {
            Self::Load {
                slot: control >> CTRL_SLOT_SHIFT & CTRL_SLOT_MASK,
                value: bus,
            }
        } else if control & CTRL_START_STROBE != 0 {
            Self::Start {
                op: Opcode::from_bits(control >> CTRL_OPCODE_SHIFT & CTRL_OPCODE_MASK),
            }
        } else {
            Self::Nop
        }
    }
}

/// Encodes the control word for a load into byte slot `slot`.
pub const fn encode_load(slot: u8) -> u8 {
    CTRL_LOAD_ENABLE | (slot & CTRL_SLOT_MASK) << CTRL_SLOT_SHIFT
}

/// Encodes the control word strobing a start of `op`.
pub const fn encode_start(op: Opcode) -> u8 {
    op.bits() << CTRL_OPCODE_SHIFT | CTRL_START_STROBE
}
