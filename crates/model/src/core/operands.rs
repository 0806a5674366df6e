//! Operand register file.
//!
//! Two 32-bit operand registers assembled one byte at a time through eight
//! addressable slots: slots 0..=3 are the A bytes, slots 4..=7 the B bytes,
//! least significant byte first. Slots may be written in any order and any
//! number of times; bytes not rewritten keep their previous value.

use crate::common::constants::{OPERAND_SLOTS, SLOT_B_BASE};

/// Which operand register a byte index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// First operand.
    A,
    /// Second operand.
    B,
}

impl Operand {
    /// Maps a register and byte index (0 = LSB) to the wire slot number.
    pub const fn slot(self, index: u8) -> u8 {
        let base = match self {
            Self::A => 0,
            Self::B => SLOT_B_BASE,
        };
        base + (index & 0x03)
    }
}

/// The two operand registers behind the byte-slot write port.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperandFile {
    a: u32,
    b: u32,
}

impl OperandFile {
    /// Creates a file with both registers cleared.
    pub const fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    /// Writes one byte into the addressed slot.
    ///
    /// The index is masked to the valid slot range, mirroring the 3-bit
    /// field it arrives in.
    pub const fn write_slot(&mut self, slot: u8, value: u8) {
        let slot = slot % OPERAND_SLOTS;
        let reg = if slot < SLOT_B_BASE {
            &mut self.a
        } else {
            &mut self.b
        };
        let shift = (slot % SLOT_B_BASE) as u32 * 8;
        *reg = *reg & !(0xFF << shift) | (value as u32) << shift;
    }

    /// Current value of operand A.
    pub const fn a(&self) -> u32 {
        self.a
    }

    /// Current value of operand B.
    pub const fn b(&self) -> u32 {
        self.b
    }

    /// Clears both registers.
    pub const fn reset(&mut self) {
        self.a = 0;
        self.b = 0;
    }
}
