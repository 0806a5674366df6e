//! ALU flag register.
//!
//! Four single-bit outcome indicators recomputed atomically with the result
//! of every completed operation. On the wire they travel as the low nibble
//! of the selector-4 status byte: bit 3 Zero, bit 2 Negative, bit 1 Carry,
//! bit 0 Overflow.

use std::fmt;

/// Bit position of the Zero flag within the packed nibble.
const ZERO_BIT: u8 = 3;
/// Bit position of the Negative flag within the packed nibble.
const NEGATIVE_BIT: u8 = 2;
/// Bit position of the Carry flag within the packed nibble.
const CARRY_BIT: u8 = 1;
/// Bit position of the Overflow flag within the packed nibble.
const OVERFLOW_BIT: u8 = 0;

/// Flag register contents after the last completed operation.
///
/// All four flags are written together with the result; they are never
/// updated independently, so a reader that observes the done indicator can
/// trust every bit of the nibble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Result is exactly zero.
    pub zero: bool,
    /// Bit 31 of the result is set.
    pub negative: bool,
    /// Unsigned overflow (ADD), borrow (SUB), or the last bit shifted out.
    pub carry: bool,
    /// Signed two's-complement overflow (ADD/SUB only).
    pub overflow: bool,
}

impl Flags {
    /// Derives the flag register from a completed operation.
    ///
    /// Zero and Negative come from the result itself; Carry and Overflow
    /// are the ALU's combinational outputs for the operation.
    pub const fn derive(result: u32, carry: bool, overflow: bool) -> Self {
        Self {
            zero: result == 0,
            negative: result >> 31 == 1,
            carry,
            overflow,
        }
    }

    /// Packs the flags into the wire nibble (bit 3 Zero .. bit 0 Overflow).
    pub const fn nibble(self) -> u8 {
        (self.zero as u8) << ZERO_BIT
            | (self.negative as u8) << NEGATIVE_BIT
            | (self.carry as u8) << CARRY_BIT
            | (self.overflow as u8) << OVERFLOW_BIT
    }

    /// Unpacks a wire nibble; bits above the nibble are ignored.
    pub const fn from_nibble(bits: u8) -> Self {
        Self {
            zero: bits >> ZERO_BIT & 1 == 1,
            negative: bits >> NEGATIVE_BIT & 1 == 1,
            carry: bits >> CARRY_BIT & 1 == 1,
            overflow: bits >> OVERFLOW_BIT & 1 == 1,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={} N={} C={} V={}",
            self.zero as u8, self.negative as u8, self.carry as u8, self.overflow as u8
        )
    }
}
