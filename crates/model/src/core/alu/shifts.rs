//! Shift operations: logical left and right.

use super::AluOutput;
use crate::isa::Opcode;

/// Operand width in bits.
const WORD_BITS: u32 = 32;
/// Shift amounts are taken modulo the word width.
const SHAMT_MASK: u32 = WORD_BITS - 1;

/// Executes a shift opcode.
///
/// The amount is `b mod 32`. Carry is the last bit shifted out of A; a zero
/// amount shifts nothing out, so carry is zero.
pub const fn execute(op: Opcode, a: u32, b: u32) -> AluOutput {
    let shamt = b & SHAMT_MASK;
    match op {
        Opcode::Shl => AluOutput {
            value: a.wrapping_shl(shamt),
            carry: shamt != 0 && a >> (WORD_BITS - shamt) & 1 == 1,
            overflow: false,
        },
        Opcode::Shr => AluOutput {
            value: a.wrapping_shr(shamt),
            carry: shamt != 0 && a >> (shamt - 1) & 1 == 1,
            overflow: false,
        },
        _ => AluOutput {
            value: 0,
            carry: false,
            overflow: false,
        },
    }
}
