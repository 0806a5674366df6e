//! Bitwise operations: and, or.

use super::AluOutput;
use crate::isa::Opcode;

/// Executes a bitwise opcode. Carry and overflow are pinned to zero.
pub const fn execute(op: Opcode, a: u32, b: u32) -> AluOutput {
    let value = match op {
        Opcode::And => a & b,
        Opcode::Or => a | b,
        _ => 0,
    };
    AluOutput {
        value,
        carry: false,
        overflow: false,
    }
}
