//! Arithmetic operations: add, subtract, multiply, divide.

use super::AluOutput;
use crate::isa::Opcode;

/// Sign bit of a 32-bit word.
const SIGN_BIT: u32 = 1 << 31;
/// MUL consumes only the low half of each operand; the product of two
/// 16-bit values always fits in 32 bits.
const MUL_OPERAND_MASK: u32 = 0xFFFF;

/// Executes an arithmetic opcode.
pub const fn execute(op: Opcode, a: u32, b: u32) -> AluOutput {
    match op {
        Opcode::Add => {
            let (value, carry) = a.overflowing_add(b);
            // Signed overflow: both operands differ in sign from the result.
            let overflow = (a ^ value) & (b ^ value) & SIGN_BIT != 0;
            AluOutput {
                value,
                carry,
                overflow,
            }
        }
        Opcode::Sub => {
            let (value, borrow) = a.overflowing_sub(b);
            // Signed overflow: operand signs differ and the result took B's.
            let overflow = (a ^ b) & (a ^ value) & SIGN_BIT != 0;
            AluOutput {
                value,
                carry: borrow,
                overflow,
            }
        }
        Opcode::Mul => AluOutput {
            value: (a & MUL_OPERAND_MASK) * (b & MUL_OPERAND_MASK),
            carry: false,
            overflow: false,
        },
        Opcode::Div => {
            // A zero divisor is a defined outcome: quotient zero, with the
            // Zero flag falling out of the zero result.
            let value = if b == 0 { 0 } else { a / b };
            AluOutput {
                value,
                carry: false,
                overflow: false,
            }
        }
        _ => AluOutput {
            value: 0,
            carry: false,
            overflow: false,
        },
    }
}
