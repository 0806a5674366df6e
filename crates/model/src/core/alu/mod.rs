//! Combinational arithmetic logic unit.
//!
//! A pure function from an opcode and two 32-bit operands to a result plus
//! the carry and overflow indications. Timing lives entirely in the
//! execution engine; this module is the zero-delay datapath.

pub mod arithmetic;
pub mod logic;
pub mod shifts;

use crate::isa::Opcode;

/// Combinational outputs for one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// 32-bit result.
    pub value: u32,
    /// Carry out: unsigned overflow, borrow, or the last bit shifted out,
    /// depending on the operation. Pinned to zero for MUL, DIV, AND, OR.
    pub carry: bool,
    /// Signed overflow. Meaningful for ADD and SUB only, zero otherwise.
    pub overflow: bool,
}

/// The arithmetic logic unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes `op` on the operands.
    ///
    /// Dispatches to the submodule for the operation's category.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttalu_core::core::alu::Alu;
    /// use ttalu_core::Opcode;
    ///
    /// // Wrapping addition raises the carry.
    /// let out = Alu::execute(Opcode::Add, u32::MAX, 1);
    /// assert_eq!(out.value, 0);
    /// assert!(out.carry);
    ///
    /// // Only the low 16 bits of each operand participate in a multiply.
    /// let out = Alu::execute(Opcode::Mul, 0x0001_0000, 5);
    /// assert_eq!(out.value, 0);
    ///
    /// // A zero divisor yields a zero quotient.
    /// let out = Alu::execute(Opcode::Div, 42, 0);
    /// assert_eq!(out.value, 0);
    ///
    /// // Shift amounts wrap at the word width.
    /// let out = Alu::execute(Opcode::Shl, 1, 33);
    /// assert_eq!(out.value, 2);
    /// ```
    pub const fn execute(op: Opcode, a: u32, b: u32) -> AluOutput {
        match op {
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div => {
                arithmetic::execute(op, a, b)
            }
            Opcode::And | Opcode::Or => logic::execute(op, a, b),
            Opcode::Shl | Opcode::Shr => shifts::execute(op, a, b),
        }
    }
}
