//! Instruction-set definitions: opcodes and the bus command format.

pub mod command;
pub mod opcode;

pub use command::{Command, encode_load, encode_start};
pub use opcode::{Opcode, ParseOpcodeError};
