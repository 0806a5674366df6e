//! Operation encoding.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The eight operations, in their 3-bit wire encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `A + B`, wrapping; Carry is the unsigned overflow.
    Add,
    /// `A - B`, wrapping; Carry is the borrow.
    Sub,
    /// Low 16 bits of A times low 16 bits of B.
    Mul,
    /// Unsigned `A / B`; a zero divisor yields a zero quotient.
    Div,
    /// `A << (B mod 32)`; Carry is the last bit shifted out.
    Shl,
    /// `A >> (B mod 32)`, logical; Carry is the last bit shifted out.
    Shr,
    /// `A & B`.
    And,
    /// `A | B`.
    Or,
}

/// Failed to parse an opcode mnemonic.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operation `{0}`")]
pub struct ParseOpcodeError(String);

impl Opcode {
    /// Number of distinct opcodes.
    pub const COUNT: usize = 8;

    /// Every opcode in encoding order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Shl,
        Self::Shr,
        Self::And,
        Self::Or,
    ];

    /// Decodes a 3-bit opcode field; bits above the field are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Add,
            1 => Self::Sub,
            2 => Self::Mul,
            3 => Self::Div,
            4 => Self::Shl,
            5 => Self::Shr,
            6 => Self::And,
            _ => Self::Or,
        }
    }

    /// The 3-bit wire encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Zero-based index for per-opcode tables and counters.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case assembly-style mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Whether the operation takes more than one cycle to complete.
    pub const fn is_multi_cycle(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "SUB" => Ok(Self::Sub),
            "MUL" => Ok(Self::Mul),
            "DIV" => Ok(Self::Div),
            "SHL" => Ok(Self::Shl),
            "SHR" => Ok(Self::Shr),
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(ParseOpcodeError(s.to_owned())),
        }
    }
}
