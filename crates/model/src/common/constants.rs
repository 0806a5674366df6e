//! Wire-level constants of the byte-serial bus protocol.
//!
//! The device is driven through two 8-bit words per clock edge: a control
//! word on the dedicated input pins and a data/selector word on the
//! bidirectional bus. The constants below name every field of both words
//! plus the layout of the status byte readable through selector 4.

/// Control-word bit selecting a load command (bit 7).
pub const CTRL_LOAD_ENABLE: u8 = 0x80;
/// Shift of the operand byte-slot index within a load control word.
pub const CTRL_SLOT_SHIFT: u8 = 4;
/// Mask of the byte-slot index after shifting (bits 6:4, 3 bits wide).
pub const CTRL_SLOT_MASK: u8 = 0x07;
/// Shift of the opcode within a start control word.
pub const CTRL_OPCODE_SHIFT: u8 = 1;
/// Mask of the opcode after shifting (bits 3:1, 3 bits wide).
pub const CTRL_OPCODE_MASK: u8 = 0x07;
/// Control-word bit carrying the start strobe (bit 0).
pub const CTRL_START_STROBE: u8 = 0x01;

/// Number of addressable operand byte slots (four for A, four for B).
pub const OPERAND_SLOTS: u8 = 8;
/// Slot index of the first (least significant) B-register byte.
pub const SLOT_B_BASE: u8 = 4;
/// Number of bytes in one operand register.
pub const OPERAND_BYTES: u8 = 4;

/// Mask of the readout selector on the bidirectional bus (3 bits).
pub const SEL_MASK: u8 = 0x07;
/// Selector value exposing the status byte instead of a result byte.
pub const SEL_STATUS: u8 = 4;
/// Done indicator within the status byte (bit 4).
pub const STATUS_DONE: u8 = 0x10;
/// Mask of the flags nibble within the status byte (bits 3:0).
pub const STATUS_FLAGS_MASK: u8 = 0x0F;
