//! Combinational readout multiplexer.
//!
//! The output pins always mirror the byte addressed by the selector on the
//! bidirectional bus. Selectors 0..=3 expose the stored result least
//! significant byte first, selector 4 the status byte, and the reserved
//! selectors 5..=7 read as zero.

use crate::common::Flags;
use crate::common::constants::{SEL_MASK, SEL_STATUS, STATUS_DONE};

/// Packs the status byte: done indicator at bit 4, flags nibble below it,
/// upper bits zero.
pub const fn status_byte(flags: Flags, done: bool) -> u8 {
    let done_bit = if done { STATUS_DONE } else { 0 };
    done_bit | flags.nibble()
}

/// Returns the byte the output pins drive for `selector`.
pub const fn read_byte(result: u32, flags: Flags, done: bool, selector: u8) -> u8 {
    match selector & SEL_MASK {
        sel @ 0..=3 => (result >> (sel as u32 * 8)) as u8,
        SEL_STATUS => status_byte(flags, done),
        _ => 0,
    }
}
