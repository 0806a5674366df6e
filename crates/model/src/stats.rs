//! Simulation statistics.
//!
//! Counters accumulated by the core as it ticks. They are host-side
//! bookkeeping, not device state: reset clears the device, not the
//! counters.

use std::fmt;

use serde::Serialize;

use crate::isa::Opcode;

/// Counters describing one simulation run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimStats {
    /// Clock edges applied, including reset and disabled cycles.
    pub cycles: u64,
    /// Cycles spent with reset asserted.
    pub reset_cycles: u64,
    /// Cycles spent frozen with enable deasserted.
    pub disabled_cycles: u64,
    /// Enabled cycles that ended in the idle state.
    pub idle_cycles: u64,
    /// Enabled cycles that ended in the running state.
    pub running_cycles: u64,
    /// Enabled cycles that ended in the done state.
    pub done_cycles: u64,
    /// Operand byte loads accepted.
    pub loads: u64,
    /// Start strobes accepted.
    pub starts: u64,
    /// Start strobes ignored because an operation was already running.
    pub starts_ignored: u64,
    /// Completed operations, indexed by opcode encoding.
    pub completions: [u64; Opcode::COUNT],
    /// Divides started with a zero divisor.
    pub div_by_zero: u64,
}

impl SimStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total operations completed across all opcodes.
    pub fn completed(&self) -> u64 {
        self.completions.iter().sum()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- simulation statistics ---")?;
        writeln!(f, "cycles:          {}", self.cycles)?;
        writeln!(f, "  reset:         {}", self.reset_cycles)?;
        writeln!(f, "  disabled:      {}", self.disabled_cycles)?;
        writeln!(f, "  idle:          {}", self.idle_cycles)?;
        writeln!(f, "  running:       {}", self.running_cycles)?;
        writeln!(f, "  done:          {}", self.done_cycles)?;
        writeln!(f, "loads:           {}", self.loads)?;
        writeln!(f, "starts:          {}", self.starts)?;
        writeln!(f, "  ignored:       {}", self.starts_ignored)?;
        writeln!(f, "completed:       {}", self.completed())?;
        for op in Opcode::ALL {
            let count = self.completions[op.index()];
            if count > 0 {
                writeln!(f, "  {:<4}           {count}", op.mnemonic())?;
            }
        }
        write!(f, "div by zero:     {}", self.div_by_zero)
    }
}
