//! Multi-cycle execution engine.
//!
//! The engine latches the opcode and operand values on the start edge and
//! then models completion latency with a countdown: single-cycle operations
//! commit on the next edge, multiply and divide after their configured
//! latencies. The functional result is computed once, at commit time; the
//! countdown is purely a timing model, never a partial datapath.

use crate::common::Flags;
use crate::config::TimingConfig;
use crate::core::alu::Alu;
use crate::isa::Opcode;

/// Result of a completed operation, committed atomically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// The operation that completed.
    pub op: Opcode,
    /// 32-bit result.
    pub result: u32,
    /// Flags derived from the result and the ALU carry/overflow outputs.
    pub flags: Flags,
}

/// Latched operation plus the cycles left until it commits.
#[derive(Debug)]
pub struct ExecUnit {
    op: Opcode,
    a: u32,
    b: u32,
    /// Cycles until the in-flight operation commits; zero when idle.
    remaining: u64,
    mul_latency: u64,
    div_latency: u64,
}

impl ExecUnit {
    /// Creates an idle engine with the given latency model.
    ///
    /// Latencies are clamped to at least one cycle: no operation can
    /// complete on its own start edge.
    pub const fn new(timing: &TimingConfig) -> Self {
        Self {
            op: Opcode::Add,
            a: 0,
            b: 0,
            remaining: 0,
            mul_latency: clamp_latency(timing.mul_latency),
            div_latency: clamp_latency(timing.div_latency),
        }
    }

    /// Cycles `op` spends in the running state.
    pub const fn latency(&self, op: Opcode) -> u64 {
        match op {
            Opcode::Mul => self.mul_latency,
            Opcode::Div => self.div_latency,
            _ => 1,
        }
    }

    /// Latches `(op, a, b)` and arms the countdown.
    ///
    /// The operand values are copied here; bytes loaded on later edges
    /// belong to the next operation.
    pub const fn begin(&mut self, op: Opcode, a: u32, b: u32) {
        self.op = op;
        self.a = a;
        self.b = b;
        self.remaining = self.latency(op);
    }

    /// Advances one clock edge, returning the completion when the
    /// countdown expires.
    pub const fn advance(&mut self) -> Option<Completion> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return None;
        }
        let out = Alu::execute(self.op, self.a, self.b);
        Some(Completion {
            op: self.op,
            result: out.value,
            flags: Flags::derive(out.value, out.carry, out.overflow),
        })
    }

    /// Whether an operation is in flight.
    pub const fn busy(&self) -> bool {
        self.remaining > 0
    }

    /// Abandons any in-flight operation.
    pub const fn reset(&mut self) {
        self.remaining = 0;
    }
}

const fn clamp_latency(cycles: u64) -> u64 {
    if cycles == 0 { 1 } else { cycles }
}
