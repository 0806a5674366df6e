//! The byte-serial ALU core.
//!
//! This module models the device behind the pins, with the following:
//!
//! 1. **Operands:** two 32-bit registers written one byte at a time
//!    ([`operands`]).
//! 2. **Datapath:** the combinational ALU ([`alu`]).
//! 3. **Timing:** the multi-cycle execution engine ([`engine`]).
//! 4. **Readout:** the combinational output multiplexer ([`output`]).
//!
//! [`AluCore::tick`] glues them together: one call is one rising clock
//! edge, sampling the pin state and returning the byte driven on the
//! output pins for that cycle.

pub mod alu;
pub mod engine;
pub mod operands;
pub mod output;
pub mod pins;

use tracing::{debug, trace, warn};

use crate::common::Flags;
use crate::config::Config;
use crate::isa::{Command, Opcode};
use crate::stats::SimStats;

pub use engine::{Completion, ExecUnit};
pub use operands::{Operand, OperandFile};
pub use pins::Pins;

/// Top-level operation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpState {
    /// No operation requested since reset.
    #[default]
    Idle,
    /// An operation is in flight.
    Running,
    /// Result and flags are valid, awaiting readout or the next start.
    Done,
}

/// Cycle-accurate model of the ALU device.
///
/// All sequential state lives here: the operand file, the execution
/// engine's latched operation and countdown, the committed result and
/// flags, and the operation state machine. The readout path is
/// combinational and therefore stateless; reading never disturbs anything.
#[derive(Debug)]
pub struct AluCore {
    operands: OperandFile,
    engine: ExecUnit,
    state: OpState,
    result: u32,
    flags: Flags,
    /// Counters accumulated across the device's lifetime, reset included.
    pub stats: SimStats,
}

impl AluCore {
    /// Creates a core in the post-reset state.
    pub fn new(config: &Config) -> Self {
        Self {
            operands: OperandFile::new(),
            engine: ExecUnit::new(&config.timing),
            state: OpState::Idle,
            result: 0,
            flags: Flags::default(),
            stats: SimStats::new(),
        }
    }

    /// Applies one rising clock edge and returns the output pin byte.
    ///
    /// Reset is honored regardless of enable. With enable deasserted the
    /// core holds all state but keeps driving the output pins, so the
    /// readout still reflects the frozen state.
    pub fn tick(&mut self, pins: Pins) -> u8 {
        self.stats.cycles += 1;

        if !pins.rst_n {
            self.stats.reset_cycles += 1;
            self.reset();
            return self.output(pins.bus);
        }
        if !pins.ena {
            self.stats.disabled_cycles += 1;
            return self.output(pins.bus);
        }

        let started = match Command::decode(pins.control, pins.bus) {
            Command::Load { slot, value } => {
                self.operands.write_slot(slot, value);
                self.stats.loads += 1;
                trace!("load slot={} value={:#04x}", slot, value);
                false
            }
            Command::Start { op } => self.try_start(op),
            Command::Nop => false,
        };

        // The countdown register updates on the edge after it loads, so a
        // freshly accepted start must not advance on its own edge.
        if !started {
            if let Some(done) = self.engine.advance() {
                self.result = done.result;
                self.flags = done.flags;
                self.state = OpState::Done;
                self.stats.completions[done.op.index()] += 1;
                debug!(
                    "{} complete: result={:#010x} {}",
                    done.op, done.result, done.flags
                );
            }
        }

        match self.state {
            OpState::Idle => self.stats.idle_cycles += 1,
            OpState::Running => self.stats.running_cycles += 1,
            OpState::Done => self.stats.done_cycles += 1,
        }

        self.output(pins.bus)
    }

    /// Handles a start strobe: accepted from idle or done, ignored while
    /// an operation is already running.
    fn try_start(&mut self, op: Opcode) -> bool {
        if self.state == OpState::Running {
            self.stats.starts_ignored += 1;
            warn!("start strobe for {} ignored: already running", op);
            return false;
        }
        let (a, b) = (self.operands.a(), self.operands.b());
        if op == Opcode::Div && b == 0 {
            self.stats.div_by_zero += 1;
        }
        self.engine.begin(op, a, b);
        self.state = OpState::Running;
        self.stats.starts += 1;
        debug!("{} start: a={:#010x} b={:#010x}", op, a, b);
        true
    }

    /// Clears all device state: operands, in-flight operation, result,
    /// flags, and the state machine. Statistics are host-side bookkeeping
    /// and survive.
    pub fn reset(&mut self) {
        self.operands.reset();
        self.engine.reset();
        self.state = OpState::Idle;
        self.result = 0;
        self.flags = Flags::default();
    }

    /// The byte the output pins drive for `selector`. Purely combinational.
    pub const fn output(&self, selector: u8) -> u8 {
        output::read_byte(self.result, self.flags, self.is_done(), selector)
    }

    /// Current operation state.
    pub const fn state(&self) -> OpState {
        self.state
    }

    /// Whether a committed result is waiting to be read.
    pub const fn is_done(&self) -> bool {
        matches!(self.state, OpState::Done)
    }

    /// The last committed result.
    pub const fn result(&self) -> u32 {
        self.result
    }

    /// The last committed flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Current value of operand register A.
    pub const fn operand_a(&self) -> u32 {
        self.operands.a()
    }

    /// Current value of operand register B.
    pub const fn operand_b(&self) -> u32 {
        self.operands.b()
    }
}
