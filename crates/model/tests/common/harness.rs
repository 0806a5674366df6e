use tracing_subscriber::EnvFilter;
use ttalu_core::common::Flags;
use ttalu_core::common::constants::{OPERAND_BYTES, STATUS_DONE, STATUS_FLAGS_MASK};
use ttalu_core::config::Config;
use ttalu_core::core::{AluCore, Operand, Pins};
use ttalu_core::isa::Opcode;

/// Status polls a well-behaved caller budgets per operation. Large enough
/// for the slowest default latency with slack to spare.
pub const POLL_BUDGET: u64 = 20;

pub struct TestContext {
    pub core: AluCore,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // Power-on sequence: hold reset for two edges like a bench would,
        // so every test starts from the architectural reset state.
        let mut core = AluCore::new(config);
        let _ = core.tick(Pins::reset());
        let _ = core.tick(Pins::reset());

        Self { core }
    }

    /// One quiet cycle. Returns the output byte for selector 0.
    pub fn idle(&mut self) -> u8 {
        self.core.tick(Pins::idle())
    }

    /// Loads a full 32-bit operand, least significant byte first.
    pub fn load_word(&mut self, reg: Operand, value: u32) {
        for index in 0..OPERAND_BYTES {
            let byte = (value >> (u32::from(index) * 8)) as u8;
            let _ = self.core.tick(Pins::load(reg.slot(index), byte));
        }
    }

    /// Strobes a start of `op` for one cycle.
    pub fn start(&mut self, op: Opcode) {
        let _ = self.core.tick(Pins::start(op));
    }

    /// Reads the status byte (one cycle).
    pub fn status(&mut self) -> u8 {
        self.core.tick(Pins::status())
    }

    /// Polls the status byte until the done bit rises, returning the number
    /// of polls taken. Panics when `budget` polls were not enough.
    pub fn poll_done(&mut self, budget: u64) -> u64 {
        for polls in 1..=budget {
            if self.status() & STATUS_DONE != 0 {
                return polls;
            }
        }
        panic!("done bit still low after {budget} status polls");
    }

    /// Reads the 32-bit result over four cycles, least significant first.
    pub fn read_result(&mut self) -> u32 {
        let mut value = 0;
        for index in 0..OPERAND_BYTES {
            let byte = self.core.tick(Pins::select(index));
            value |= u32::from(byte) << (u32::from(index) * 8);
        }
        value
    }

    /// Reads the flags nibble out of the status byte (one cycle).
    pub fn read_flags(&mut self) -> Flags {
        Flags::from_nibble(self.status() & STATUS_FLAGS_MASK)
    }

    /// Runs one full operation through the pins and returns the result and
    /// flags it committed.
    pub fn run_op(&mut self, op: Opcode, a: u32, b: u32) -> (u32, Flags) {
        self.load_word(Operand::A, a);
        self.load_word(Operand::B, b);
        self.start(op);
        let _ = self.poll_done(POLL_BUDGET);
        (self.read_result(), self.read_flags())
    }
}
