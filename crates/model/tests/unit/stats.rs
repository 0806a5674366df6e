//! Statistics counter tests.
//!
//! The runs here are fully scripted, so every counter value is exact: each
//! helper issues a known number of edges (two reset edges at construction,
//! four per operand load, one per start or status poll, four per readout).

use crate::common::{POLL_BUDGET, TestContext};
use ttalu_core::core::{Operand, Pins};
use ttalu_core::isa::Opcode;

#[test]
fn counters_track_a_single_add() {
    let mut ctx = TestContext::new();
    let (result, _) = ctx.run_op(Opcode::Add, 20, 30);
    assert_eq!(result, 50);

    let stats = &ctx.core.stats;
    // 2 reset + 8 loads + 1 start + 1 poll + 4 result reads + 1 flags read.
    assert_eq!(stats.cycles, 17);
    assert_eq!(stats.reset_cycles, 2);
    assert_eq!(stats.loads, 8);
    assert_eq!(stats.starts, 1);
    assert_eq!(stats.starts_ignored, 0);
    assert_eq!(stats.completions[Opcode::Add.index()], 1);
    assert_eq!(stats.completed(), 1);

    // State occupancy: loads end in idle, the start edge ends running, the
    // commit poll and five readout edges end in done.
    assert_eq!(stats.idle_cycles, 8);
    assert_eq!(stats.running_cycles, 1);
    assert_eq!(stats.done_cycles, 6);
    assert_eq!(stats.disabled_cycles, 0);
}

#[test]
fn running_cycles_grow_with_latency() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_op(Opcode::Div, 100, 5);
    // Start edge plus fifteen polls end in running; the sixteenth poll
    // commits.
    assert_eq!(ctx.core.stats.running_cycles, 16);
    assert_eq!(ctx.core.stats.completions[Opcode::Div.index()], 1);
}

#[test]
fn div_by_zero_is_counted_at_the_start_edge() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_op(Opcode::Div, 42, 0);
    assert_eq!(ctx.core.stats.div_by_zero, 1);

    let _ = ctx.run_op(Opcode::Div, 42, 7);
    assert_eq!(ctx.core.stats.div_by_zero, 1);
}

#[test]
fn ignored_starts_are_counted_separately() {
    let mut ctx = TestContext::new();
    ctx.load_word(Operand::A, 2);
    ctx.load_word(Operand::B, 2);
    ctx.start(Opcode::Mul);
    ctx.start(Opcode::Mul);
    ctx.start(Opcode::Mul);
    let _ = ctx.poll_done(POLL_BUDGET);

    assert_eq!(ctx.core.stats.starts, 1);
    assert_eq!(ctx.core.stats.starts_ignored, 2);
    assert_eq!(ctx.core.stats.completed(), 1);
}

#[test]
fn disabled_cycles_are_tracked() {
    let mut ctx = TestContext::new();
    for _ in 0..5 {
        let _ = ctx.core.tick(Pins::idle().disabled());
    }
    assert_eq!(ctx.core.stats.disabled_cycles, 5);
    assert_eq!(ctx.core.stats.idle_cycles, 0);
}

#[test]
fn counters_survive_a_device_reset() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_op(Opcode::Add, 1, 1);
    let completed_before = ctx.core.stats.completed();

    let _ = ctx.core.tick(Pins::reset());
    assert_eq!(ctx.core.stats.completed(), completed_before);
    assert_eq!(ctx.core.stats.reset_cycles, 3);
}

#[test]
fn stats_serialize_to_json() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_op(Opcode::Mul, 6, 7);

    let value = serde_json::to_value(&ctx.core.stats).unwrap();
    assert_eq!(value["starts"], 1);
    assert_eq!(value["completions"][Opcode::Mul.index()], 1);
    assert!(value["cycles"].as_u64().unwrap() > 0);
}

#[test]
fn report_names_the_completed_operations() {
    let mut ctx = TestContext::new();
    let _ = ctx.run_op(Opcode::Shl, 1, 4);

    let report = ctx.core.stats.to_string();
    assert!(report.contains("cycles:"));
    assert!(report.contains("SHL"));
    // Opcodes that never ran are omitted from the breakdown.
    assert!(!report.contains("DIV"));
}
