//! Byte-serial ALU simulator CLI.
//!
//! Runs one operation through the full pin protocol: operand byte loads,
//! start strobe, status polling, result readout. Latencies and driver knobs
//! come from an optional JSON configuration file; logging is controlled by
//! `RUST_LOG` (for example `RUST_LOG=ttalu_core=trace` for a per-cycle
//! trace).

use std::num::ParseIntError;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ttalu_core::{Config, Driver, Opcode};

#[derive(Parser, Debug)]
#[command(
    name = "ttalu",
    version,
    about = "Cycle-accurate simulator of a byte-serial 32-bit ALU",
    long_about = "Drives the simulated device through its byte-serial pin protocol.\n\nOperands accept decimal or 0x-prefixed hex.\n\nExamples:\n  ttalu compute add 20 30\n  ttalu compute mul 0xFFFF 0x101 --stats\n  ttalu compute div 100 0 --config ttalu.json"
)]
struct Cli {
    /// JSON configuration file (timing and driver sections).
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single operation and print the result and flags.
    Compute {
        /// Operation mnemonic: add, sub, mul, div, shl, shr, and, or.
        op: Opcode,

        /// First operand A.
        a: String,

        /// Second operand B.
        b: String,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,

        /// Emit the statistics as JSON instead of the formatted report.
        #[arg(long)]
        stats_json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Compute {
            op,
            a,
            b,
            stats,
            stats_json,
        } => cmd_compute(&config, op, &a, &b, stats, stats_json),
    }
}

/// Runs one operation end to end and prints the outcome.
///
/// Exits with code 1 when the operation does not complete within the
/// configured poll budget.
fn cmd_compute(config: &Config, op: Opcode, a: &str, b: &str, stats: bool, stats_json: bool) {
    let a = parse_operand(a);
    let b = parse_operand(b);

    let mut driver = Driver::new(config);
    driver.reset();

    let done = driver.compute(op, a, b).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    println!("{} {:#010x} {:#010x}", done.op, a, b);
    println!("  result = {:#010x} ({})", done.result, done.result);
    println!("  flags  = {}", done.flags);

    if stats_json {
        let json = serde_json::to_string_pretty(&driver.core().stats).unwrap_or_else(|e| {
            eprintln!("Error serializing statistics: {e}");
            process::exit(1);
        });
        println!("{json}");
    } else if stats {
        println!("{}", driver.core().stats);
    }
}

/// Loads the configuration file, or the defaults when no path is given.
fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    Config::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Error in config {path}: {e}");
        process::exit(1);
    })
}

/// Parses a 32-bit operand, decimal or 0x-prefixed hex.
fn parse_operand(text: &str) -> u32 {
    parse_u32(text).unwrap_or_else(|e| {
        eprintln!("Error: invalid operand `{text}`: {e}");
        process::exit(1);
    })
}

fn parse_u32(text: &str) -> Result<u32, ParseIntError> {
    let text = text.trim();
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .map_or_else(|| text.parse(), |hex| u32::from_str_radix(hex, 16))
}
