//! Hexagon core-model CLI.
//!
//! This binary is the monitor/debug surface of the core model. It performs:
//! 1. **Configuration:** Binds the two LLDB-compatibility settings from flags
//!    or a JSON config file.
//! 2. **Lifecycle:** Constructs and realizes one core.
//! 3. **Introspection:** Prints the LLDB-comparable register dump.

use clap::Parser;
use std::{fs, process};

use hexsim_core::config::CoreConfig;
use hexsim_core::core::Cpu;
use hexsim_core::core::arch::trap::ExceptionCause;
use hexsim_core::core::cpu::execution::{ExecutionHarness, FaultRedirect};

#[derive(Parser, Debug)]
#[command(
    name = "hexsim",
    author,
    version,
    about = "User-mode Hexagon core model",
    long_about = "Construct and realize one Hexagon core and print its register dump.\n\nThe dump format matches a reference LLDB session line for line; use --lldb-stack-adjust when the reference stack lives at a different address.\n\nExamples:\n  hexsim\n  hexsim --sp 0x10000000 --lldb-stack-adjust 0x100\n  hexsim --config core.json"
)]
struct Cli {
    /// Enable LLDB trace-diff compatibility (dump de-duplication, placeholder
    /// system registers).
    #[arg(long)]
    lldb_compat: bool,

    /// Byte offset subtracted from printed stack addresses.
    #[arg(long, value_parser = parse_word, default_value = "0")]
    lldb_stack_adjust: u32,

    /// JSON config file; flags override its fields when given.
    #[arg(long)]
    config: Option<String>,

    /// Initial program counter.
    #[arg(long, value_parser = parse_word, default_value = "0")]
    pc: u32,

    /// Initial stack pointer (r29), recorded as the stack base at realization.
    #[arg(long, value_parser = parse_word, default_value = "0")]
    sp: u32,
}

/// Parses a register-width value, accepting decimal or `0x`-prefixed hex.
fn parse_word(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid value {s:?}: {e}"))
}

/// Stand-in execution collaborator: accepts scheduling and fault exits
/// without running guest code.
#[derive(Debug, Default)]
struct NullHarness;

impl ExecutionHarness for NullHarness {
    fn schedule(&mut self) {}

    fn loop_exit(&mut self, cause: ExceptionCause, restart_pc: u32) -> FaultRedirect {
        eprintln!("[fault] {cause} at {restart_pc:#x}");
        FaultRedirect::new()
    }
}

fn load_config(cli: &Cli) -> CoreConfig {
    let mut config = match &cli.config {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("error: bad config {path}: {e}");
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("error: cannot read {path}: {e}");
                process::exit(1);
            }
        },
        None => CoreConfig::default(),
    };

    if cli.lldb_compat {
        config.lldb_compat = true;
    }
    if cli.lldb_stack_adjust != 0 {
        config.lldb_stack_adjust = cli.lldb_stack_adjust;
    }
    config
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    let mut cpu = match Cpu::new(&config) {
        Ok(cpu) => cpu,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cpu.regs.write(29, cli.sp) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut harness = NullHarness;
    if let Err(e) = cpu.realize(&mut harness) {
        eprintln!("error: {e}");
        process::exit(1);
    }
    cpu.set_pc(cli.pc);

    print!("{}", cpu.debug_dump());
}
