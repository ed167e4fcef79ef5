//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to the regime drivers and handles shared
//! concerns: logging setup, the Rayon thread pool, and output formatting.
//!
//! ## Subcommands
//!
//! Each search regime has a corresponding subcommand (`nondiv`,
//! `div-finite`, `n7`). The `all` subcommand runs the three in sequence
//! with per-regime skip flags. The `verify` subcommand confirms a single
//! claimed tuple by exact evaluation.
//!
//! ## Global Options
//!
//! - `--threads`: Rayon thread pool size (defaults to all logical cores).
//! - `--json`: machine-readable results on stdout instead of the listing.
//! - `LOG_FORMAT=json`: structured JSON logs on stderr.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "repcross",
    about = "Exhaustively verify the repunit equation R(x, m) = R(y, n) over its proven search regimes"
)]
struct Cli {
    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Emit results as JSON on stdout instead of the human-readable listing
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the non-divisibility regime: (m-1) not a multiple of (n-1)
    Nondiv,
    /// Run the finite divisibility cases: fixed (k, y) list with k | (m-1)
    DivFinite,
    /// Run the n=7 regime: exact-value buckets under 6 | (m-1)
    N7,
    /// Run all three regimes in sequence
    All {
        /// Skip the non-divisibility regime
        #[arg(long)]
        skip_nondiv: bool,
        /// Skip the finite divisibility cases
        #[arg(long)]
        skip_div_finite: bool,
        /// Skip the n=7 regime
        #[arg(long)]
        skip_n7: bool,
    },
    /// Exactly confirm or refute a single claimed tuple R(x, m) = R(y, n)
    Verify {
        /// Base on the left side
        #[arg(long)]
        x: u64,
        /// Base on the right side
        #[arg(long)]
        y: u64,
        /// Length on the left side
        #[arg(long)]
        m: u32,
        /// Length on the right side
        #[arg(long)]
        n: u32,
    },
}

fn main() -> Result<()> {
    // Structured logging on stderr: LOG_FORMAT=json for machines,
    // human-readable otherwise. Results own stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    match &cli.command {
        Commands::Verify { x, y, m, n } => cli::run_verify(*x, *y, *m, *n),
        command => cli::run_regimes(command, cli.json),
    }
}
