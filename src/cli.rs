//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Contains the
//! execution logic for each subcommand: regime dispatch, result output in
//! both human and JSON form, tuple verification, and rayon configuration.

use anyhow::{ensure, Result};
use repcross::{div_finite, n7, nondiv, repunit, Solution};
use serde::Serialize;
use tracing::{info, warn};

use super::Commands;

// ── Regime Dispatch ─────────────────────────────────────────────

/// One regime's labelled outcome, shared by both output modes.
#[derive(Serialize)]
struct RegimeReport {
    regime: &'static str,
    bounds: String,
    solutions: Vec<Solution>,
}

/// Run the selected regime(s) and print their results to stdout.
pub fn run_regimes(command: &Commands, json: bool) -> Result<()> {
    let mut reports = Vec::new();
    match command {
        Commands::Nondiv => reports.push(report_nondiv()?),
        Commands::DivFinite => reports.push(report_div_finite()?),
        Commands::N7 => reports.push(report_n7()?),
        Commands::All {
            skip_nondiv,
            skip_div_finite,
            skip_n7,
        } => {
            if !skip_nondiv {
                reports.push(report_nondiv()?);
            }
            if !skip_div_finite {
                reports.push(report_div_finite()?);
            }
            if !skip_n7 {
                reports.push(report_n7()?);
            }
        }
        Commands::Verify { .. } => unreachable!("verify dispatches in main"),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{} ({}): {} solution(s)",
                report.regime,
                report.bounds,
                report.solutions.len()
            );
            for solution in &report.solutions {
                println!("  {}", solution);
            }
        }
    }
    Ok(())
}

fn report_nondiv() -> Result<RegimeReport> {
    Ok(RegimeReport {
        regime: "nondiv",
        bounds: format!(
            "x<={}, y<={}, n<={}, m<={}",
            nondiv::X_MAX,
            nondiv::Y_MAX,
            nondiv::N_MAX,
            nondiv::M_MAX
        ),
        solutions: nondiv::check()?,
    })
}

fn report_div_finite() -> Result<RegimeReport> {
    Ok(RegimeReport {
        regime: "div-finite",
        bounds: format!("{} fixed (k, y) cases, k = n-1", div_finite::cases().len()),
        solutions: div_finite::check()?,
    })
}

fn report_n7() -> Result<RegimeReport> {
    Ok(RegimeReport {
        regime: "n7",
        bounds: format!(
            "n=7, 6|(m-1), y<={}, m<={}",
            n7::EXPECTED_Y_MAX,
            n7::EXPECTED_M_MAX
        ),
        solutions: n7::check()?,
    })
}

// ── Tuple Verification ──────────────────────────────────────────

/// Exactly confirm or refute a single claimed coincidence by evaluating
/// both repunits with full precision.
pub fn run_verify(x: u64, y: u64, m: u32, n: u32) -> Result<()> {
    ensure!(x >= 2 && y >= 2, "bases must be >= 2 (got x={}, y={})", x, y);
    ensure!(m >= 1 && n >= 1, "lengths must be >= 1 (got m={}, n={})", m, n);

    let lhs = repunit(x, m);
    let rhs = repunit(y, n);
    let equal = lhs == rhs;
    info!(x, y, m, n, equal, "tuple verified exactly");

    if equal {
        println!("R({}, {}) = R({}, {}) = {}", x, m, y, n, lhs);
        if x >= y || n >= m {
            warn!("tuple is not in normalized x < y, n < m order");
        }
        if n >= 2 && (m - 1) % (n - 1) == 0 {
            println!("divisibility case: (m-1) is a multiple of (n-1) = {}", n - 1);
        } else {
            println!("non-divisibility case: (m-1) is not a multiple of (n-1)");
        }
    } else {
        println!("R({}, {}) = {}", x, m, lhs);
        println!("R({}, {}) = {}", y, n, rhs);
        println!("not equal");
    }
    Ok(())
}

// ── Rayon Configuration ─────────────────────────────────────────

/// Configure the rayon global thread pool size. Zero or unset leaves the
/// default (all logical cores).
pub fn configure_rayon(threads: Option<usize>) {
    let num_threads = threads.unwrap_or(0);
    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        }
    }
}
