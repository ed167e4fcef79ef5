//! # N7 — The n = 7 Divisibility Regime
//!
//! Covers coincidences R(x, m) = R(y, 7) with 6 | (m - 1), the one
//! divisibility family the finite case list does not close out. The
//! supporting argument caps the y side at the largest y below 20000 with
//! sqrt(y) < 6·log2(y), and the m side at floor(log2(7·y_max^6)) + 1,
//! because R(y, 7) < 7·y^6 bounds every candidate value.
//!
//! Both caps are recomputed at run time and checked against the constants
//! the argument was written for. If either drifts, the run aborts rather
//! than silently search a different rectangle.
//!
//! ## Algorithm
//!
//! The derived rectangle is small enough that exact values fit comfortably
//! in memory (x < 5575 and m <= 78 keep every repunit under roughly 970
//! bits), so this regime buckets exact bignum values directly instead of
//! going through the double-hash filter. Every x-side repunit with a valid
//! length lands in a hash map keyed by value; each R(y, 7) target is then
//! a single lookup.

use std::collections::HashMap;
use std::time::Instant;

use anyhow::{bail, Result};
use rayon::prelude::*;
use rug::Integer;
use tracing::info;

use crate::{repunit, Solution};

/// Fixed length on the y side of this regime.
const N: u32 = 7;

/// Scan limit for the threshold utility.
const THRESHOLD_LIMIT: u64 = 20_000;

/// The y cap the supporting argument was proven for.
pub const EXPECTED_Y_MAX: u64 = 5_575;

/// The m cap derived from EXPECTED_Y_MAX.
pub const EXPECTED_M_MAX: u32 = 78;

/// Largest y <= limit with sqrt(y) < 6·log2(y), by direct scan from 2.
/// Returns 0 when no y in range satisfies the inequality.
pub fn largest_y_with_sqrt_lt_6log2(limit: u64) -> u64 {
    let mut best = 0;
    for y in 2..=limit {
        let yf = y as f64;
        if yf.sqrt() < 6.0 * yf.log2() {
            best = y;
        }
    }
    best
}

/// The m cap for a given y cap: floor(log2(7·y^6)) + 1. Any x-side
/// repunit needing more terms already exceeds every R(y, 7) target.
pub fn derived_m_max(y_max: u64) -> u32 {
    (7.0 * (y_max as f64).powi(6)).log2().floor() as u32 + 1
}

/// Lengths m = 6t + 1 for t >= 2 up to m_max, the only lengths compatible
/// with 6 | (m - 1) and m > 7.
pub fn valid_lengths(m_max: u32) -> Vec<u32> {
    (2u32..)
        .map(|t| 6 * t + 1)
        .take_while(|&m| m <= m_max)
        .collect()
}

/// Run the regime over its full derived rectangle, aborting on any drift
/// between the recomputed caps and the proven constants.
pub fn check() -> Result<Vec<Solution>> {
    let started = Instant::now();

    let y_max = largest_y_with_sqrt_lt_6log2(THRESHOLD_LIMIT);
    if y_max != EXPECTED_Y_MAX {
        bail!(
            "threshold drift: largest y <= {} with sqrt(y) < 6*log2(y) came out {} instead of {}",
            THRESHOLD_LIMIT,
            y_max,
            EXPECTED_Y_MAX
        );
    }
    let m_max = derived_m_max(y_max);
    if m_max != EXPECTED_M_MAX {
        bail!(
            "length cap drift: floor(log2(7*{}^6)) + 1 came out {} instead of {}",
            y_max,
            m_max,
            EXPECTED_M_MAX
        );
    }

    let lengths = valid_lengths(m_max);
    info!(y_max, m_max, lengths = lengths.len(), "n=7 regime caps derived");

    let solutions = find_solutions(y_max, &lengths);
    info!(
        solutions = solutions.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "n=7 regime complete"
    );
    Ok(solutions)
}

/// Bucket R(x, m) exactly for every x in 2..y_max and every length, then
/// probe each R(y, 7) target for y in 3..=y_max. Emits tuples with x < y
/// and 7 < m; lengths are assumed to satisfy 6 | (m - 1) already, and the
/// emission rechecks it.
pub fn find_solutions(y_max: u64, lengths: &[u32]) -> Vec<Solution> {
    let entries: Vec<(Integer, (u64, u32))> = (2..y_max)
        .into_par_iter()
        .flat_map_iter(|x| {
            lengths
                .iter()
                .map(move |&m| (repunit(x, m), (x, m)))
        })
        .collect();

    let mut by_value: HashMap<Integer, Vec<(u64, u32)>> = HashMap::new();
    for (value, pair) in entries {
        by_value.entry(value).or_default().push(pair);
    }

    let mut solutions = Vec::new();
    for y in 3..=y_max {
        let target = repunit(y, N);
        if let Some(bucket) = by_value.get(&target) {
            for &(x, m) in bucket {
                if x < y && N < m && (m - 1) % 6 == 0 {
                    solutions.push(Solution { x, y, m, n: N });
                }
            }
        }
    }
    solutions
}
