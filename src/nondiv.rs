//! # Nondiv — The Non-Divisibility Regime
//!
//! Searches R(x, m) = R(y, n) under the side condition that (m - 1) is
//! *not* a multiple of (n - 1), over the proven-sufficient rectangle
//! x <= 315, y <= 316, n <= 503, m <= 4197. Tuples are normalized to
//! x < y and n < m, so each coincidence is counted once.
//!
//! ## Algorithm
//!
//! A direct scan would compare ~1.3M (x, m) repunits against ~157K (y, n)
//! repunits exactly. Instead the (y, n) side is indexed once by packed
//! double-hash key ([`CandidateIndex`]), and the (x, m) side streams its
//! keys row by row out of the batched residue tables. Each key probe
//! yields a handful of candidates at most; survivors of the ordering and
//! divisibility constraints are confirmed with exact bignum equality.
//!
//! The m rows are independent, so the scan parallelizes across m with
//! order-preserving collection.
//!
//! ## Complexity
//!
//! O(|x|·|m| + |y|·|n|) table work and hash probes, plus exact
//! confirmation only on key hits.

use std::time::Instant;

use anyhow::Result;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::sieve::{CandidateIndex, KeyTables};
use crate::{repunit, Solution};

/// Bounds of the rectangle this regime must cover. The supporting
/// argument reduces the non-divisibility case to exactly these ranges.
pub const X_MIN: u64 = 2;
pub const X_MAX: u64 = 315;
pub const M_MIN: u32 = 5;
pub const M_MAX: u32 = 4197;
pub const Y_MIN: u64 = 3;
pub const Y_MAX: u64 = 316;
pub const N_MIN: u32 = 4;
pub const N_MAX: u32 = 503;

/// Run the regime over its full configured rectangle.
pub fn check() -> Result<Vec<Solution>> {
    let started = Instant::now();
    let index = CandidateIndex::build(Y_MIN, Y_MAX, N_MIN, N_MAX);
    info!(
        distinct_keys = index.distinct_keys(),
        pairs = index.pairs(),
        "candidate index built"
    );

    let solutions = find_solutions(X_MIN, X_MAX, M_MIN, M_MAX, &index);
    info!(
        solutions = solutions.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "non-divisibility regime complete"
    );
    Ok(solutions)
}

/// Stream packed keys for x in x_min..=x_max, m in m_min..=m_max and join
/// them against a prebuilt (y, n) index. Emits only tuples with x < y,
/// n < m and (m - 1) not divisible by (n - 1), each confirmed exactly.
///
/// Indexed pairs must have n >= 2.
pub fn find_solutions(
    x_min: u64,
    x_max: u64,
    m_min: u32,
    m_max: u32,
    index: &CandidateIndex,
) -> Vec<Solution> {
    let xs: Vec<u64> = (x_min..=x_max).collect();
    let tables = KeyTables::build(&xs, m_max);

    (m_min..=m_max)
        .into_par_iter()
        .flat_map_iter(|m| {
            let mut hits = Vec::new();
            for (i, key) in tables.keys(m).enumerate() {
                let x = xs[i];
                for &(y, n) in index.candidates(key) {
                    if x >= y || n >= m {
                        continue;
                    }
                    if (m - 1) % (n - 1) == 0 {
                        continue;
                    }
                    if repunit(x, m) == repunit(y, n) {
                        hits.push(Solution { x, y, m, n });
                    } else {
                        debug!(x, y, m, n, "filter false positive rejected exactly");
                    }
                }
            }
            hits
        })
        .collect()
}
