//! # Sieve — Residue Tables and the Double-Hash Candidate Filter
//!
//! Core infrastructure used by every regime driver. Provides:
//!
//! 1. **Batched residue tables** (`ResidueTable`) — R(b, t) mod M for a whole
//!    range of bases at once, built by the linear recurrence rather than by
//!    modular exponentiation per entry.
//! 2. **Double-hash key packing** (`pack_key`, `KeyTables`) — residues under
//!    two independent 32-bit prime moduli packed into one u64, so candidate
//!    matching is a single integer comparison.
//! 3. **Candidate index** (`CandidateIndex`) — a hash join from packed keys
//!    to the (base, length) pairs that produced them, turning the quadratic
//!    all-pairs equality scan into a linear probe.
//!
//! ## Algorithm: Batched Linear Recurrence
//!
//! Repunits satisfy R(b, 1) = 1 and R(b, t) = b·R(b, t-1) + 1. Reducing the
//! recurrence mod M gives row t of the table from row t-1 in one pass over
//! the base range: O(bases · lengths) multiply-adds total, with u128
//! intermediates since residue·base can exceed 64 bits.
//!
//! ## Soundness
//!
//! Equal repunits always produce equal packed keys, so the filter can never
//! lose a solution. Unequal repunits collide only if they agree mod
//! MOD1·MOD2 ≈ 2^64, roughly a 2^-64 event per comparison; every key match
//! is therefore re-checked by exact bignum equality before anything is
//! reported.
//!
//! ## References
//!
//! - R. Goormaghtigh, L'Intermédiaire des Mathématiciens 24, 1917 — the two
//!   known coincidences 31 = R(2,5) = R(5,3) and 8191 = R(2,13) = R(90,3).
//! - R. Balasubramanian and T. N. Shorey, "On the equation
//!   a(x^m - 1)/(x - 1) = b(y^n - 1)/(y - 1)", Math. Scand. 46, 1980 —
//!   finiteness for fixed bases.
//! - OEIS A053696: numbers of the form (b^k - 1)/(b - 1) with k >= 3.

use std::collections::HashMap;

/// First filter modulus: the largest prime below 2^32.
pub const MOD1: u64 = 4_294_967_291;

/// Second filter modulus: the second-largest prime below 2^32.
pub const MOD2: u64 = 4_294_967_279;

/// Table of R(b, t) mod `modulus` for a fixed slice of bases and every
/// length 1..=max_len, stored row-major by length.
pub struct ResidueTable {
    max_len: u32,
    width: usize,
    rows: Vec<u64>,
}

impl ResidueTable {
    /// Build the full table for `bases` up to `max_len` by the mod-M
    /// recurrence. Residues stay below `modulus`, so the u128 widening
    /// keeps every intermediate exact even for bases near 2^64.
    pub fn build(bases: &[u64], max_len: u32, modulus: u64) -> Self {
        assert!(modulus >= 2, "residue table modulus must be >= 2");
        assert!(max_len >= 1, "residue table needs at least one row");
        let width = bases.len();
        let mut rows = vec![0u64; max_len as usize * width];

        // Row for length 1: R(b, 1) = 1 for every base.
        for cell in &mut rows[..width] {
            *cell = 1 % modulus;
        }
        for t in 2..=max_len as usize {
            let split = (t - 1) * width;
            let (done, todo) = rows.split_at_mut(split);
            let prev = &done[split - width..];
            let cur = &mut todo[..width];
            for (c, (&r, &b)) in cur.iter_mut().zip(prev.iter().zip(bases)) {
                *c = ((r as u128 * b as u128 + 1) % modulus as u128) as u64;
            }
        }

        ResidueTable {
            max_len,
            width,
            rows,
        }
    }

    /// Residues R(b, len) mod M for every base, in the order the table was
    /// built with. Panics if `len` is outside 1..=max_len.
    pub fn row(&self, len: u32) -> &[u64] {
        assert!(
            (1..=self.max_len).contains(&len),
            "length {} outside table range 1..={}",
            len,
            self.max_len
        );
        let start = (len as usize - 1) * self.width;
        &self.rows[start..start + self.width]
    }

    pub fn max_len(&self) -> u32 {
        self.max_len
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// Pack two sub-2^32 residues into a single comparison key: the MOD1
/// residue in the low 32 bits, the MOD2 residue in the high 32 bits.
#[inline]
pub fn pack_key(r1: u64, r2: u64) -> u64 {
    debug_assert!(r1 < (1 << 32) && r2 < (1 << 32));
    r1 | (r2 << 32)
}

/// Paired residue tables under MOD1 and MOD2 for one base range, the
/// producer side of the double-hash filter.
pub struct KeyTables {
    t1: ResidueTable,
    t2: ResidueTable,
}

impl KeyTables {
    pub fn build(bases: &[u64], max_len: u32) -> Self {
        KeyTables {
            t1: ResidueTable::build(bases, max_len, MOD1),
            t2: ResidueTable::build(bases, max_len, MOD2),
        }
    }

    /// Packed keys for every base at length `len`, in base order.
    pub fn keys(&self, len: u32) -> impl Iterator<Item = u64> + '_ {
        self.t1
            .row(len)
            .iter()
            .zip(self.t2.row(len))
            .map(|(&r1, &r2)| pack_key(r1, r2))
    }
}

/// Hash join from packed keys to the (y, n) pairs that produced them.
///
/// A bucket can legitimately hold several pairs: any two repunits with the
/// same exact value share a key, and genuine 2^-64 filter collisions are
/// possible in principle. Lookups therefore return the whole bucket and
/// callers confirm each candidate exactly.
pub struct CandidateIndex {
    buckets: HashMap<u64, Vec<(u64, u32)>>,
    pairs: usize,
}

impl CandidateIndex {
    /// Index every (y, n) with y in y_min..=y_max and n in n_min..=n_max.
    pub fn build(y_min: u64, y_max: u64, n_min: u32, n_max: u32) -> Self {
        assert!(y_min >= 2, "repunit bases start at 2");
        assert!(y_min <= y_max && n_min <= n_max, "empty index ranges");
        let ys: Vec<u64> = (y_min..=y_max).collect();
        let tables = KeyTables::build(&ys, n_max);

        let mut buckets: HashMap<u64, Vec<(u64, u32)>> = HashMap::new();
        let mut pairs = 0usize;
        for n in n_min..=n_max {
            for (i, key) in tables.keys(n).enumerate() {
                buckets.entry(key).or_default().push((ys[i], n));
                pairs += 1;
            }
        }

        CandidateIndex { buckets, pairs }
    }

    /// All indexed (y, n) pairs whose packed key equals `key`. Misses
    /// return an empty slice.
    pub fn candidates(&self, key: u64) -> &[(u64, u32)] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct packed keys in the index.
    pub fn distinct_keys(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of (y, n) pairs indexed.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    #[cfg(test)]
    pub(crate) fn from_raw(entries: impl IntoIterator<Item = (u64, (u64, u32))>) -> Self {
        let mut buckets: HashMap<u64, Vec<(u64, u32)>> = HashMap::new();
        let mut pairs = 0usize;
        for (key, pair) in entries {
            buckets.entry(key).or_default().push(pair);
            pairs += 1;
        }
        CandidateIndex { buckets, pairs }
    }
}
