pub mod div_finite;
pub mod n7;
pub mod nondiv;
pub mod sieve;

use std::fmt;

use rug::ops::Pow;
use rug::Integer;
use serde::Serialize;

/// A confirmed coincidence between two repunits: R(x, m) = R(y, n) with
/// x < y and n < m. Every solution emitted by a regime driver has survived
/// exact bignum confirmation, never just the residue filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub x: u64,
    pub y: u64,
    pub m: u32,
    pub n: u32,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.m, self.n)
    }
}

/// Exact repunit value R(base, len) = (base^len - 1) / (base - 1), the
/// number written as `len` ones in base `base`.
///
/// The division is exact for every base >= 2, so plain integer division
/// is safe here.
pub fn repunit(base: u64, len: u32) -> Integer {
    assert!(base >= 2, "repunit base must be >= 2, got {}", base);
    assert!(len >= 1, "repunit length must be >= 1, got {}", len);
    (Integer::from(base).pow(len) - 1u32) / (base - 1)
}
