// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

/// Computes `(a + b) mod m` without overflowing 64 bits.
///
/// When `a + b` would exceed `u64::MAX`, the sum is taken in two safe
/// steps: `u64::MAX % m` plus the overflow excess reduced mod `m`,
/// each below `m`, so a single correction by `m` suffices.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    if a > u64::MAX - b {
        // a + b = u64::MAX + excess; both summands below are < m,
        // so their sum fits in 64 bits and needs at most one correction.
        let excess = a - (u64::MAX - b);
        let mut r = u64::MAX % m + excess % m;
        if r >= m {
            r -= m;
        }
        r
    } else {
        (a + b) % m
    }
}

/// Computes `(a - b) mod m` without underflowing.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a < b {
        let d = (b - a) % m;
        // A zero residue must not be negated into m.
        if d == 0 {
            0
        } else {
            m - d
        }
    } else {
        (a - b) % m
    }
}
