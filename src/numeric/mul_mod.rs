// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ModError;
use crate::numeric::add_mod;

/// Computes `(a * b) mod m` exactly, for any `u64` operands.
///
/// Both operands are reduced mod `m` before combination, so callers
/// need not pre-normalize. The product is formed at double width and
/// reduced in one step.
pub fn mul_mod(a: u64, b: u64, m: u64) -> Result<u64, ModError> {
    if m == 0 {
        return Err(ModError::DivideByZero);
    }
    let (a, b) = (a % m, b % m);
    // Covers m == 1 as well, since everything reduces to 0.
    if a == 0 || b == 0 {
        return Ok(0);
    }
    Ok(wide_mul_mod(a, b, m))
}

/// `(a * b) mod m` through the native widening multiply and divide.
///
/// Requires `m > 0`.
pub(crate) fn wide_mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// Portable `(a * b) mod m` with no double-width type: binary
/// double-and-add over the bits of the smaller operand, with the
/// overflow-safe add keeping every intermediate below `m`.
///
/// Produces exactly the same results as [`wide_mul_mod`]; kept (and
/// cross-tested against it) as the fallback for environments without
/// a widening multiply.
///
/// Requires `m > 0`.
#[allow(dead_code)]
pub(crate) fn doubling_mul_mod(a: u64, b: u64, m: u64) -> u64 {
    let (mut a, mut b) = (a % m, b % m);
    if a == 0 || b == 0 {
        return 0;
    }
    // Iterate over the bits of the smaller operand.
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }

    let mut r = 0;
    while b > 0 {
        if b & 1 == 1 {
            r = add_mod(r, a, m);
        }
        b >>= 1;
        if b == 0 {
            break;
        }
        a = add_mod(a, a, m);
    }
    r
}
