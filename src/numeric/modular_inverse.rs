// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::error::ModError;
use crate::numeric::extended_euclid::extended_euclid;
use crate::numeric::mul_mod;

/// Computes the multiplicative inverse of `a` modulo `m`, i.e. the
/// unique `x` in `[0, m)` with `a * x = 1 (mod m)`.
///
/// Fails with [`ModError::NoInverse`] when `gcd(a, m) != 1`, and with
/// [`ModError::DivideByZero`] for a zero modulus.
pub fn mod_inverse(a: u64, m: u64) -> Result<u64, ModError> {
    if m == 0 {
        return Err(ModError::DivideByZero);
    }
    let a = a % m;
    let (g, x, _) = extended_euclid(a, m, m);
    if g != 1 {
        return Err(ModError::NoInverse);
    }
    Ok(x)
}

/// Computes `(a / b) mod m` as `a * b⁻¹ (mod m)`.
///
/// Fails with [`ModError::DivideByZero`] for a zero divisor or
/// modulus, and propagates [`ModError::NoInverse`] when `b` is not
/// invertible mod `m`.
pub fn div_mod(a: u64, b: u64, m: u64) -> Result<u64, ModError> {
    if b == 0 {
        return Err(ModError::DivideByZero);
    }
    mul_mod(a, mod_inverse(b, m)?, m)
}
