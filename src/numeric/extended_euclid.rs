// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use crate::numeric::mul_mod::wide_mul_mod;
use crate::numeric::sub_mod;

/// Extended Euclidean algorithm with coefficient arithmetic mod `m`.
///
/// Returns `(gcd(a, b), x, y)` with `a*x + b*y = gcd (mod m)`, both
/// coefficients reduced into `[0, m)`. The coefficients never leave
/// the residue ring, so nothing overflows regardless of input size.
///
/// The recursion `egcd(a, b) = egcd(b % a, a)` (base case `a == 0`
/// yielding `(b, 0, 1)`, reconstruction `x = y' - (b/a)*x'`) is
/// unrolled into a loop carrying the remainder pair and both
/// coefficient pairs; the quotient sequence, and therefore the
/// result, is identical.
///
/// Requires `m > 0`.
pub(crate) fn extended_euclid(a: u64, b: u64, m: u64) -> (u64, u64, u64) {
    // u = xu*a + yu*b and v = xv*a + yv*b (mod m) at every step
    let (mut u, mut v) = (a, b);
    let (mut xu, mut xv) = (1 % m, 0);
    let (mut yu, mut yv) = (0, 1 % m);

    while u != 0 {
        let q = v / u;
        let xn = sub_mod(xv, wide_mul_mod(q, xu, m), m);
        let yn = sub_mod(yv, wide_mul_mod(q, yu, m), m);
        (v, u) = (u, v - q * u);
        (xv, xu) = (xu, xn);
        (yv, yu) = (yu, yn);
    }

    (v, xv, yv)
}
