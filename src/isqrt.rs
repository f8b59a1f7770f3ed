// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

/// Computes `floor(sqrt(x))` exactly, by the digit-by-digit binary
/// method: a probe bit starts at the largest power of four `<= x` and
/// walks down two bits at a time, claiming each result bit whose
/// square still fits under the remainder.
pub fn isqrt(x: u64) -> u64 {
    if x <= 3 {
        return u64::from(x != 0);
    }

    // Largest power of four not exceeding x: leading-bit position
    // rounded down to even.
    let mut bit = 1u64 << ((63 - x.leading_zeros()) & !1);
    let mut num = x;
    let mut res = 0u64;

    while bit != 0 {
        if num >= res + bit {
            num -= res + bit;
            res = (res >> 1) + bit;
        } else {
            res >>= 1;
        }
        bit >>= 2;
    }

    res
}

/// Returns whether `x` is a perfect square.
pub fn is_square(x: u64) -> bool {
    let r = isqrt(x);
    // r <= 2³² - 1, so the square cannot overflow
    r * r == x
}
