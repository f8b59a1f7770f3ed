// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// spell-checker:ignore pseudoprime pseudoprimes

use crate::numeric::mul_mod::wide_mul_mod;
use crate::numeric::pow_mod;

// Witness bases for the deterministic Miller-Rabin test, paired with
// the largest value below which passing every base up to and including
// that witness proves primality (the published strong-pseudoprime
// bounds for the prime bases 2..41, clamped to u64::MAX once the bound
// leaves 64-bit range). A bound may understate the certified range,
// never overstate it.
#[allow(clippy::unreadable_literal)]
static WITNESSES: [(u64, u64); 13] = [
    (2, 2047),
    (3, 1373653),
    (5, 25326001),
    (7, 3215031751),
    (11, 2152302898747),
    (13, 3474749660383),
    (17, 341550071728321),
    (19, 341550071728321),
    (23, 3825123056546413051),
    (29, 3825123056546413051),
    (31, 3825123056546413051),
    (37, u64::MAX),
    (41, u64::MAX),
];

/// Deterministic Miller-Rabin primality test, exact over all of `u64`.
pub fn is_prime(target: u64) -> bool {
    if target < 2 {
        return false;
    }
    if target == 2 || target == 3 {
        return true;
    }
    if target % 2 == 0 {
        return false;
    }

    // Trial division by the witness bases themselves; past this point
    // the target is odd, coprime to every base, and larger than all of
    // them (every odd composite below 43² > 41 has a factor here).
    for &(p, _) in &WITNESSES {
        if target == p {
            return true;
        }
        if target % p == 0 {
            return false;
        }
    }

    // target - 1 = d * 2^s with d odd
    let s = (target - 1).trailing_zeros();
    let d = (target - 1) >> s;

    'witness: for &(p, bound) in &WITNESSES {
        let mut x = pow_mod(p, d, target);

        if x != 1 && x != target - 1 {
            for _ in 0..s - 1 {
                x = wide_mul_mod(x, x, target);
                if x == target - 1 {
                    if target < bound {
                        return true;
                    }
                    continue 'witness;
                }
            }
            // Never reached -1 over the full doubling chain: composite.
            return false;
        }

        if target < bound {
            return true;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{mod_inverse, pow_mod};

    #[test]
    fn trivial_and_small() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(is_prime(7));
        assert!(!is_prime(10));
        assert!(is_prime(41));
        assert!(is_prime(43));
        assert!(is_prime(47));
        assert!(is_prime(97));
        assert!(!is_prime(198));
        assert!(is_prime(65479));
        assert!(is_prime(65497));
        assert!(!is_prime(997 * 1009));
        assert!(!is_prime(65479 * 65497));
    }

    #[test]
    fn largest_u64_primes() {
        let primes: [u64; 10] = [
            18_446_744_073_709_551_557,
            18_446_744_073_709_551_533,
            18_446_744_073_709_551_521,
            18_446_744_073_709_551_437,
            18_446_744_073_709_551_427,
            18_446_744_073_709_551_359,
            18_446_744_073_709_551_337,
            18_446_744_073_709_551_293,
            18_446_744_073_709_551_263,
            18_446_744_073_709_551_253,
        ];

        for p in primes {
            assert!(is_prime(p), "{p} is prime");
            assert!(!is_prime(p + 2), "{} is composite", p + 2);
        }
    }

    #[test]
    fn strong_pseudoprimes_are_rejected() {
        // Smallest strong pseudoprimes to the first k prime bases;
        // each sits exactly on a bound in the witness table.
        assert!(!is_prime(2047)); // 23 * 89
        assert!(!is_prime(1373653));
        assert!(!is_prime(25326001));
        assert!(!is_prime(3215031751));
        assert!(!is_prime(2152302898747));
        assert!(!is_prime(3474749660383));
        assert!(!is_prime(341550071728321));
        assert!(!is_prime(3825123056546413051));
    }

    #[test]
    fn agrees_with_sieve_below_one_million() {
        const LIMIT: usize = 1_000_000;
        let mut composite = vec![false; LIMIT];
        composite[0] = true;
        composite[1] = true;
        let mut i = 2;
        while i * i < LIMIT {
            if !composite[i] {
                for j in (i * i..LIMIT).step_by(i) {
                    composite[j] = true;
                }
            }
            i += 1;
        }

        for n in 0..LIMIT {
            assert_eq!(is_prime(n as u64), !composite[n], "mismatch at {n}");
        }
    }

    #[test]
    fn certified_primes_support_fermat_inverses() {
        // Internal consistency: for every prime p certified here,
        // a^(p-2) is the inverse of a
        for p in (3..500).filter(|&n| is_prime(n)) {
            for i in 2..p - 1 {
                assert_eq!(mod_inverse(i, p), Ok(pow_mod(i, p - 2, p)));
            }
        }
    }

    #[test]
    fn mersenne_primes() {
        for e in [13, 17, 19, 31, 61] {
            assert!(is_prime((1u64 << e) - 1));
        }
        assert!(!is_prime((1u64 << 11) - 1)); // 2047 again, via its Mersenne form
        assert!(!is_prime((1u64 << 29) - 1));
    }
}
