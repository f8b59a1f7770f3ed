// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Exact, overflow-safe modular arithmetic on `u64`.
//!
//! Every operation reduces into `[0, m)` without ever overflowing the
//! native 64-bit representation, using a widening multiply where a
//! double-width product is needed. On top of the arithmetic
//! primitives sit a deterministic Miller-Rabin primality test (exact
//! over all of `u64`) and a bit-exact integer square root.
//!
//! All functions are pure: no shared state, no I/O, safe to call from
//! any number of threads.
//!
//! ```
//! use umod64::{is_prime, mod_inverse, mul_mod, pow_mod};
//!
//! let p = 18_446_744_073_709_551_557; // largest 64-bit prime
//! assert!(is_prime(p));
//!
//! let inv = mod_inverse(3, p).unwrap();
//! assert_eq!(mul_mod(3, inv, p), Ok(1));
//! assert_eq!(pow_mod(3, p - 2, p), inv);
//! ```

mod error;
mod isqrt;
mod miller_rabin;
pub mod numeric;

pub use crate::error::ModError;
pub use crate::isqrt::{is_square, isqrt};
pub use crate::miller_rabin::is_prime;
pub use crate::numeric::{add_mod, div_mod, mod_inverse, mul_mod, pow_mod, sub_mod};
