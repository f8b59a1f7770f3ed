// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use thiserror::Error;

/// Errors reported by the fallible modular operations.
///
/// Both variants are precondition violations, not transient conditions:
/// retrying the same call will fail the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModError {
    /// A modulus or divisor of zero was supplied to an operation that
    /// requires a positive one.
    #[error("division by zero")]
    DivideByZero,

    /// The operand shares a common factor with the modulus, so no
    /// multiplicative inverse exists.
    #[error("inverse does not exist")]
    NoInverse,
}
