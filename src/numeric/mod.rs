// This file is part of the umod64 package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

mod add_sub;
pub use add_sub::{add_mod, sub_mod};

pub(crate) mod extended_euclid;

mod modular_inverse;
pub use modular_inverse::{div_mod, mod_inverse};

pub(crate) mod mul_mod;
pub use mul_mod::mul_mod;

mod pow_mod;
pub use pow_mod::pow_mod;
