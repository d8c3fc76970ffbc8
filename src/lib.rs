//! Arbitrary-precision signed integers with a compact dual representation.
//!
//! A [`BigInt`] stores values that fit a machine word inline and spills
//! larger values into a little-endian sequence of 32-bit limbs, so the
//! common small cases never touch the heap while the magnitude can grow
//! without bound.
//!
//! ```
//! use compactint::BigInt;
//!
//! let a: BigInt = "12345678901234567890".parse().unwrap();
//! let b = BigInt::from(98_765_432_109_876_543_210_u128);
//! assert_eq!(
//!     (&a * &b).to_string(),
//!     "1219326311370217952237463801111263526900",
//! );
//! ```
//!
//! # Operations
//!
//! The usual operator traits (`+`, `-`, `*`, `/`, `%`, `<<`, `>>`, `&`,
//! `|`, `^`, `!`) are implemented for owned and borrowed operands.
//! Division truncates toward zero and the remainder takes the sign of the
//! dividend, matching the primitive integer types. Bitwise operators act
//! on the infinite two's-complement expansion of their operands.
//!
//! Beyond the operators, [`BigInt`] provides [`div_rem`](BigInt::div_rem),
//! [`pow`](BigInt::pow), [`modpow`](BigInt::modpow), [`gcd`](BigInt::gcd),
//! [`log`](BigInt::log), bit queries, and two's-complement byte
//! import/export in either endianness.
//!
//! # Errors
//!
//! Fallible operations return [`Error`], which classifies into a
//! [`Category`]: division by zero, overflow of a fixed-width target, or an
//! invalid argument. The arithmetic operators themselves panic on division
//! by zero, like the primitive types; use the `checked_`/`div_rem` forms
//! to observe the failure as a value.
//!
//! # `no_std`
//!
//! The crate is `no_std`-compatible: disable the default `std` feature and
//! enable `libm` to provide the float math used by [`log`](BigInt::log)
//! and [`to_f64`](BigInt::to_f64).

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(clippy::manual_range_contains, clippy::needless_range_loop)]

extern crate alloc;

/// Facade around the core/std features, so the rest of the crate imports
/// from one place regardless of `no_std`.
pub(crate) mod lib {
    pub(crate) use alloc::string::String;
    pub(crate) use alloc::vec::Vec;

    #[cfg(feature = "std")]
    pub(crate) use std::{cmp, fmt, hash, iter, ops};

    #[cfg(not(feature = "std"))]
    pub(crate) use core::{cmp, fmt, hash, iter, ops};
}

// MODULES
mod bigint;
mod error;
mod math;

// API
pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
