//! Conversions between [`BigInt`] and the primitive numeric types, and
//! the float-facing operations (`to_f64`, `log`).

use crate::bigint::{BigInt, Repr};
use crate::error::{Error, ErrorCode, Result};
use crate::math::{self, shift, Limb};

#[cfg(feature = "std")]
#[inline]
fn ln(x: f64) -> f64 {
    x.ln()
}

#[cfg(not(feature = "std"))]
#[inline]
fn ln(x: f64) -> f64 {
    libm::log(x)
}

// FROM PRIMITIVE INTEGERS

impl BigInt {
    fn from_i64(value: i64) -> BigInt {
        if value > i64::from(i32::MIN) && value <= i64::from(i32::MAX) {
            return BigInt::small(value as i32);
        }
        let mag = value.unsigned_abs();
        BigInt::from_sign_magnitude(
            value < 0,
            alloc::vec![mag as Limb, (mag >> 32) as Limb],
        )
    }

    fn from_u64(value: u64) -> BigInt {
        if value <= i32::MAX as u64 {
            return BigInt::small(value as i32);
        }
        BigInt::from_sign_magnitude(false, alloc::vec![value as Limb, (value >> 32) as Limb])
    }

    fn from_u128(value: u128) -> BigInt {
        if value <= u128::from(u64::MAX) {
            return BigInt::from_u64(value as u64);
        }
        BigInt::from_sign_magnitude(
            false,
            alloc::vec![
                value as Limb,
                (value >> 32) as Limb,
                (value >> 64) as Limb,
                (value >> 96) as Limb,
            ],
        )
    }

    fn from_i128(value: i128) -> BigInt {
        if let Ok(narrow) = i64::try_from(value) {
            return BigInt::from_i64(narrow);
        }
        let mag = value.unsigned_abs();
        BigInt::from_sign_magnitude(
            value < 0,
            alloc::vec![
                mag as Limb,
                (mag >> 32) as Limb,
                (mag >> 64) as Limb,
                (mag >> 96) as Limb,
            ],
        )
    }
}

macro_rules! from_signed {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(value: $ty) -> BigInt {
                BigInt::from_i64(i64::from(value))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(value: $ty) -> BigInt {
                BigInt::from_u64(u64::from(value))
            }
        }
    )*};
}

from_signed!(i8 i16 i32 i64);
from_unsigned!(u8 u16 u32 u64);

impl From<i128> for BigInt {
    #[inline]
    fn from(value: i128) -> BigInt {
        BigInt::from_i128(value)
    }
}

impl From<u128> for BigInt {
    #[inline]
    fn from(value: u128) -> BigInt {
        BigInt::from_u128(value)
    }
}

impl From<isize> for BigInt {
    #[inline]
    fn from(value: isize) -> BigInt {
        BigInt::from_i64(value as i64)
    }
}

impl From<usize> for BigInt {
    #[inline]
    fn from(value: usize) -> BigInt {
        BigInt::from_u64(value as u64)
    }
}

// INTO PRIMITIVE INTEGERS

impl TryFrom<&BigInt> for u128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<u128> {
        if value.is_negative() {
            return Err(Error::new(ErrorCode::ValueOverflow));
        }
        let mag = value.magnitude();
        if mag.len() > 4 {
            return Err(Error::new(ErrorCode::ValueOverflow));
        }
        let mut wide: u128 = 0;
        for (i, &limb) in mag.iter().enumerate() {
            wide |= u128::from(limb) << (32 * i);
        }
        Ok(wide)
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = Error;

    fn try_from(value: &BigInt) -> Result<i128> {
        let mag = value.magnitude();
        if mag.len() > 4 {
            return Err(Error::new(ErrorCode::ValueOverflow));
        }
        let mut wide: u128 = 0;
        for (i, &limb) in mag.iter().enumerate() {
            wide |= u128::from(limb) << (32 * i);
        }
        if value.is_negative() {
            if wide > 1u128 << 127 {
                return Err(Error::new(ErrorCode::ValueOverflow));
            }
            Ok((wide as i128).wrapping_neg())
        } else {
            i128::try_from(wide).map_err(|_| Error::new(ErrorCode::ValueOverflow))
        }
    }
}

macro_rules! try_into_signed {
    ($($ty:ty)*) => {$(
        impl TryFrom<&BigInt> for $ty {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$ty> {
                let wide = i128::try_from(value)?;
                <$ty>::try_from(wide).map_err(|_| Error::new(ErrorCode::ValueOverflow))
            }
        }

        impl TryFrom<BigInt> for $ty {
            type Error = Error;

            #[inline]
            fn try_from(value: BigInt) -> Result<$ty> {
                <$ty>::try_from(&value)
            }
        }
    )*};
}

macro_rules! try_into_unsigned {
    ($($ty:ty)*) => {$(
        impl TryFrom<&BigInt> for $ty {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$ty> {
                let wide = u128::try_from(value)?;
                <$ty>::try_from(wide).map_err(|_| Error::new(ErrorCode::ValueOverflow))
            }
        }

        impl TryFrom<BigInt> for $ty {
            type Error = Error;

            #[inline]
            fn try_from(value: BigInt) -> Result<$ty> {
                <$ty>::try_from(&value)
            }
        }
    )*};
}

try_into_signed!(i8 i16 i32 i64 isize);
try_into_unsigned!(u8 u16 u32 u64 usize);

impl TryFrom<BigInt> for i128 {
    type Error = Error;

    #[inline]
    fn try_from(value: BigInt) -> Result<i128> {
        i128::try_from(&value)
    }
}

impl TryFrom<BigInt> for u128 {
    type Error = Error;

    #[inline]
    fn try_from(value: BigInt) -> Result<u128> {
        u128::try_from(&value)
    }
}

// FLOATS

impl TryFrom<f64> for BigInt {
    type Error = Error;

    /// Convert the integer part of a finite `f64`.
    ///
    /// Fails on NaN and the infinities. Values below 1 in magnitude
    /// (including every subnormal) truncate to zero.
    fn try_from(value: f64) -> Result<BigInt> {
        if !value.is_finite() {
            return Err(Error::new(ErrorCode::NonFiniteFloat));
        }

        let bits = value.to_bits();
        let negative = bits >> 63 != 0;
        let biased = ((bits >> 52) & 0x7FF) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        if biased == 0 {
            // Subnormal magnitudes are far below 1.
            return Ok(BigInt::ZERO);
        }

        // value = mantissa * 2^exponent with a 53-bit mantissa.
        let mantissa = fraction | 1 << 52;
        let exponent = biased - 1075;

        let magnitude = if exponent >= 0 {
            shift::shl(
                &[mantissa as Limb, (mantissa >> 32) as Limb],
                exponent as usize,
            )
        } else if exponent <= -53 {
            return Ok(BigInt::ZERO);
        } else {
            let int = mantissa >> (-exponent) as u32;
            alloc::vec![int as Limb, (int >> 32) as Limb]
        };
        Ok(BigInt::from_sign_magnitude(negative, magnitude))
    }
}

impl BigInt {
    /// Nearest `f64`, rounding ties to even; magnitudes past 1024 bits
    /// become the matching infinity.
    pub fn to_f64(&self) -> f64 {
        match self.repr() {
            Repr::Small(value) => f64::from(*value),
            Repr::Large { negative, limbs } => {
                let sign = if *negative { -1.0 } else { 1.0 };
                if math::bit_length(limbs) > 1024 {
                    return sign * f64::INFINITY;
                }

                // Fold everything below the top 64 bits into a sticky bit;
                // the u64-to-f64 cast then performs the round to nearest,
                // ties to even, and the power-of-two scale is exact.
                let (top, shift, sticky) = top_64_bits(limbs);
                sign * (top | u64::from(sticky)) as f64 * exp2(shift as i32)
            }
        }
    }

    /// Logarithm of the value in the given base.
    ///
    /// Non-positive values are NaN. The base edge cases follow IEEE
    /// conventions: base 1 is NaN, and bases 0 and +∞ are NaN except for
    /// `log(1)`, which is zero.
    pub fn log(&self, base: f64) -> f64 {
        if self.is_negative() || self.is_zero() || base == 1.0 {
            return f64::NAN;
        }
        if base == f64::INFINITY || base == 0.0 {
            return if self.is_one() { 0.0 } else { f64::NAN };
        }

        match self.repr() {
            Repr::Small(value) => ln(f64::from(*value)) / ln(base),
            Repr::Large { limbs, .. } => {
                let (top, shift, _) = top_64_bits(limbs);
                (ln(top as f64) + shift as f64 * core::f64::consts::LN_2) / ln(base)
            }
        }
    }

    /// Natural logarithm; NaN for non-positive values.
    #[inline]
    pub fn ln(&self) -> f64 {
        self.log(core::f64::consts::E)
    }
}

/// Decompose a magnitude as `top * 2^shift` with a 64-bit `top`, plus a
/// sticky flag for any non-zero bit below the cut.
fn top_64_bits(limbs: &[Limb]) -> (u64, u64, bool) {
    let bits = math::bit_length(limbs);
    if bits <= 64 {
        let mut top = 0u64;
        for (i, &limb) in limbs.iter().enumerate() {
            top |= u64::from(limb) << (32 * i);
        }
        return (top, 0, false);
    }

    let shift = bits - 64;
    let digits = (shift / 32) as usize;
    let off = (shift % 32) as u32;

    let window = shift::shr(limbs, shift as usize);
    let top = u64::from(window[0]) | u64::from(window[1]) << 32;

    let sticky = limbs[..digits].iter().any(|&limb| limb != 0)
        || (off > 0 && limbs[digits] << (32 - off) != 0);
    (top, shift, sticky)
}

/// `2^exp` for `0 <= exp <= 1023`, built directly from the IEEE encoding.
#[inline]
fn exp2(exp: i32) -> f64 {
    debug_assert!(exp >= 0 && exp < 1024);
    f64::from_bits(((exp as u64) + 1023) << 52)
}
