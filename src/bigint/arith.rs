//! Signed arithmetic: sign reconciliation over the magnitude kernel, the
//! operator impls, and the named operations (`div_rem`, `pow`, `modpow`,
//! `gcd`).

use crate::bigint::{BigInt, Repr};
use crate::error::{Error, ErrorCode, Result};
use crate::lib::cmp::Ordering;
use crate::lib::ops::{Add, Div, Mul, Neg, Rem, Sub};
use crate::math::{div, gcd, large, mul, pow};

impl BigInt {
    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Quotient and remainder of truncated division in one pass.
    ///
    /// The quotient rounds toward zero; the remainder has the dividend's
    /// sign and satisfies `self == quotient * divisor + remainder` with
    /// `|remainder| < |divisor|`.
    ///
    /// Returns an error when `divisor` is zero. The `/` and `%` operators
    /// are built on this and panic in that case instead.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivideByZero));
        }
        if let (Repr::Small(a), Repr::Small(b)) = (self.repr(), divisor.repr()) {
            let (a, b) = (i64::from(*a), i64::from(*b));
            return Ok((BigInt::from(a / b), BigInt::from(a % b)));
        }

        let (quot, rem) = div::div_rem(&self.magnitude(), &divisor.magnitude());
        Ok((
            BigInt::from_sign_magnitude(self.is_negative() != divisor.is_negative(), quot),
            BigInt::from_sign_magnitude(self.is_negative(), rem),
        ))
    }

    /// Truncated division, or `None` when `divisor` is zero.
    #[inline]
    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(quot, _)| quot)
    }

    /// Remainder of truncated division, or `None` when `divisor` is zero.
    #[inline]
    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, rem)| rem)
    }

    /// Raise to a non-negative power.
    ///
    /// The exponent type already rules out negative exponents; there is no
    /// failure case. `pow(0)` is `1`, including for zero.
    pub fn pow(&self, exp: u32) -> BigInt {
        if exp == 0 {
            return BigInt::ONE;
        }
        let mag = pow::pow(&self.magnitude(), exp);
        BigInt::from_sign_magnitude(self.is_negative() && exp & 1 == 1, mag)
    }

    /// Modular exponentiation: `(self ^ exponent) mod modulus`.
    ///
    /// The result has the sign of `self` when the exponent is odd (and the
    /// result non-zero), matching truncated-division remainders. Errors:
    /// a zero `modulus` and a negative `exponent`.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(Error::new(ErrorCode::DivideByZero));
        }
        if exponent.is_negative() {
            return Err(Error::new(ErrorCode::NegativeExponent));
        }

        let mag = pow::modpow(
            &self.magnitude(),
            &exponent.magnitude(),
            &modulus.magnitude(),
        );
        let negative = self.is_negative() && exponent.is_odd() && !mag.is_empty();
        Ok(BigInt::from_sign_magnitude(negative, mag))
    }

    /// Greatest common divisor of `self` and `other`, ignoring signs.
    ///
    /// The result is non-negative; `gcd(x, 0)` is `|x|`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::from_sign_magnitude(false, gcd::gcd(&self.magnitude(), &other.magnitude()))
    }

    #[inline]
    pub(crate) fn is_odd(&self) -> bool {
        self.magnitude().first().map_or(false, |limb| limb & 1 == 1)
    }
}

// ADDITION / SUBTRACTION

/// Signed addition: equal signs add magnitudes; opposite signs subtract
/// the smaller magnitude from the larger, which donates its sign.
fn add_values(a: &BigInt, b: &BigInt) -> BigInt {
    if let (Repr::Small(x), Repr::Small(y)) = (a.repr(), b.repr()) {
        return BigInt::from(i64::from(*x) + i64::from(*y));
    }
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    if a.is_negative() == b.is_negative() {
        return BigInt::from_sign_magnitude(
            a.is_negative(),
            large::add(&a.magnitude(), &b.magnitude()),
        );
    }

    match a.cmp_magnitude(b) {
        Ordering::Equal => BigInt::ZERO,
        Ordering::Greater => BigInt::from_sign_magnitude(
            a.is_negative(),
            large::sub(&a.magnitude(), &b.magnitude()),
        ),
        Ordering::Less => BigInt::from_sign_magnitude(
            b.is_negative(),
            large::sub(&b.magnitude(), &a.magnitude()),
        ),
    }
}

/// Signed subtraction: opposite signs add magnitudes under `a`'s sign;
/// equal signs subtract the smaller magnitude from the larger.
fn sub_values(a: &BigInt, b: &BigInt) -> BigInt {
    if let (Repr::Small(x), Repr::Small(y)) = (a.repr(), b.repr()) {
        return BigInt::from(i64::from(*x) - i64::from(*y));
    }
    if a.is_zero() {
        return -b;
    }
    if b.is_zero() {
        return a.clone();
    }

    if a.is_negative() != b.is_negative() {
        return BigInt::from_sign_magnitude(
            a.is_negative(),
            large::add(&a.magnitude(), &b.magnitude()),
        );
    }

    match a.cmp_magnitude(b) {
        Ordering::Equal => BigInt::ZERO,
        Ordering::Greater => BigInt::from_sign_magnitude(
            a.is_negative(),
            large::sub(&a.magnitude(), &b.magnitude()),
        ),
        Ordering::Less => BigInt::from_sign_magnitude(
            !b.is_negative(),
            large::sub(&b.magnitude(), &a.magnitude()),
        ),
    }
}

// MULTIPLICATION

fn mul_values(a: &BigInt, b: &BigInt) -> BigInt {
    if let (Repr::Small(x), Repr::Small(y)) = (a.repr(), b.repr()) {
        return BigInt::from(i64::from(*x) * i64::from(*y));
    }
    if a.is_zero() || b.is_zero() {
        return BigInt::ZERO;
    }

    let negative = a.is_negative() != b.is_negative();
    let a_mag = a.magnitude();
    let b_mag = b.magnitude();

    // `x * x` written through the operators still takes the squaring
    // kernel, which halves the schoolbook work.
    let mag = if core::ptr::eq(a, b) {
        mul::sqr(&a_mag)
    } else if b_mag.len() == 1 {
        mul::mul_limb(&a_mag, b_mag[0])
    } else if a_mag.len() == 1 {
        mul::mul_limb(&b_mag, a_mag[0])
    } else {
        mul::mul(&a_mag, &b_mag)
    };
    BigInt::from_sign_magnitude(negative, mag)
}

// OPERATOR IMPLS

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> BigInt {
        add_values(self, rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        sub_values(self, rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> BigInt {
        mul_values(self, rhs)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncated division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, like the primitive integer types. Use
    /// [`BigInt::div_rem`] or [`BigInt::checked_div`] to observe the
    /// failure as a value.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((quot, _)) => quot,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Remainder of truncated division; takes the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, like the primitive integer types.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((_, rem)) => rem,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        match self.repr() {
            Repr::Small(value) => BigInt::from(-i64::from(*value)),
            Repr::Large { negative, limbs } => {
                BigInt::from_sign_magnitude(!negative, limbs.clone())
            }
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        match self.repr {
            Repr::Small(value) => BigInt::from(-i64::from(value)),
            Repr::Large { negative, limbs } => BigInt::from_sign_magnitude(!negative, limbs),
        }
    }
}

// Forward the owned-operand combinations to the reference impl.
macro_rules! forward_binop {
    ($(impl $imp:ident, $method:ident;)*) => {$(
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }
    )*};
}

forward_binop! {
    impl Add, add;
    impl Sub, sub;
    impl Mul, mul;
    impl Div, div;
    impl Rem, rem;
}
