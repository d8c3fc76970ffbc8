//! Plain decimal formatting and parsing.
//!
//! Both directions work in chunks of nine digits, one limb division or
//! multiply-add per chunk, so the cost is one pass of the single-limb
//! kernels per nine digits. No localization, no radix prefixes.

use crate::bigint::{BigInt, Repr};
use crate::error::{Error, ErrorCode};
use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{String, Vec};
use crate::math::{div, trim, Limb, Wide};
use core::str::FromStr;

/// 10^9: the largest power of ten in a limb.
const CHUNK: Limb = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;

/// Powers of ten up to [`CHUNK`], indexed by exponent.
const POW10: [Limb; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        let digits = match self.repr() {
            Repr::Small(value) => {
                return f.pad_integral(*value >= 0, "", buf.format(value.unsigned_abs()));
            }
            Repr::Large { limbs, .. } => {
                // Peel nine decimal digits per division.
                let mut chunks: Vec<Limb> = Vec::new();
                let mut rest: Vec<Limb> = limbs.clone();
                while !rest.is_empty() {
                    let (quot, rem) = div::div_rem_limb(&rest, CHUNK);
                    chunks.push(rem);
                    rest = trim(&quot).to_vec();
                }

                let mut digits = String::with_capacity(chunks.len() * CHUNK_DIGITS);
                let (&top, lower) = chunks.split_last().unwrap();
                digits.push_str(buf.format(top));
                for &chunk in lower.iter().rev() {
                    let formatted = buf.format(chunk);
                    for _ in formatted.len()..CHUNK_DIGITS {
                        digits.push('0');
                    }
                    digits.push_str(formatted);
                }
                digits
            }
        };
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl Debug for BigInt {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parse an optionally signed decimal string.
    fn from_str(s: &str) -> Result<BigInt, Error> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.first() {
            Some(b'+') => (false, &bytes[1..]),
            Some(b'-') => (true, &bytes[1..]),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(Error::new(ErrorCode::EmptyInput));
        }

        // Fold nine digits at a time: limbs = limbs * 10^k + chunk.
        let mut limbs: Vec<Limb> = Vec::new();
        for chunk in digits.chunks(CHUNK_DIGITS) {
            let mut value: Limb = 0;
            for &byte in chunk {
                if !byte.is_ascii_digit() {
                    return Err(Error::new(ErrorCode::InvalidDigit));
                }
                value = value * 10 + Limb::from(byte - b'0');
            }
            imul_add(&mut limbs, POW10[chunk.len()], value);
        }

        Ok(BigInt::from_sign_magnitude(negative, limbs))
    }
}

/// `limbs = limbs * mul + add` in place; `add < mul <= 10^9`.
fn imul_add(limbs: &mut Vec<Limb>, mul: Limb, add: Limb) {
    let mut carry = Wide::from(add);
    for limb in limbs.iter_mut() {
        carry += Wide::from(*limb) * Wide::from(mul);
        *limb = carry as Limb;
        carry >>= 32;
    }
    if carry != 0 {
        limbs.push(carry as Limb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trip() {
        let cases = [
            "0",
            "1",
            "-1",
            "2147483647",
            "-2147483648",
            "4294967296",
            "-4294967296",
            "1000000000000000000000000000000000000",
            "-999999999999999999999999999999999999",
            "12345678901234567890123456789012345678901234567890",
        ];
        for s in cases {
            let v: BigInt = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
        }
    }

    #[test]
    fn interior_zero_chunks_pad() {
        // 10^18 + 7: the middle chunk is all zeros and must print padded.
        let v: BigInt = "1000000000000000007".parse().unwrap();
        assert_eq!(v.to_string(), "1000000000000000007");
    }

    #[test]
    fn parse_oddities() {
        assert_eq!("+42".parse::<BigInt>().unwrap(), BigInt::from(42));
        assert_eq!("000".parse::<BigInt>().unwrap(), BigInt::ZERO);
        assert_eq!("-000".parse::<BigInt>().unwrap(), BigInt::ZERO);
        assert_eq!(
            "00000000000000000000000000042".parse::<BigInt>().unwrap(),
            BigInt::from(42),
        );

        assert!(matches!(
            "".parse::<BigInt>().unwrap_err().code(),
            ErrorCode::EmptyInput,
        ));
        assert!(matches!(
            "-".parse::<BigInt>().unwrap_err().code(),
            ErrorCode::EmptyInput,
        ));
        assert!(matches!(
            "12x4".parse::<BigInt>().unwrap_err().code(),
            ErrorCode::InvalidDigit,
        ));
        assert!(matches!(
            " 1".parse::<BigInt>().unwrap_err().code(),
            ErrorCode::InvalidDigit,
        ));
    }

    #[test]
    fn padding_flags() {
        assert_eq!(format!("{:>8}", BigInt::from(-42)), "     -42");
        assert_eq!(format!("{:08}", BigInt::from(-42)), "-0000042");
    }
}
