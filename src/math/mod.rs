//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms operate on unsigned magnitudes stored as little-endian
//! slices of 32-bit limbs, so for a `vec![0, 1, 2, 3]`, `3` is the most
//! significant limb, and `0` is the least significant limb. Signs are the
//! caller's concern.

use smallvec::SmallVec;

// MODULES
pub(crate) mod div;
pub(crate) mod gcd;
pub(crate) mod large;
pub(crate) mod mul;
pub(crate) mod pow;
pub(crate) mod scalar;
pub(crate) mod shift;

// ALIASES

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base 10, except it stores 32-bit
/// numbers instead. 32 bits keeps the widening arithmetic in `u64`, which
/// every supported platform multiplies natively.
pub(crate) type Limb = u32;

/// Type able to hold the product of two limbs plus a limb of carry.
pub(crate) type Wide = u64;

/// Signed counterpart of [`Wide`], used to thread borrows: after a
/// subtraction step, an arithmetic shift right by [`LIMB_BITS`] leaves
/// `0` or `-1`.
pub(crate) type SignedWide = i64;

/// Bits per limb.
pub(crate) const LIMB_BITS: usize = 32;

// THRESHOLDS

/// Number of limbs at which multiplication switches over to Karatsuba.
///
/// Karatsuba tends to out-perform the schoolbook kernel at ~320-640 bits,
/// so we go halfway. The recursion threads the threshold as a parameter,
/// which lets the tests force the recursive paths with tiny inputs.
pub(crate) const KARATSUBA_MUL_THRESHOLD: usize = 32;

/// Number of limbs at which squaring switches over to the recursive path.
pub(crate) const KARATSUBA_SQR_THRESHOLD: usize = 32;

/// Largest scratch size, in limbs, served from the stack.
///
/// Buffers at or below this stay inline in their `SmallVec`; anything
/// bigger spills to the heap and is freed when the enclosing call returns.
pub(crate) const STACK_LIMBS: usize = 64;

/// Scratch storage for intermediate magnitudes.
pub(crate) type Scratch = SmallVec<[Limb; STACK_LIMBS]>;

/// Allocate zero-initialized scratch for `len` limbs.
///
/// Karatsuba's recomposition and the schoolbook kernels accumulate into
/// their destination, so scratch handed to them must start zeroed.
#[inline]
pub(crate) fn zeroed_scratch(len: usize) -> Scratch {
    smallvec::smallvec![0; len]
}

/// Strip leading (most-significant) zero limbs from a slice.
#[inline]
pub(crate) fn trim(mut limbs: &[Limb]) -> &[Limb] {
    while let Some((&0, rest)) = limbs.split_last() {
        limbs = rest;
    }
    limbs
}

/// Number of significant bits in a magnitude; 0 for an empty slice.
#[inline]
pub(crate) fn bit_length(limbs: &[Limb]) -> u64 {
    match limbs.last() {
        Some(&top) => {
            debug_assert!(top != 0);
            limbs.len() as u64 * LIMB_BITS as u64 - top.leading_zeros() as u64
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_test() {
        assert_eq!(trim(&[]), &[] as &[Limb]);
        assert_eq!(trim(&[0, 0, 0]), &[] as &[Limb]);
        assert_eq!(trim(&[1, 0, 0]), &[1]);
        assert_eq!(trim(&[0, 0, 7]), &[0, 0, 7]);
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(bit_length(&[]), 0);
        assert_eq!(bit_length(&[1]), 1);
        assert_eq!(bit_length(&[0x8000_0000]), 32);
        assert_eq!(bit_length(&[0, 0, 1]), 65);
        assert_eq!(bit_length(&[0, 0, 3]), 66);
    }
}
