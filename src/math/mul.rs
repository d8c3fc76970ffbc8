//! Multiplication and squaring on magnitudes.
//!
//! Three kernels cover different input sizes: a single-limb scalar loop,
//! the schoolbook method for short operands, and a Karatsuba recursion
//! above [`KARATSUBA_MUL_THRESHOLD`]. All of the multi-limb kernels
//! accumulate into a zero-initialized destination sized for the full
//! product, which lets the recursion write its partial products straight
//! into the output and keeps scratch proportional to the shorter operand.

use crate::lib::Vec;
use crate::math::large::{add_at, add_into};
use crate::math::scalar::{mac_with_carry, mul_with_carry};
use crate::math::{
    trim, zeroed_scratch, Limb, SignedWide, Wide, KARATSUBA_MUL_THRESHOLD,
    KARATSUBA_SQR_THRESHOLD,
};

// ENTRY POINTS

/// Multiply a magnitude by a single limb.
///
/// The result has `x.len() + 1` limbs before trimming.
pub(crate) fn mul_limb(x: &[Limb], y: Limb) -> Vec<Limb> {
    let mut prod = Vec::with_capacity(x.len() + 1);
    let mut carry = 0;
    for &xi in x {
        prod.push(mul_with_carry(xi, y, &mut carry));
    }
    prod.push(carry as Limb);
    prod
}

/// Multiply two non-empty magnitudes.
///
/// The result has `x.len() + y.len()` limbs before trimming.
pub(crate) fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    debug_assert!(!x.is_empty() && !y.is_empty());

    let mut prod = alloc::vec![0; x.len() + y.len()];
    mul_into(&mut prod, x, y, KARATSUBA_MUL_THRESHOLD);
    prod
}

/// Square a non-empty magnitude.
///
/// The result has `2 * x.len()` limbs before trimming. Squaring runs the
/// same recursion as [`mul`] but halves the work in the base case by
/// doubling the mirrored partial products.
pub(crate) fn sqr(x: &[Limb]) -> Vec<Limb> {
    debug_assert!(!x.is_empty());

    let mut prod = alloc::vec![0; 2 * x.len()];
    sqr_into(&mut prod, x, KARATSUBA_SQR_THRESHOLD);
    prod
}

// DISPATCH

/// Multiply `x * y` into the zero-initialized `bits`, which must hold
/// exactly `x.len() + y.len()` limbs.
///
/// `threshold` is the limb count at which the recursion bottoms out to the
/// schoolbook kernel; production callers pass [`KARATSUBA_MUL_THRESHOLD`],
/// tests pass small values to drive the recursive paths on small inputs.
pub(crate) fn mul_into(bits: &mut [Limb], x: &[Limb], y: &[Limb], threshold: usize) {
    debug_assert!(bits.len() == x.len() + y.len());
    debug_assert!(threshold >= 2);

    let (short, long) = if x.len() <= y.len() { (x, y) } else { (y, x) };

    if short.len() < threshold {
        schoolbook_mul(bits, long, short);
    } else if long.len() > 2 * short.len() {
        chunked_mul(bits, long, short, threshold);
    } else {
        karatsuba_mul(bits, long, short, threshold);
    }
}

/// Square `x` into the zero-initialized `bits`, which must hold exactly
/// `2 * x.len()` limbs.
pub(crate) fn sqr_into(bits: &mut [Limb], x: &[Limb], threshold: usize) {
    debug_assert!(bits.len() == 2 * x.len());
    debug_assert!(threshold >= 2);

    if x.len() < threshold {
        schoolbook_sqr(bits, x);
    } else {
        karatsuba_sqr(bits, x, threshold);
    }
}

// SCHOOLBOOK

/// Grade-school multiplication, `bits += long * short`.
///
/// The inner accumulator cannot overflow: each step computes
/// `bits[i+j] + long[j] * short[i] + carry`, and
/// `(2^32-1) + (2^32-1)^2 + (2^32-1) = 2^64 - 1`.
fn schoolbook_mul(bits: &mut [Limb], long: &[Limb], short: &[Limb]) {
    for (i, &s) in short.iter().enumerate() {
        let mut carry = 0;
        for (j, &l) in long.iter().enumerate() {
            bits[i + j] = mac_with_carry(bits[i + j], l, s, &mut carry);
        }
        bits[i + long.len()] = carry as Limb;
    }
}

/// Grade-school squaring, exploiting `x[j] * x[i] == x[i] * x[j]`.
///
/// Mirrored partial products are computed once and doubled. The doubled
/// term `bits[i+j] + 2 * x[j] * x[i] + carry` does not fit 64 bits, so the
/// doubling is split: the low store uses a wrapping `digit2 << 1`, and the
/// carry recovers the dropped high bit by shifting the undoubled product
/// right by 31 instead of 32.
fn schoolbook_sqr(bits: &mut [Limb], x: &[Limb]) {
    for i in 0..x.len() {
        let mut carry: Wide = 0;
        let v = x[i];
        for j in 0..i {
            let digit1 = Wide::from(bits[i + j]) + carry;
            let digit2 = Wide::from(x[j]) * Wide::from(v);
            bits[i + j] = digit1.wrapping_add(digit2 << 1) as Limb;
            carry = (digit2 + (digit1 >> 1)) >> 31;
        }
        let digits = Wide::from(v) * Wide::from(v) + carry;
        bits[2 * i] = digits as Limb;
        bits[2 * i + 1] = (digits >> 32) as Limb;
    }
}

// KARATSUBA

/// Karatsuba multiplication for roughly balanced operands
/// (`long.len() <= 2 * short.len()`).
///
/// With both operands split at `n = short.len() / 2` into `(lo, hi)`:
///
/// ```text
/// long * short = z0 + (z1 - z0 - z2) * 2^(32n) + z2 * 2^(64n)
///     z0 = lo_l * lo_s
///     z1 = (lo_l + hi_l) * (lo_s + hi_s)
///     z2 = hi_l * hi_s
/// ```
///
/// `z0` and `z2` land directly in the low and high halves of the
/// destination; only the folds and `z1` need scratch.
fn karatsuba_mul(bits: &mut [Limb], long: &[Limb], short: &[Limb], threshold: usize) {
    let n = short.len() / 2;

    let (long_lo, long_hi) = long.split_at(n);
    let (short_lo, short_hi) = short.split_at(n);
    let (bits_lo, bits_hi) = bits.split_at_mut(2 * n);

    mul_into(bits_hi, long_hi, short_hi, threshold);
    mul_into(bits_lo, long_lo, short_lo, threshold);

    let mut long_fold = zeroed_scratch(long_hi.len() + 1);
    let mut short_fold = zeroed_scratch(short_hi.len() + 1);
    add_into(&mut long_fold, long_hi, long_lo);
    add_into(&mut short_fold, short_hi, short_lo);

    let mut core = zeroed_scratch(long_fold.len() + short_fold.len());
    mul_into(&mut core, &long_fold, &short_fold, threshold);

    subtract_core(&mut core, bits_hi, bits_lo);
    add_at(&mut bits[n..], trim(&core));
}

/// Karatsuba squaring: the multiplication recursion with both operands
/// equal, so the folds collapse to one and `z1` is itself a square.
fn karatsuba_sqr(bits: &mut [Limb], x: &[Limb], threshold: usize) {
    let n = x.len() / 2;

    let (x_lo, x_hi) = x.split_at(n);
    let (bits_lo, bits_hi) = bits.split_at_mut(2 * n);

    sqr_into(bits_hi, x_hi, threshold);
    sqr_into(bits_lo, x_lo, threshold);

    let mut fold = zeroed_scratch(x_hi.len() + 1);
    add_into(&mut fold, x_hi, x_lo);

    let mut core = zeroed_scratch(2 * fold.len());
    sqr_into(&mut core, &fold, threshold);

    subtract_core(&mut core, bits_hi, bits_lo);
    add_at(&mut bits[n..], trim(&core));
}

/// `core -= hi + lo` in a single fused pass with a combined borrow.
///
/// `core` holds `z1 = (lo_l + hi_l) * (lo_s + hi_s) >= z0 + z2`, so the
/// borrow dies before the end of the buffer.
fn subtract_core(core: &mut [Limb], hi: &[Limb], lo: &[Limb]) {
    debug_assert!(core.len() >= hi.len() && core.len() >= lo.len());

    let mut borrow: SignedWide = 0;
    for (i, digit) in core.iter_mut().enumerate() {
        borrow += SignedWide::from(*digit);
        if i < lo.len() {
            borrow -= SignedWide::from(lo[i]);
        }
        if i < hi.len() {
            borrow -= SignedWide::from(hi[i]);
        }
        *digit = borrow as Limb;
        borrow >>= 32;
    }

    debug_assert!(borrow == 0);
}

/// Multiplication where one operand is more than twice as long: walk the
/// long operand in `short.len()`-sized chunks, multiplying each chunk by
/// the whole short operand and adding the partial product at its offset.
fn chunked_mul(bits: &mut [Limb], long: &[Limb], short: &[Limb], threshold: usize) {
    let mut rest = long;
    let mut start = 0;
    while !rest.is_empty() {
        let m = short.len().min(rest.len());
        let (chunk, tail) = rest.split_at(m);

        let mut prod = zeroed_scratch(chunk.len() + short.len());
        mul_into(&mut prod, short, chunk, threshold);
        add_at(&mut bits[start..], trim(&prod));

        rest = tail;
        start += m;
    }
}
