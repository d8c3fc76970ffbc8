//! Exponentiation on magnitudes: plain powers with a precomputed size
//! bound, and modular powers by square-and-multiply with reduction after
//! every step.

use crate::lib::Vec;
use crate::math::div::rem;
use crate::math::mul::{mul, mul_into, sqr, sqr_into};
use crate::math::{
    bit_length, trim, zeroed_scratch, Limb, Scratch, KARATSUBA_MUL_THRESHOLD,
    KARATSUBA_SQR_THRESHOLD, LIMB_BITS,
};

/// Raise a magnitude to a non-negative power.
///
/// All three working buffers are sized once from the bound
/// `exp * bit_length(value) / 32 + 2` limbs, which every intermediate
/// square and product fits; the square-and-multiply loop then runs without
/// further allocation, alternating each product between a buffer and the
/// shared temporary.
pub(crate) fn pow(value: &[Limb], exp: u32) -> Vec<Limb> {
    if exp == 0 || value == [1] {
        return alloc::vec![1];
    }
    if value.is_empty() {
        return Vec::new();
    }

    let bound = (u64::from(exp) * bit_length(value) / LIMB_BITS as u64 + 2) as usize;

    let mut result: Scratch = zeroed_scratch(bound);
    result[0] = 1;
    let mut result_len = 1;

    let mut base: Scratch = zeroed_scratch(bound);
    base[..value.len()].copy_from_slice(value);
    let mut base_len = value.len();

    let mut temp: Scratch = zeroed_scratch(bound);

    let mut e = exp;
    while e != 0 {
        if e & 1 != 0 {
            let n = result_len + base_len;
            temp[..n].fill(0);
            mul_into(
                &mut temp[..n],
                &result[..result_len],
                &base[..base_len],
                KARATSUBA_MUL_THRESHOLD,
            );
            result_len = trim(&temp[..n]).len();
            core::mem::swap(&mut result, &mut temp);
        }
        e >>= 1;
        if e != 0 {
            let n = 2 * base_len;
            temp[..n].fill(0);
            sqr_into(&mut temp[..n], &base[..base_len], KARATSUBA_SQR_THRESHOLD);
            base_len = trim(&temp[..n]).len();
            core::mem::swap(&mut base, &mut temp);
        }
    }

    result[..result_len].to_vec()
}

/// `value^exponent mod modulus` on magnitudes; `modulus` must be non-zero.
///
/// Right-to-left square-and-multiply, reducing modulo `modulus` after each
/// multiply so the working values never grow past twice the modulus size.
pub(crate) fn modpow(value: &[Limb], exponent: &[Limb], modulus: &[Limb]) -> Vec<Limb> {
    debug_assert!(!modulus.is_empty());

    if modulus == [1] {
        return Vec::new();
    }
    if exponent.is_empty() {
        return alloc::vec![1];
    }

    let mut base = trim(&rem(value, modulus)).to_vec();
    if base.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<Limb> = alloc::vec![1];
    let total_bits = bit_length(exponent);
    for bit in 0..total_bits {
        let limb = exponent[(bit / LIMB_BITS as u64) as usize];
        if (limb >> (bit % LIMB_BITS as u64)) & 1 != 0 {
            result = trim(&rem(trim(&mul(&result, &base)), modulus)).to_vec();
            if result.is_empty() {
                // A zero factor joined the product; it stays zero.
                return Vec::new();
            }
        }
        if bit + 1 < total_bits {
            base = trim(&rem(trim(&sqr(&base)), modulus)).to_vec();
            if base.is_empty() {
                // base ≡ 0 (mod m), and the exponent's top bit is still
                // ahead, so a zero factor is guaranteed to join.
                return Vec::new();
            }
        }
    }

    result
}
