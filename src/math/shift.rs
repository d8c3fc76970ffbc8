//! Bit-shifts on magnitudes.

use crate::lib::iter::repeat;
use crate::lib::Vec;
use crate::math::{Limb, LIMB_BITS};

/// Shift a magnitude left by `shift` bits.
///
/// The result has `x.len() + shift/32 + 1` limbs before trimming: whole
/// limbs of zeros below, then the limbs of `x` with the sub-limb carry
/// threaded across boundaries.
pub(crate) fn shl(x: &[Limb], shift: usize) -> Vec<Limb> {
    let digits = shift / LIMB_BITS;
    let shift = (shift % LIMB_BITS) as u32;

    let mut data = Vec::with_capacity(x.len() + digits + 1);
    data.extend(repeat(0).take(digits));
    data.extend_from_slice(x);

    if shift > 0 {
        let mut carry = 0;
        let carry_shift = LIMB_BITS as u32 - shift;
        for elem in data[digits..].iter_mut() {
            let new_carry = *elem >> carry_shift;
            *elem = (*elem << shift) | carry;
            carry = new_carry;
        }
        data.push(carry);
    }

    data
}

/// Shift a magnitude right by `shift` bits, discarding shifted-out bits.
///
/// Returns an empty (zero) magnitude when every bit is shifted out.
pub(crate) fn shr(x: &[Limb], shift: usize) -> Vec<Limb> {
    let digits = shift / LIMB_BITS;
    let shift = (shift % LIMB_BITS) as u32;

    if digits >= x.len() {
        return Vec::new();
    }
    let mut data = x[digits..].to_vec();

    if shift > 0 {
        let mut borrow = 0;
        let borrow_shift = LIMB_BITS as u32 - shift;
        for elem in data.iter_mut().rev() {
            let new_borrow = *elem << borrow_shift;
            *elem = (*elem >> shift) | borrow;
            borrow = new_borrow;
        }
    }

    data
}
