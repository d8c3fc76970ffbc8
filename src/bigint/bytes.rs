//! Byte import and export.
//!
//! The signed formats are two's complement with the minimal number of
//! bytes: the most significant byte carries the sign bit, with one pad
//! byte (`0x00` or `0xFF`) added only when the top data byte would be
//! read with the wrong sign. The unsigned formats hold the bare
//! magnitude. Zero is a single `0x00` byte in every mode.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::Vec;
use crate::math::{scalar, Limb};

impl BigInt {
    /// Interpret `bytes` as a little-endian two's-complement integer.
    ///
    /// The empty slice is zero.
    pub fn from_signed_bytes_le(bytes: &[u8]) -> BigInt {
        let negative = bytes.last().map_or(false, |&top| top & 0x80 != 0);
        let mut limbs = pack_le_limbs(bytes, if negative { 0xFF } else { 0x00 });
        if negative {
            scalar::twos_complement_in_place(&mut limbs);
        }
        BigInt::from_sign_magnitude(negative, limbs)
    }

    /// Interpret `bytes` as a big-endian two's-complement integer.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> BigInt {
        let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
        BigInt::from_signed_bytes_le(&reversed)
    }

    /// Interpret `bytes` as a little-endian unsigned magnitude.
    pub fn from_unsigned_bytes_le(bytes: &[u8]) -> BigInt {
        BigInt::from_sign_magnitude(false, pack_le_limbs(bytes, 0x00))
    }

    /// Interpret `bytes` as a big-endian unsigned magnitude.
    pub fn from_unsigned_bytes_be(bytes: &[u8]) -> BigInt {
        let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
        BigInt::from_unsigned_bytes_le(&reversed)
    }

    /// Minimal little-endian two's-complement bytes of the value.
    pub fn to_signed_bytes_le(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }

        let mut bytes = magnitude_le_bytes(&self.magnitude());
        if self.is_negative() {
            twos_complement_bytes(&mut bytes);
            if *bytes.last().unwrap() & 0x80 == 0 {
                bytes.push(0xFF);
            }
        } else if *bytes.last().unwrap() & 0x80 != 0 {
            bytes.push(0x00);
        }
        bytes
    }

    /// Minimal big-endian two's-complement bytes of the value.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.to_signed_bytes_le();
        bytes.reverse();
        bytes
    }

    /// Minimal little-endian magnitude bytes of a non-negative value.
    ///
    /// Errors with [`ErrorCode::NegativeUnsigned`] when the value is
    /// negative: its magnitude bytes alone would reimport as a different
    /// (positive) number.
    pub fn to_unsigned_bytes_le(&self) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(Error::new(ErrorCode::NegativeUnsigned));
        }
        if self.is_zero() {
            return Ok(alloc::vec![0]);
        }
        Ok(magnitude_le_bytes(&self.magnitude()))
    }

    /// Minimal big-endian magnitude bytes of a non-negative value.
    pub fn to_unsigned_bytes_be(&self) -> Result<Vec<u8>> {
        let mut bytes = self.to_unsigned_bytes_le()?;
        bytes.reverse();
        Ok(bytes)
    }
}

/// Pack little-endian bytes into limbs, filling the final partial limb
/// with `fill` (the sign-extension byte).
fn pack_le_limbs(bytes: &[u8], fill: u8) -> Vec<Limb> {
    let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
    for chunk in bytes.chunks(4) {
        let mut quad = [fill; 4];
        quad[..chunk.len()].copy_from_slice(chunk);
        limbs.push(Limb::from_le_bytes(quad));
    }
    limbs
}

/// Little-endian bytes of a non-empty magnitude, without leading (most
/// significant) zero bytes.
fn magnitude_le_bytes(mag: &[Limb]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(mag.len() * 4);
    for &limb in mag.iter() {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    while bytes.len() > 1 && *bytes.last().unwrap() == 0 {
        bytes.pop();
    }
    bytes
}

fn twos_complement_bytes(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut() {
        if carry {
            (*byte, carry) = (!*byte).overflowing_add(1);
        } else {
            *byte = !*byte;
        }
    }
}
