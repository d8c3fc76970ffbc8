#![no_main]

use compactint::BigInt;
use libfuzzer_sys::fuzz_target;

// Byte import is total; exports must reimport to the same value in every
// sign-consistent mode.
fuzz_target!(|data: &[u8]| {
    let signed = BigInt::from_signed_bytes_le(data);
    assert_eq!(
        BigInt::from_signed_bytes_le(&signed.to_signed_bytes_le()),
        signed,
    );
    assert_eq!(
        BigInt::from_signed_bytes_be(&signed.to_signed_bytes_be()),
        signed,
    );

    let unsigned = BigInt::from_unsigned_bytes_le(data);
    assert!(!unsigned.is_negative());
    assert_eq!(
        BigInt::from_unsigned_bytes_le(&unsigned.to_unsigned_bytes_le().unwrap()),
        unsigned,
    );
    assert_eq!(
        BigInt::from_unsigned_bytes_be(&unsigned.to_unsigned_bytes_be().unwrap()),
        unsigned,
    );

    // Signed and unsigned agree on non-negative values.
    if !signed.is_negative() {
        assert_eq!(
            BigInt::from_unsigned_bytes_le(&signed.to_unsigned_bytes_le().unwrap()),
            signed,
        );
    }

    // The decimal surface agrees with itself.
    let s = signed.to_string();
    assert_eq!(s.parse::<BigInt>().unwrap(), signed);
});
