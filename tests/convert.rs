//! Conversions to and from the primitive types.

use compactint::{BigInt, ErrorCode};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

#[test]
fn every_primitive_embeds() {
    assert_eq!(BigInt::from(-5i8).to_string(), "-5");
    assert_eq!(BigInt::from(1000i16).to_string(), "1000");
    assert_eq!(BigInt::from(u8::MAX).to_string(), "255");
    assert_eq!(BigInt::from(u16::MAX).to_string(), "65535");
    assert_eq!(BigInt::from(u32::MAX).to_string(), "4294967295");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(
        BigInt::from(u128::MAX).to_string(),
        "340282366920938463463374607431768211455",
    );
    assert_eq!(
        BigInt::from(i128::MIN).to_string(),
        "-170141183460469231731687303715884105728",
    );
    assert_eq!(BigInt::from(7usize), BigInt::from(7u8));
    assert_eq!(BigInt::from(-7isize), BigInt::from(-7i64));
}

#[test]
fn narrowing_round_trips_randomized() {
    let mut rng = XorShiftRng::from_seed([31u8; 16]);
    for _ in 0..500 {
        let v = rng.gen::<i128>() >> rng.gen_range(0..127);
        let big = BigInt::from(v);
        assert_eq!(i128::try_from(&big).unwrap(), v);

        if let Ok(narrow) = i64::try_from(v) {
            assert_eq!(i64::try_from(&big).unwrap(), narrow);
        } else {
            assert!(i64::try_from(&big).unwrap_err().is_overflow());
        }

        if let Ok(narrow) = u32::try_from(v) {
            assert_eq!(u32::try_from(&big).unwrap(), narrow);
        } else {
            assert!(u32::try_from(&big).unwrap_err().is_overflow());
        }
    }
}

#[test]
fn overflow_codes() {
    let too_big = BigInt::from(u128::MAX) + BigInt::ONE;
    let err = u128::try_from(&too_big).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::ValueOverflow);
    assert!(err.is_overflow());

    let err = i128::try_from(&(-&too_big)).unwrap_err();
    assert!(err.is_overflow());

    // i128::MIN itself fits; one less does not.
    let min = BigInt::from(i128::MIN);
    assert_eq!(i128::try_from(&min).unwrap(), i128::MIN);
    assert!(i128::try_from(&(&min - &BigInt::ONE)).unwrap_err().is_overflow());
}

#[test]
fn f64_imports() {
    assert_eq!(BigInt::try_from(123.999).unwrap(), BigInt::from(123));
    assert_eq!(BigInt::try_from(-0.5).unwrap(), BigInt::ZERO);
    assert_eq!(
        BigInt::try_from(1.5e300).unwrap().bit_length(),
        998, // floor(log2(1.5e300)) + 1
    );

    assert_eq!(
        *BigInt::try_from(f64::NAN).unwrap_err().code(),
        ErrorCode::NonFiniteFloat,
    );
    assert!(BigInt::try_from(f64::NEG_INFINITY).unwrap_err().is_overflow());
}

#[test]
fn f64_round_trips_exact_integers() {
    let mut rng = XorShiftRng::from_seed([32u8; 16]);
    for _ in 0..300 {
        // Any f64 with |value| >= 1 and an exact integer value survives.
        let mant = rng.gen_range(1u64..(1 << 53));
        let scale = rng.gen_range(0i32..900);
        let v = mant as f64 * 2f64.powi(scale);
        let big = BigInt::try_from(v).unwrap();
        assert_eq!(big.to_f64(), v, "mant = {}, scale = {}", mant, scale);
    }
}

#[test]
fn f64_export_matches_primitive_casts() {
    let mut rng = XorShiftRng::from_seed([33u8; 16]);
    for _ in 0..300 {
        let v = rng.gen::<i128>() >> rng.gen_range(0..127);
        assert_eq!(BigInt::from(v).to_f64(), v as f64, "{}", v);
    }
    for _ in 0..300 {
        let v = rng.gen::<u64>() >> rng.gen_range(0..63);
        assert_eq!(BigInt::from(v).to_f64(), v as f64, "{}", v);
    }
}

#[test]
fn f64_saturates_to_infinity() {
    let v = BigInt::from(2).pow(1100);
    assert_eq!(v.to_f64(), f64::INFINITY);
    assert_eq!((-&v).to_f64(), f64::NEG_INFINITY);

    // The largest finite double round trips.
    let max = BigInt::try_from(f64::MAX).unwrap();
    assert_eq!(max.to_f64(), f64::MAX);
    assert_eq!((&max + &BigInt::ONE).to_f64(), f64::MAX);
}

#[test]
fn log_matches_f64_for_small_values() {
    for v in [2u64, 10, 97, 1_000_000, u64::MAX] {
        let big = BigInt::from(v);
        let expect = (v as f64).ln();
        assert!((big.ln() - expect).abs() < 1e-9, "{}", v);
        assert!((big.log(10.0) - (v as f64).log10()).abs() < 1e-9, "{}", v);
    }

    let googol = BigInt::from(10).pow(100);
    assert!((googol.log(10.0) - 100.0).abs() < 1e-8);
}
