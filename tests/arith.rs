//! Arithmetic scenarios and algebraic properties, including randomized
//! comparisons across the engine's code paths.

use compactint::BigInt;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

/// Random value of roughly `bits` bits with a random sign, built through
/// the byte importer.
fn gen_bigint(rng: &mut XorShiftRng, bits: u64) -> BigInt {
    let n_bytes = ((bits + 7) / 8) as usize;
    let mut bytes = vec![0u8; n_bytes];
    rng.fill(&mut bytes[..]);
    if bits % 8 != 0 {
        if let Some(top) = bytes.last_mut() {
            *top &= (1u8 << (bits % 8)) - 1;
        }
    }
    let value = BigInt::from_unsigned_bytes_le(&bytes);
    if rng.gen::<bool>() {
        -value
    } else {
        value
    }
}

#[test]
fn scenario_big_product() {
    let a = big("12345678901234567890");
    let b = big("98765432109876543210");
    assert_eq!(&a * &b, big("1219326311370217952237463801111263526900"));
    assert_eq!(&b * &a, big("1219326311370217952237463801111263526900"));
}

#[test]
fn scenario_modpow() {
    let base = BigInt::from(2);
    let exp = BigInt::from(1000);
    let modulus = big("1000000000000000009");
    assert_eq!(
        base.modpow(&exp, &modulus).unwrap(),
        big("688423210610391775"),
    );
}

#[test]
fn scenario_mersenne_gcd() {
    let a = (BigInt::ONE << 256u32) - BigInt::ONE;
    let b = (BigInt::ONE << 128u32) - BigInt::ONE;
    assert_eq!(a.gcd(&b), b);
}

#[test]
fn scenario_square_doubling_overflow() {
    // (2^64 + 1)^2 = 2^128 + 2^65 + 1
    let v = (BigInt::ONE << 64u32) + BigInt::ONE;
    let expect = (BigInt::ONE << 128u32) + (BigInt::ONE << 65u32) + BigInt::ONE;
    assert_eq!(&v * &v, expect);
    assert_eq!(v.pow(2), expect);
}

#[test]
fn scenario_power_of_two_division() {
    let a = (BigInt::ONE << 300u32) - BigInt::ONE;
    let b = (BigInt::ONE << 150u32) - BigInt::ONE;
    let (quot, rem) = a.div_rem(&b).unwrap();
    assert_eq!(quot, (BigInt::ONE << 150u32) + BigInt::ONE);
    assert!(rem.is_zero());
}

#[test]
fn scenario_min_int_negation() {
    let min = BigInt::from(i32::MIN);
    assert_eq!(-(-min.clone()), min);
    assert_eq!(min.abs(), big("2147483648"));
    assert_eq!(i32::try_from(&min).unwrap(), i32::MIN);
}

#[test]
fn addition_group_properties() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);
    for bits in [0u64, 1, 13, 31, 32, 33, 64, 200, 1000, 5000] {
        let a = gen_bigint(&mut rng, bits);
        let b = gen_bigint(&mut rng, bits.max(5));
        let c = gen_bigint(&mut rng, 77);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!(&a + BigInt::ZERO, a);
        assert_eq!(&a - &b, &a + &(-&b));
        assert_eq!(&a - &a, BigInt::ZERO);
    }
}

#[test]
fn multiplication_ring_properties() {
    let mut rng = XorShiftRng::from_seed([2u8; 16]);
    for bits in [1u64, 16, 33, 64, 500, 1500, 4000, 12000] {
        let a = gen_bigint(&mut rng, bits);
        let b = gen_bigint(&mut rng, 3 * bits / 2 + 1);
        let c = gen_bigint(&mut rng, 64);

        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!(&a * BigInt::ZERO, BigInt::ZERO);
        assert_eq!(&a * BigInt::ONE, a);
        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }
}

#[test]
fn squaring_agrees_with_multiplication() {
    let mut rng = XorShiftRng::from_seed([3u8; 16]);
    for bits in [1u64, 32, 64, 100, 1024, 2048, 6000, 20000] {
        let a = gen_bigint(&mut rng, bits);
        let copy = a.clone();
        // `&a * &a` takes the squaring kernel; `&a * &copy` the general one.
        assert_eq!(&a * &a, &a * &copy, "square mismatch at {} bits", bits);
        assert_eq!(a.pow(2), &a * &copy);
    }
}

#[test]
fn division_identity_randomized() {
    let mut rng = XorShiftRng::from_seed([4u8; 16]);
    for i in 0..200 {
        // Mostly small operands, with a tail of multi-thousand-bit ones.
        let ceiling = if i % 16 == 0 { 20000 } else { 2000 };
        let a_bits = rng.gen_range(0..ceiling);
        let b_bits = rng.gen_range(1..ceiling);
        let a = gen_bigint(&mut rng, a_bits);
        let b = gen_bigint(&mut rng, b_bits);
        if b.is_zero() {
            continue;
        }

        let (quot, rem) = a.div_rem(&b).unwrap();
        assert_eq!(&quot * &b + &rem, a, "identity failed");
        assert!(rem.abs() < b.abs(), "remainder too large");
        assert!(rem.is_zero() || rem.signum() == a.signum(), "remainder sign");
    }
}

#[test]
fn division_by_small_and_equal() {
    let a = big("170141183460469231731687303715884105727"); // 2^127 - 1
    assert_eq!(&a / &a, BigInt::ONE);
    assert_eq!(&a % &a, BigInt::ZERO);
    assert_eq!(&a / &big("170141183460469231731687303715884105728"), BigInt::ZERO);

    let seven = BigInt::from(7);
    let (quot, rem) = a.div_rem(&seven).unwrap();
    assert_eq!(&quot * &seven + &rem, a);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn operator_divide_by_zero_panics() {
    let _ = BigInt::ONE / BigInt::ZERO;
}

#[test]
fn gcd_divides_both() {
    let mut rng = XorShiftRng::from_seed([5u8; 16]);
    for _ in 0..40 {
        let a_bits = rng.gen_range(1..600);
        let a = gen_bigint(&mut rng, a_bits);
        let b_bits = rng.gen_range(1..600);
        let b = gen_bigint(&mut rng, b_bits);
        let g = a.gcd(&b);

        if g.is_zero() {
            assert!(a.is_zero() && b.is_zero());
            continue;
        }
        assert!(!g.is_negative());
        assert!((&a % &g).is_zero(), "gcd does not divide a");
        assert!((&b % &g).is_zero(), "gcd does not divide b");
    }

    let a = gen_bigint(&mut rng, 300);
    assert_eq!(a.gcd(&BigInt::ZERO), a.abs());
}

#[test]
fn modpow_agrees_with_repeated_multiplication() {
    let mut rng = XorShiftRng::from_seed([6u8; 16]);
    for _ in 0..20 {
        let v_bits = rng.gen_range(1..200);
        let v = gen_bigint(&mut rng, v_bits);
        let m_bits = rng.gen_range(1..100);
        let m = gen_bigint(&mut rng, m_bits);
        if m.is_zero() {
            continue;
        }
        let e = rng.gen_range(0u32..12);

        let expect = &v.pow(e) % &m;
        let got = v.modpow(&BigInt::from(e), &m).unwrap();
        assert_eq!(got, expect, "v = {}, e = {}, m = {}", v, e, m);
    }
}

#[test]
fn pow_bound_scenarios() {
    assert_eq!(BigInt::from(2).pow(1000), BigInt::ONE << 1000u32);
    assert_eq!(
        BigInt::from(999_999_999).pow(3),
        big("999999997000000002999999999"),
    );
    assert_eq!(BigInt::ONE.pow(u32::MAX), BigInt::ONE);
}

#[test]
fn small_large_boundary_arithmetic() {
    // Results crossing the inline/heap boundary in both directions.
    let max = BigInt::from(i32::MAX);
    assert_eq!(&max + &BigInt::ONE, big("2147483648"));
    assert_eq!(&(&max + &BigInt::ONE) - &BigInt::ONE, max);

    let min = BigInt::from(i32::MIN);
    assert_eq!(&min - &BigInt::ONE, big("-2147483649"));
    assert_eq!(&(&min - &BigInt::ONE) + &BigInt::ONE, min);
}
