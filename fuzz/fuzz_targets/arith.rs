#![no_main]

use compactint::BigInt;
use libfuzzer_sys::fuzz_target;

// Split the input into two operands and check the ring identities that
// tie the fast paths (inline, single-limb, Karatsuba) together.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let negate = data[0] & 0x80 != 0;

    let mut a = BigInt::from_unsigned_bytes_le(&data[1..split]);
    let b = BigInt::from_unsigned_bytes_le(&data[split..]);
    if negate {
        a = -a;
    }

    // Addition/subtraction inverses.
    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(&(&a - &b) + &b, a);

    // Squaring agrees with general multiplication.
    let a2 = a.clone();
    assert_eq!(&a * &a, &a * &a2);

    // Division identity and remainder bounds.
    if !b.is_zero() {
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a);
        assert!(r.abs() < b.abs());

        let g = a.gcd(&b);
        if !g.is_zero() {
            assert!((&a % &g).is_zero());
            assert!((&b % &g).is_zero());
        }
    }

    // Shift round trip and bitwise involution.
    let k = u32::from(data[0]) % 192;
    assert_eq!(&(&a << k) >> k, a);
    assert_eq!(!!&a, a);
});
