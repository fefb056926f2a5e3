use bigint64::{BigInt, Error};
use num_bigint::{BigUint, Sign};
use num_traits::Zero;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Mirrors a value into `num_bigint` so results can be checked against an independent implementation.
fn to_oracle(x: &BigInt) -> num_bigint::BigInt {
    let bytes: Vec<u8> = x.words().iter().flat_map(|w| w.to_le_bytes()).collect();
    let sign = if x.is_zero() {
        Sign::NoSign
    } else if x.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    };
    num_bigint::BigInt::from_bytes_le(sign, &bytes)
}

fn assert_canonical(x: &BigInt) {
    let words = x.words();
    assert!(!words.is_empty());
    assert!(words.len() == 1 || words[words.len() - 1] != 0, "trailing zero word in {:?}", x);
    if x.is_zero() {
        assert!(!x.is_negative(), "negative zero");
    }
}

fn word() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), Just(1u64), Just(u64::MAX), any::<u64>()]
}

fn big_int(max_words: usize) -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(word(), 0..=max_words), any::<bool>())
        .prop_map(|(words, negative)| BigInt::from_words(&words, negative))
}

fn non_zero(max_words: usize) -> impl Strategy<Value = BigInt> {
    big_int(max_words).prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

proptest! {
    #[test]
    fn prop_add_sub_match_oracle(a in big_int(5), b in big_int(5)) {
        let sum = &a + &b;
        let difference = &a - &b;
        assert_canonical(&sum);
        assert_canonical(&difference);
        prop_assert_eq!(to_oracle(&sum), to_oracle(&a) + to_oracle(&b));
        prop_assert_eq!(to_oracle(&difference), to_oracle(&a) - to_oracle(&b));
    }

    #[test]
    fn prop_additive_identity_and_inverse(x in big_int(5)) {
        prop_assert_eq!(&x + &BigInt::new(), x.clone());
        let z = &x + &(-&x);
        assert_canonical(&z);
        prop_assert!(z.is_zero());
    }

    #[test]
    fn prop_add_mul_commute_and_associate(a in big_int(3), b in big_int(3), c in big_int(3)) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
    }

    #[test]
    fn prop_mul_matches_oracle(a in big_int(4), b in big_int(4)) {
        let product = &a * &b;
        assert_canonical(&product);
        prop_assert_eq!(to_oracle(&product), to_oracle(&a) * to_oracle(&b));
    }

    #[test]
    fn prop_div_rem_match_oracle(a in big_int(4), b in non_zero(3)) {
        let quotient = a.checked_div(&b).unwrap();
        let remainder = a.checked_rem(&b).unwrap();
        assert_canonical(&quotient);
        assert_canonical(&remainder);
        prop_assert_eq!(to_oracle(&quotient), to_oracle(&a) / to_oracle(&b));
        prop_assert_eq!(to_oracle(&remainder), to_oracle(&a) % to_oracle(&b));

        prop_assert!((&quotient * &b).abs() <= a.abs());
        if !quotient.is_zero() {
            prop_assert_eq!(quotient.is_negative(), a.is_negative() != b.is_negative());
        }
    }

    #[test]
    fn prop_div_by_zero_rejected(a in big_int(4)) {
        prop_assert_eq!(a.checked_div(&BigInt::new()), Err(Error::DivisionByZero));
        prop_assert_eq!(a.checked_rem(&BigInt::new()), Err(Error::DivisionByZero));
    }

    #[test]
    fn prop_shl_matches_oracle(x in big_int(4), n in 0u32..400) {
        match x.checked_shl(n) {
            Ok(shifted) => {
                assert_canonical(&shifted);
                prop_assert_eq!(to_oracle(&shifted), to_oracle(&x) << n);
            }
            Err(e) => {
                prop_assert_eq!(e, Error::NegativeShift);
                prop_assert!(x.is_negative() && n != 0);
            }
        }
    }

    #[test]
    fn prop_bit_set_reads_magnitude(x in big_int(4), n in 0u64..400) {
        let oracle = to_oracle(&x);
        let magnitude: &BigUint = oracle.magnitude();
        let bit = !((magnitude >> n) % 2u32).is_zero();
        prop_assert_eq!(x.is_bit_set(n), bit);
    }

    #[test]
    fn prop_compare_matches_oracle(a in big_int(4), b in big_int(4)) {
        let expected = match to_oracle(&a).cmp(&to_oracle(&b)) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        prop_assert_eq!(a.compare(&b), expected);
        prop_assert_eq!(b.compare(&a), -expected);
    }

    #[test]
    fn prop_formatting_matches_oracle(x in big_int(4)) {
        let oracle = to_oracle(&x);
        prop_assert_eq!(x.to_dec(), oracle.to_string());
        prop_assert_eq!(x.to_hex(), format!("{:x}", oracle));
    }
}

#[test]
fn test_random_division_identity() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let a_words: Vec<u64> = (0..rng.random_range(1..=6)).map(|_| rng.random()).collect();
        let b_words: Vec<u64> = (0..rng.random_range(1..=3)).map(|_| rng.random()).collect();
        let a = BigInt::from_words(&a_words, rng.random_bool(0.5));
        let b = BigInt::from_words(&b_words, rng.random_bool(0.5));
        if b.is_zero() {
            continue;
        }

        let q = &a / &b;
        let r = &a % &b;
        assert_eq!(&q * &b + &r, a, "a = {:x}, b = {:x}", a, b);
        assert!(r.abs() < b.abs());
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
}
