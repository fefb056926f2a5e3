use bigint64::{BigInt, Error};

#[test]
fn carry_into_new_word() {
    let result = BigInt::from_u64(0xFFFFFFFFFFFFFFFF, false) + BigInt::from_u64(1, false);
    assert_eq!(result.words(), &[0, 1]);
    assert!(!result.is_negative());
}

#[test]
fn shift_no_ops() {
    let nine = BigInt::from_u64(9, false);
    assert_eq!(nine.checked_shl(0), Ok(nine.clone()));

    let zero = BigInt::from_u64(0, false);
    let shifted = zero.checked_shl(100).unwrap();
    assert_eq!(shifted.words(), &[0]);
    assert!(!shifted.is_negative());
}

#[test]
fn shift_of_negative_is_rejected() {
    let err = BigInt::from_u64(9, true).checked_shl(1).unwrap_err();
    assert_eq!(err, Error::NegativeShift);
    assert_eq!(err.to_string(), "cannot left-shift a negative value");
}

#[test]
fn division_by_zero_is_rejected() {
    let err = BigInt::from_u64(9, false)
        .checked_div(&BigInt::from_u64(0, false))
        .unwrap_err();
    assert_eq!(err, Error::DivisionByZero);
    assert_eq!(err.to_string(), "attempt to divide by zero");
}

#[test]
fn square_of_u64_max() {
    let max = BigInt::from_u64(18446744073709551615, false);
    let result = &max * &max;
    assert_eq!(result.words(), &[0x0000000000000001, 0xFFFFFFFFFFFFFFFE]);
    assert_eq!(result.to_hex(), "fffffffffffffffe0000000000000001");
}

#[test]
fn two_pow_64_in_decimal() {
    assert_eq!(BigInt::from_words(&[0, 1], false).to_dec(), "18446744073709551616");
}

#[test]
fn negative_zero_is_not_observable() {
    let zero = BigInt::from_words(&[0, 0], true);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.to_hex(), "0");
    assert_eq!(zero.to_dec(), "0");
    assert_eq!(zero.compare(&BigInt::new()), 0);
    assert!(!(-&zero).is_negative());
}

#[test]
fn word_view_is_read_only_copy_source() {
    let value = BigInt::from_words(&[5, 6, 0], true);
    let mut words = value.words().to_vec();
    words[0] = 99;
    assert_eq!(value.words(), &[5, 6]);
    assert_eq!(value.get_word(0), 5);
    assert_eq!(value.get_word(7), 0);
}

#[test]
fn factorial_round_trips_through_division() {
    let mut factorial = BigInt::from(1_u8);
    for i in 1..=30_u64 {
        factorial *= BigInt::from(i);
    }
    assert_eq!(factorial.to_dec(), "265252859812191058636308480000000");
    assert_eq!(factorial.to_hex(), "d13f6370f96865df5dd54000000");

    let mut value = factorial;
    for i in (1..=30_u64).rev() {
        value /= BigInt::from(i);
    }
    assert_eq!(value, BigInt::from(1_u8));
}
