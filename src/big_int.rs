//! # BigInt
//! Immutable arbitrary-precision integers in sign-magnitude form.
//! The magnitude is a little-endian sequence of 64-bit words, the sign is a separate flag.
//! Shifts and bit tests only ever look at the magnitude.
//! # Example
//! ```
//! use bigint64::BigInt;
//!
//! let a = BigInt::from_words(&[0, 1], false);
//! let b = BigInt::from(900000000000_u64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a << 10 = {:x}", a.checked_shl(10).unwrap());
//! ```
//!

use std::fmt::{Display, LowerHex};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::{Error, Result};

macro_rules! new_zero_vec_with_cap {
    ($cap: expr) => {
        vec![0u64; $cap as usize]
    };
}

/// Drops most significant zero words, keeping a single `0` for zero.
macro_rules! canonicalize {
    ($vec: ident) => {
        {
            while $vec.len() > 1 && $vec.last() == Some(&0) {
                $vec.pop();
            }
            if $vec.is_empty() {
                $vec.push(0);
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u64>,
}

// 实现构造
impl BigInt {
    /// Zero.
    pub fn new() -> Self {
        BigInt { negative: false, mag: vec![0] }
    }
    /// A single-word value. `from_u64(0, true)` is still non-negative zero.
    pub fn from_u64(val: u64, negative: bool) -> Self {
        BigInt::value_of(val, negative)
    }
    /// Builds a value from little-endian words, trimming the most significant zero words.
    pub fn from_words(words: &[u64], negative: bool) -> Self {
        BigInt::from_raw(words.to_vec(), negative)
    }
    pub(crate) fn from_raw(mut mag: Vec<u64>, negative: bool) -> Self {
        canonicalize!(mag);
        let negative = negative && !(mag.len() == 1 && mag[0] == 0);
        BigInt { negative, mag }
    }
    fn value_of(val: u64, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_raw(vec![val], negative)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 访问器
impl BigInt {
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }
    /// Returns word `index` of the magnitude, or 0 past the stored words.
    pub fn get_word(&self, index: usize) -> u64 {
        self.mag.get(index).copied().unwrap_or(0)
    }
    pub fn word_count(&self) -> usize {
        self.mag.len()
    }
    /// The canonical magnitude, least significant word first.
    pub fn words(&self) -> &[u64] {
        &self.mag
    }
    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }
    /// Number of significant bits in the magnitude, 0 for zero.
    pub fn bit_length(&self) -> u64 {
        let top = self.mag[self.mag.len() - 1];
        (self.mag.len() as u64 - 1) * WORD_BITS as u64 + (WORD_BITS - top.leading_zeros()) as u64
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u64], y: &[u64]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
    /// Three-way comparison: `-1`, `0` or `1`.
    pub fn compare(&self, other: &BigInt) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => BigInt::compare_mag(&self.mag, &other.mag),
            (true, true) => BigInt::compare_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

// 实现加法
impl BigInt {
    fn add_mag(x: &[u64], y: &[u64]) -> Vec<u64> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut sum: u128 = 0;
        for (index, &word) in long.iter().enumerate() {
            sum = word as u128 +
                  short.get(index).copied().unwrap_or(0) as u128 +
                  (sum >> u64::BITS);
            result.push(sum as u64);
        }

        if (sum >> u64::BITS) != 0 {
            result.push(1);
        }

        result
    }
    /// `big - little`, requires `big >= little` in magnitude.
    fn sub_mag(big: &[u64], little: &[u64]) -> Vec<u64> {
        let mut result = new_zero_vec_with_cap!(big.len());
        let mut difference: i128 = 0;
        for (index, &word) in big.iter().enumerate() {
            difference = word as i128 -
                         little.get(index).copied().unwrap_or(0) as i128 +
                         (difference >> u64::BITS);
            result[index] = difference as u64;
        }
        debug_assert!(difference >> u64::BITS == 0, "magnitude subtraction underflow");

        canonicalize!(result);
        result
    }
    fn add_signed(x: &BigInt, y_mag: &[u64], y_negative: bool) -> BigInt {
        if x.negative == y_negative {
            return BigInt::from_raw(BigInt::add_mag(&x.mag, y_mag), x.negative);
        }

        match BigInt::compare_mag(&x.mag, y_mag) {
            Ordering::Less => BigInt::from_raw(BigInt::sub_mag(y_mag, &x.mag), y_negative),
            Ordering::Equal => BigInt::new(),
            Ordering::Greater => BigInt::from_raw(BigInt::sub_mag(&x.mag, y_mag), x.negative),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::add_signed(self, &rhs.mag, rhs.negative)
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { negative, mag } = self;
        BigInt::from_raw(mag, !negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        // a - b == a + (-b), and -0 stays non-negative
        BigInt::add_signed(self, &rhs.mag, !rhs.negative && !rhs.is_zero())
    }
}

// 实现左移与位测试
impl BigInt {
    /// Tests bit `n` of the magnitude. Bits past the stored words read as 0.
    pub fn is_bit_set(&self, n: u64) -> bool {
        let Ok(index) = usize::try_from(n / WORD_BITS as u64) else {
            return false;
        };
        match self.mag.get(index) {
            Some(word) => (word >> (n % WORD_BITS as u64)) & 1 == 1,
            None => false,
        }
    }
    /// Left shift of the magnitude. Only defined for non-negative values.
    pub fn checked_shl(&self, n: u32) -> Result<BigInt> {
        if n == 0 || self.is_zero() {
            return Ok(self.clone());
        }
        if self.negative {
            tracing::debug!(shift = n, "rejected left shift of a negative value");
            return Err(Error::NegativeShift);
        }
        Ok(BigInt::from_raw(BigInt::shl_mag(&self.mag, n), self.negative))
    }
    fn shl_mag(mag: &[u64], n: u32) -> Vec<u64> {
        let n_words = (n / WORD_BITS) as usize;
        let n_bits = n % WORD_BITS;
        let mut new_mag = new_zero_vec_with_cap!(mag.len() + n_words + 1);
        for (index, &word) in mag.iter().enumerate() {
            if n_bits == 0 {
                new_mag[index + n_words] = word;
            } else {
                new_mag[index + n_words] |= word << n_bits;
                new_mag[index + n_words + 1] |= word >> (WORD_BITS - n_bits);
            }
        }
        new_mag
    }
    /// Halves the magnitude, keeping the stored sign.
    pub(crate) fn div_by_2(&self) -> BigInt {
        let mut mag = self.mag.clone();
        let mut carry = 0u64;
        for word in mag.iter_mut().rev() {
            let low_bit = *word & 1;
            *word = (*word >> 1) | (carry << (WORD_BITS - 1));
            carry = low_bit;
        }
        BigInt::from_raw(mag, self.negative)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `self` is negative, see [`BigInt::checked_shl`].
    fn shl(self, n: u32) -> Self::Output {
        match self.checked_shl(n) {
            Ok(result) => result,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> Self::Output {
        &self << n
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = &*self << n;
    }
}

// 实现乘法
impl BigInt {
    fn mul_mag(x: &[u64], y: &[u64]) -> Vec<u64> {
        let mut z: Vec<u64> = Vec::with_capacity(x.len() + y.len());
        z.push(0);
        for (i, &x_word) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                if z.len() <= i + j {
                    z.push(0);
                }
                let product: u128 = (x_word as u128) *
                                    (y.get(j).copied().unwrap_or(0) as u128) +
                                    (z[i + j] as u128) +
                                    (carry as u128);
                z[i + j] = product as u64;
                carry = (product >> u64::BITS) as u64;
                j += 1;
            }
        }
        z
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::new();
        }
        let negative = self.negative != rhs.negative;
        BigInt::from_raw(BigInt::mul_mag(&self.mag, &rhs.mag), negative)
    }
}

// 实现除法
impl BigInt {
    /// Quotient truncated toward zero.
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            tracing::debug!(dividend_words = self.word_count(), "rejected division by zero");
            return Err(Error::DivisionByZero);
        }
        Ok(BigInt::divide(self, divisor))
    }
    /// Remainder of the truncating division, carrying the dividend's sign.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        let quotient = self.checked_div(divisor)?;
        Ok(self - &(&quotient * divisor))
    }
    /// `divisor` must be non-zero.
    fn divide(dividend: &BigInt, divisor: &BigInt) -> BigInt {
        if dividend.is_zero() ||
           BigInt::compare_mag(&dividend.mag, &divisor.mag) == Ordering::Less {
            return BigInt::new();
        }
        let negative = dividend.negative != divisor.negative;
        let mag = if divisor.mag.len() == 1 {
            BigInt::divide_one_word(&dividend.mag, divisor.mag[0])
        } else {
            BigInt::divide_bisection(&dividend.abs(), &divisor.abs()).mag
        };
        BigInt::from_raw(mag, negative)
    }
    /// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
    fn divide_one_word(u: &[u64], v: u64) -> Vec<u64> {
        let mut r: u128 = 0;
        let mut w = new_zero_vec_with_cap!(u.len());

        for j in (0..u.len()).rev() {
            let sum: u128 = (r << u64::BITS) + u[j] as u128;
            w[j] = (sum / v as u128) as u64;
            r = sum % v as u128;
        }

        canonicalize!(w);
        w
    }
    /// Binary search for the largest `q` in `[0, dividend]` with `q * divisor <= dividend`.
    /// Both operands are non-negative.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(dividend_words = dividend.word_count(), divisor_words = divisor.word_count())
    )]
    fn divide_bisection(dividend: &BigInt, divisor: &BigInt) -> BigInt {
        let mut low = BigInt::new();
        let mut high = dividend.clone();
        let mut quotient = BigInt::new();
        let mut steps: u64 = 0;

        while low <= high {
            steps += 1;
            let mid = (&low + &high).div_by_2();
            let product = &mid * divisor;
            match product.cmp(dividend) {
                Ordering::Equal => {
                    quotient = mid;
                    break;
                }
                Ordering::Less => {
                    low = &mid + &*ONE;
                    quotient = mid;
                }
                Ordering::Greater => {
                    high = &mid - &*ONE;
                }
            }
        }

        tracing::trace!(steps, "bisection finished");
        quotient
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero, see [`BigInt::checked_div`].
    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

// 实现求余
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero, see [`BigInt::checked_rem`].
    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);*) => {
    $(
    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(&self, &rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $imp::$method(&self, rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(self, &rhs)
        }
    }

    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            *self = $imp::$method(&*self, &rhs);
        }
    }

    impl $imp_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = $imp::$method(&*self, rhs);
        }
    }
    )*
    };
}
forward_binop!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign
);

// 实现打印
impl BigInt {
    /// Lowercase hex, `-` prefixed when negative, no leading zeros.
    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }
    /// Decimal, `-` prefixed when negative.
    pub fn to_dec(&self) -> String {
        self.to_string()
    }
    fn hex_digits(&self) -> String {
        let mut s = String::with_capacity(self.mag.len() * HEX_DIGITS_PER_WORD);
        let mut leading = true;
        for &word in self.mag.iter().rev() {
            if leading {
                if word == 0 {
                    continue;
                }
                s.push_str(&format!("{:x}", word));
                leading = false;
            } else {
                s.push_str(&format!("{:0width$x}", word, width = HEX_DIGITS_PER_WORD));
            }
        }
        if leading {
            s.push('0');
        }
        s
    }
    /// Peels decimal digits off the magnitude by repeated division by ten.
    #[tracing::instrument(level = "trace", skip_all, fields(words = self.word_count()))]
    fn dec_digits(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut value = self.abs();
        let mut digits: Vec<char> = Vec::new();
        while !value.is_zero() {
            let quotient = BigInt::divide(&value, &TEN);
            let remainder = &value - &(&quotient * &*TEN);
            digits.push(DIGITS[remainder.get_word(0) as usize]);
            value = quotient;
        }
        digits.iter().rev().collect()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.negative, "", &self.dec_digits())
    }
}

impl LowerHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.hex_digits())
    }
}

#[cfg(test)]
fn check_contents(val: &BigInt, expected: &[u64]) {
    assert_eq!(val.words(), expected, "words of {:x}", val);
}

#[test]
fn test_construct() {
    let zero = BigInt::new();
    check_contents(&zero, &[0]);
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInt::default());

    let negative_nine = BigInt::from_u64(9, true);
    check_contents(&negative_nine, &[9]);
    assert!(negative_nine.is_negative());

    let u64_max = BigInt::from_u64(u64::MAX, false);
    check_contents(&u64_max, &[u64::MAX]);

    let two_pow_64 = BigInt::from_words(&[0, 1, 0, 0], true);
    check_contents(&two_pow_64, &[0, 1]);
    assert!(two_pow_64.is_negative());

    let all_zero = BigInt::from_words(&[0, 0, 0], true);
    check_contents(&all_zero, &[0]);
    assert!(all_zero.is_zero());
    assert!(!all_zero.is_negative());

    let empty = BigInt::from_words(&[], false);
    check_contents(&empty, &[0]);

    assert!(!BigInt::from_u64(0, true).is_negative());
}

#[test]
fn test_from() {
    let big: BigInt = (-100_i16).into();
    check_contents(&big, &[100]);
    assert!(big.is_negative());

    let big: BigInt = 12_u8.into();
    check_contents(&big, &[12]);
    assert!(!big.is_negative());

    let big: BigInt = i64::MIN.into();
    check_contents(&big, &[1 << 63]);
    assert!(big.is_negative());

    let big: BigInt = 0_i32.into();
    assert!(big.is_zero() && !big.is_negative());
}

#[test]
fn test_clone_is_deep() {
    let a = BigInt::from_words(&[0, 1], false);
    let mut b = a.clone();
    b += BigInt::from(1_u8);
    check_contents(&a, &[0, 1]);
    check_contents(&b, &[1, 1]);
}

#[test]
fn test_get_word() {
    let zero = BigInt::new();
    assert_eq!(zero.get_word(0), 0);
    assert_eq!(zero.get_word(1), 0);

    let two_pow_64 = BigInt::from_words(&[0, 1], false);
    assert_eq!(two_pow_64.get_word(0), 0);
    assert_eq!(two_pow_64.get_word(1), 1);
    assert_eq!(two_pow_64.get_word(100), 0);
    assert_eq!(two_pow_64.word_count(), 2);
}

#[test]
fn test_compare() {
    let zero = BigInt::new();
    let one = BigInt::from(1_u8);
    let three = BigInt::from(3_u8);
    let negative_three = BigInt::from(-3_i8);
    let negative_nine = BigInt::from(-9_i8);

    assert_eq!(zero.compare(&zero), 0);
    assert_eq!(zero.compare(&one), -1);
    assert_eq!(one.compare(&zero), 1);
    assert_eq!(negative_nine.compare(&three), -1);
    assert_eq!(three.compare(&negative_three), 1);
    assert_eq!(negative_nine.compare(&negative_three), -1);

    let left = BigInt::from_words(&[0xcedf54d4ce62e836, 0x80bcc908ac2470e5, 0x7f5530530656407, 0xd708e6b15caaffe6, 0xea4413128f8d85df, 0x8761bb0238eef891, 0x112046064d41670b, 0x52e17af98118272f, 0x2bcb5a93df6b9791, 0xe4], true);
    let right = BigInt::from_words(&[0xa4771be9296f10c9, 0x99652558ce608a70, 0x72a5a8d90da8a461, 0xae81eebacbc14061, 0xbe8ee1d7d75975c9, 0xef670eb972588d3a, 0x73c02c5138c02430, 0x6ed794ae35fd9f68, 0x4dd6b9ebe076ac72, 0x42b6daa3d05d11c7, 0x2cfe1d5965b49e99, 0x927bec], false);
    assert_eq!(left.compare(&right), -1);
    assert_eq!((-&right).compare(&-&left), -1);
    assert!(-&left > -&right);
}

#[test]
fn test_add() {
    let one = BigInt::from(1_u8);
    let result = BigInt::from_u64(u64::MAX, false) + &one;
    check_contents(&result, &[0, 1]);
    assert!(!result.is_negative());

    let left = BigInt::from_words(&[0xc26e6d5f53ab28a0, 0xfb12a615f71867, 0x1f12c444bbc13], false);
    let right = BigInt::from_words(&[0x68adaac8bc0c460a, 0x2b287106b393], false);
    check_contents(&(&left + &right), &[0x2b1c18280fb76eaa, 0xfb3dce86fdcbfb, 0x1f12c444bbc13]);

    let three = BigInt::from(3_u8);
    let negative_nine = BigInt::from(-9_i8);
    let result = &three + &negative_nine;
    check_contents(&result, &[6]);
    assert!(result.is_negative());

    let left = BigInt::from_words(&[0x9f33ca9e0290d102, 0xd331662e19562498, 0x2347e72885d6e83, 0x529bac52c46b047, 0x69b3f801ea78f778, 0xfdba8845fc024708, 0x2], false);
    let right = BigInt::from_words(&[0x3efacbd8f95c7bb, 0x974f58eddfc56dfe, 0xa844e13b7c33ebed, 0xb4dd001fbdf5f260, 0x755c8aee33f48fec, 0x60], true);
    let result = &left + &right;
    check_contents(&result, &[0x9b441de072fb0947, 0x3be20d403990b69a, 0x59ef9d370c298296, 0x504cbaa56e50bde6, 0xf4576d13b684678b, 0xfdba8845fc0246a7, 0x2]);
    assert!(!result.is_negative());

    let result = &three + &BigInt::from(-3_i8);
    assert!(result.is_zero() && !result.is_negative());
}

#[test]
fn test_sub() {
    let zero = BigInt::new();
    let one = BigInt::from(1_u8);

    let result = &zero - &zero;
    assert!(result.is_zero() && !result.is_negative());

    let result = &zero - &one;
    check_contents(&result, &[1]);
    assert!(result.is_negative());

    let result = BigInt::from(-3_i8) - &one;
    check_contents(&result, &[4]);
    assert!(result.is_negative());

    let result = &one - BigInt::from(-3_i8);
    check_contents(&result, &[4]);
    assert!(!result.is_negative());

    let left = BigInt::from_words(&[0x2731e5530045218a, 0x1c29aa], false);
    let right = BigInt::from_words(&[0xc2baed5ea8cf3dd0, 0x81fe5f9adde938d6, 0x56ec433719861074, 0x7f6d01dbc70c1274, 0xd02fd7f2403ee362, 0x24c5400e94347fb3, 0x764521caebba2c9, 0x51a61e0aa376ff6d, 0x103c5aa88eb6e90], true);
    let result = &left - &right;
    check_contents(&result, &[0xe9ecd2b1a9145f5a, 0x81fe5f9ade056280, 0x56ec433719861074, 0x7f6d01dbc70c1274, 0xd02fd7f2403ee362, 0x24c5400e94347fb3, 0x764521caebba2c9, 0x51a61e0aa376ff6d, 0x103c5aa88eb6e90]);
    assert!(!result.is_negative());

    // borrow that empties the top words
    let result = BigInt::from_words(&[0, 0, 1], false) - BigInt::from(1_u8);
    check_contents(&result, &[u64::MAX, u64::MAX]);
}

#[test]
fn test_neg() {
    let zero = BigInt::new();
    assert!(!(-&zero).is_negative());
    let nine = BigInt::from(9_u8);
    assert!((-&nine).is_negative());
    assert_eq!(-(-&nine), nine);
}

#[test]
fn test_is_bit_set() {
    let zero = BigInt::new();
    assert!(!zero.is_bit_set(0));
    assert!(!zero.is_bit_set(1000000));
    assert!(!zero.is_bit_set(u64::MAX));

    let two_pow_64 = BigInt::from_words(&[0, 1], true);
    assert!(!two_pow_64.is_bit_set(63));
    assert!(two_pow_64.is_bit_set(64));
    assert!(!two_pow_64.is_bit_set(65));

    let val = BigInt::from_words(&[0xad77cbed0273e33, 0xe151b7c18231a194, 0x7b2beb2888d66093, 0xeab20633a9a9595a], false);
    for bit in [0, 4, 9, 30, 42, 52, 89, 109, 177, 184, 241] {
        assert!(val.is_bit_set(bit), "bit {}", bit);
    }
    for bit in [15, 24, 58, 158, 202, 256] {
        assert!(!val.is_bit_set(bit), "bit {}", bit);
    }
}

#[test]
fn test_shl() {
    let one = BigInt::from(1_u8);
    check_contents(&(&one << 1), &[2]);
    check_contents(&(&one << 63), &[0x8000000000000000]);
    check_contents(&(&one << 64), &[0, 1]);
    check_contents(&(&one << 65), &[0, 2]);
    check_contents(&(BigInt::from(3_u8) << 63), &[0x8000000000000000, 1]);

    check_contents(&(BigInt::from(9_u8) << 0), &[9]);
    let result = BigInt::new() << 100;
    assert!(result.is_zero() && !result.is_negative());

    let val = BigInt::from_words(&[0xbcc523fa26450fc2, 0x5490bb4c35ae6c03, 0x310a4f3349801bbe], false);
    check_contents(&(val << 390), &[0, 0, 0, 0, 0, 0, 0x3148fe899143f080, 0x242ed30d6b9b00ef, 0x4293ccd26006ef95, 0xc]);

    assert_eq!(BigInt::from(-9_i8).checked_shl(1), Err(Error::NegativeShift));
    assert_eq!(BigInt::from(-9_i8).checked_shl(0), Ok(BigInt::from(-9_i8)));
}

#[test]
#[should_panic(expected = "cannot left-shift a negative value")]
fn test_shl_negative_panics() {
    let _ = BigInt::from(-9_i8) << 42;
}

#[test]
fn test_div_by_2() {
    check_contents(&BigInt::from_words(&[0, 1], false).div_by_2(), &[0x8000000000000000]);
    check_contents(&BigInt::from(9_u8).div_by_2(), &[4]);
    assert!(BigInt::from(1_u8).div_by_2().is_zero());
    assert!(BigInt::from(-1_i8).div_by_2().is_zero());
    assert!(!BigInt::from(-1_i8).div_by_2().is_negative());
}

#[test]
fn test_mul() {
    let three = BigInt::from(3_u8);
    check_contents(&(&three * &three), &[9]);

    let two_pow_64 = BigInt::from_words(&[0, 1], false);
    check_contents(&(&two_pow_64 * BigInt::from(2_u8)), &[0, 2]);

    let u64_max = BigInt::from_u64(u64::MAX, false);
    let result = &u64_max * &u64_max;
    check_contents(&result, &[0x0000000000000001, 0xFFFFFFFFFFFFFFFE]);
    assert_eq!(result.to_hex(), "fffffffffffffffe0000000000000001");

    let left = BigInt::from_words(&[0x63a2caa5324b539d, 0x176fde8a24c], false);
    let right = BigInt::from_words(&[0x7fd944a0481a66c6], false);
    check_contents(&(left * right), &[0x2bf1cf198f85396e, 0x92c5b43447ed673f, 0xbb463828ef]);

    let result = BigInt::from(-3_i8) * &three;
    check_contents(&result, &[9]);
    assert!(result.is_negative());
    let result = BigInt::from(-3_i8) * BigInt::new();
    assert!(result.is_zero() && !result.is_negative());
}

#[test]
fn test_div() {
    let nine = BigInt::from(9_u8);
    let three = BigInt::from(3_u8);
    let two = BigInt::from(2_u8);

    check_contents(&(&nine / &three), &[3]);
    check_contents(&(&nine / &two), &[4]);
    let result = BigInt::from(-9_i8) / &two;
    check_contents(&result, &[4]);
    assert!(result.is_negative());
    let result = &two / BigInt::from(-9_i8);
    assert!(result.is_zero() && !result.is_negative());

    assert_eq!(nine.checked_div(&BigInt::new()), Err(Error::DivisionByZero));
    assert_eq!(BigInt::new().checked_div(&BigInt::new()), Err(Error::DivisionByZero));

    let left = BigInt::from_words(&[0x5a1f7b06e95d205b, 0x16bef383084c9bf5, 0x6bfd5cb9a0cfa403, 0xbb47e519c0ffc392, 0xc8c47a8ab9cc20af, 0x30302fb07ef81d25, 0x8b8bcb6df3f72911, 0x3de679169dc89703, 0x48f52b428f255e1d, 0xd623c2e8a460f5be, 0xae2df81a84808054, 0xcfb038910d158d63, 0xcf97bc9], false);
    let right = BigInt::from_words(&[0xe1d191b09fd571e7, 0xd6e34973337d88fd, 0x7235628c33211b03, 0xe0bbc74b5d7fe26a, 0xf6242ed96eb2c8d9, 0x3b0cad8e5dd18f5, 0x558c283a839910c0, 0xbb4df9de72952652, 0xed8b519e3c63ce56, 0xe96f9c8454bde1c4, 0x76b62db592951f97, 0x577341], false);
    let result = &left / &right;
    check_contents(&result, &[0xfb3e6b02be39b6ce, 0x25]);
    assert!(!result.is_negative());

    // exact multi-word quotient
    let divisor = BigInt::from_words(&[7, 1], true);
    let quotient = BigInt::from_words(&[0x1234, 0x5678], false);
    let result = (&divisor * &quotient) / &divisor;
    assert_eq!(result, quotient);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_by_zero_panics() {
    let _ = BigInt::from(9_u8) / BigInt::new();
}

#[test]
fn test_rem() {
    let result = BigInt::from(-9_i8) % BigInt::from(2_u8);
    check_contents(&result, &[1]);
    assert!(result.is_negative());
    assert!((BigInt::from(9_u8) % BigInt::from(3_u8)).is_zero());
    assert_eq!(BigInt::from(9_u8).checked_rem(&BigInt::new()), Err(Error::DivisionByZero));
}

#[test]
fn test_to_hex() {
    assert_eq!(BigInt::new().to_hex(), "0");
    assert_eq!(BigInt::from(-9_i8).to_hex(), "-9");
    assert_eq!(BigInt::from_u64(u64::MAX, false).to_hex(), "ffffffffffffffff");
    assert_eq!(BigInt::from_words(&[0, 1], false).to_hex(), "10000000000000000");
    assert_eq!(BigInt::from_words(&[0xf, 0, 0xa1], false).to_hex(), "a10000000000000000000000000000000f");

    let val = BigInt::from_words(&[0xd8b5422df2c7e5d4, 0x2186595636ed41d7, 0xcf498dc4c634eb41, 0xa6579a3f9d2aab0c, 0xb5cbefaf0e63a6e3, 0xf419b0aadf4d14f1, 0xcec650d523acc64e, 0x14318cf757a58], true);
    assert_eq!(val.to_hex(), "-14318cf757a58cec650d523acc64ef419b0aadf4d14f1b5cbefaf0e63a6e3a6579a3f9d2aab0ccf498dc4c634eb412186595636ed41d7d8b5422df2c7e5d4");

    assert_eq!(format!("{:#x}", BigInt::from(255_u8)), "0xff");
    assert_eq!(format!("{:#x}", BigInt::from(-255_i16)), "-0xff");
}

#[test]
fn test_to_dec() {
    assert_eq!(BigInt::new().to_dec(), "0");
    assert_eq!(BigInt::from(-9_i8).to_dec(), "-9");
    assert_eq!(BigInt::from_u64(u64::MAX, false).to_dec(), "18446744073709551615");
    assert_eq!(BigInt::from_words(&[0, 1], false).to_dec(), "18446744073709551616");

    let val = BigInt::from_words(&[0x361adeb15b6962c7, 0x31a5b3c012d2a685, 0x7b3b4839], false);
    assert_eq!(val.to_dec(), "703527900324720116021349050368162523567079645895");
    assert_eq!(format!("{:>6}", BigInt::from(-42_i8)), "   -42");
}

#[test]
fn test_bit_length() {
    assert_eq!(BigInt::new().bit_length(), 0);
    assert_eq!(BigInt::from(1_u8).bit_length(), 1);
    assert_eq!(BigInt::from_words(&[0, 1], true).bit_length(), 65);
}
