//! Big Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers stored as a sign flag plus a magnitude of 64-bit words.
//! - [`Error`]: The two ways an operation can be rejected, left-shifting a negative value and dividing by zero.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a = BigInt::from_words(&[0, 1], false);
        let b: BigInt = 900000000000_u64.into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {:#x}", &a << 10);
        assert_eq!(a.to_dec(), "18446744073709551616");
    }
}
