use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![ 0], false),
        BigInt::from_raw(vec![ 1], false),
        BigInt::from_raw(vec![ 2], false),
        BigInt::from_raw(vec![ 3], false),
        BigInt::from_raw(vec![ 4], false),
        BigInt::from_raw(vec![ 5], false),
        BigInt::from_raw(vec![ 6], false),
        BigInt::from_raw(vec![ 7], false),
        BigInt::from_raw(vec![ 8], false),
        BigInt::from_raw(vec![ 9], false),
        BigInt::from_raw(vec![10], false),
        BigInt::from_raw(vec![11], false),
        BigInt::from_raw(vec![12], false),
        BigInt::from_raw(vec![13], false),
        BigInt::from_raw(vec![14], false),
        BigInt::from_raw(vec![15], false),
        BigInt::from_raw(vec![16], false),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![ 0], false),
        BigInt::from_raw(vec![ 1], true),
        BigInt::from_raw(vec![ 2], true),
        BigInt::from_raw(vec![ 3], true),
        BigInt::from_raw(vec![ 4], true),
        BigInt::from_raw(vec![ 5], true),
        BigInt::from_raw(vec![ 6], true),
        BigInt::from_raw(vec![ 7], true),
        BigInt::from_raw(vec![ 8], true),
        BigInt::from_raw(vec![ 9], true),
        BigInt::from_raw(vec![10], true),
        BigInt::from_raw(vec![11], true),
        BigInt::from_raw(vec![12], true),
        BigInt::from_raw(vec![13], true),
        BigInt::from_raw(vec![14], true),
        BigInt::from_raw(vec![15], true),
        BigInt::from_raw(vec![16], true),
    ];
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
    pub static ref TEN: BigInt = POS_CACHE[10].clone();
}
