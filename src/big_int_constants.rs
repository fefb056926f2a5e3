pub const DIGITS: [char; 16] = [
    '0' , '1' , '2' , '3' ,
    '4' , '5' , '6' , '7' ,
    '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f'
];

pub const WORD_BITS: u32 = u64::BITS;

/// Every word below the most significant one is rendered with this many hex digits.
pub const HEX_DIGITS_PER_WORD: usize = (WORD_BITS / 4) as usize;

/// Values `0..=MAX_CONSTANT` of either sign are served from the cache.
pub const MAX_CONSTANT: usize = 16;
