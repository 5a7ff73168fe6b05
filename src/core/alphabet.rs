//! The base91x alphabet and its reverse lookup table.
//!
//! The alphabet holds the 91 printable ASCII characters that need no escaping
//! inside C, C++ or JSON string literals: everything from `!` to `~` except
//! `"`, `'` and `\`. Position in [`ALPHABET`] is the digit value of a symbol.

/// Number of symbols, and the radix of the numeral system.
pub const BASE: usize = 91;

/// The ordered alphabet. `ALPHABET[d]` is the symbol for digit `d`.
pub const ALPHABET: &[u8; BASE] =
    b"!~}|{zyxwvutsrqponmlkjihgfedcba`_^]#[ZYXWVUTSRQPONMLKJIHGFEDCBA@?>=<;:9876543210/.-,+*)($&%";

/// Byte to digit table covering every possible byte value.
///
/// `None` marks bytes outside the alphabet, including everything above 0x7F.
static REVERSE: [Option<u8>; 256] = build_reverse();

const fn build_reverse() -> [Option<u8>; 256] {
    let mut table = [None; 256];
    let mut digit = 0;
    while digit < BASE {
        table[ALPHABET[digit] as usize] = Some(digit as u8);
        digit += 1;
    }
    table
}

/// Returns the digit value of `byte`, or `None` when it is not a symbol.
#[inline]
pub fn digit_of(byte: u8) -> Option<u8> {
    REVERSE[byte as usize]
}

/// Returns the symbol for `digit`.
///
/// # Panics
///
/// Panics if `digit >= 91`.
#[inline]
pub fn symbol_of(digit: usize) -> u8 {
    ALPHABET[digit]
}

/// Whether `byte` belongs to the alphabet.
#[inline]
pub fn is_symbol(byte: u8) -> bool {
    digit_of(byte).is_some()
}
