//! Bit packing between bytes and pairs of base91x digits.
//!
//! Input bits are gathered little-end first into 13-bit words. Each word is
//! written as two digits, low digit first: `word = hi * 91 + lo`. Since
//! `8191 / 91 == 90` both digits always fit the alphabet.

mod decode;
mod encode;

/// Bits in one byte.
pub const BYTE_BITS: u32 = 8;

/// Bits carried by one pair of digits.
pub const WORD_BITS: u32 = 13;

/// Mask selecting one 13-bit word.
pub const WORD_MASK: u32 = 0x1FFF;

/// Leftover bits at which the encoder still emits the high digit of the last
/// word. A lone trailing digit is credited with `TAIL_BITS` bits when
/// decoding; both sides must agree or round trips break for some lengths.
pub const TAIL_BITS: u32 = 7;

/// Exact number of symbols [`encode()`] produces for `size` input bytes.
///
/// ```
/// assert_eq!(base91x::compute_encoded_size(0), 0);
/// assert_eq!(base91x::compute_encoded_size(1), 2);
/// assert_eq!(base91x::compute_encoded_size(13), 16);
/// ```
#[inline]
pub const fn compute_encoded_size(size: usize) -> usize {
    (size << 4).div_ceil(WORD_BITS as usize)
}

/// Upper estimate of the bytes [`decode()`] produces from `size` symbols.
///
/// The real result is shorter when the text carries skipped characters.
#[inline]
pub const fn assume_decoded_size(size: usize) -> usize {
    (size * WORD_BITS as usize) >> 4
}

pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into, encode_wrapped};
