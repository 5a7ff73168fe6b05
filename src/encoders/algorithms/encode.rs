use super::{BYTE_BITS, TAIL_BITS, WORD_BITS, WORD_MASK, compute_encoded_size};
use crate::core::alphabet::{BASE, symbol_of};

/// Encodes `data` into base91x text.
///
/// The output length is always [`compute_encoded_size`]`(data.len())` and
/// every character comes from [`ALPHABET`](crate::ALPHABET).
///
/// ```
/// assert_eq!(base91x::encode(b""), "");
/// assert_eq!(base91x::encode(b"hello"), "lpOv^1!");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut result = String::new();
    encode_into(data, &mut result);
    result
}

/// Encodes `data` and appends the symbols to `out`.
pub fn encode_into(data: &[u8], out: &mut String) {
    out.reserve(compute_encoded_size(data.len()));

    // At most 12 pending bits before a byte is added, so 20 after.
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;

    for &byte in data {
        bit_buffer |= u32::from(byte) << bits_in_buffer;
        bits_in_buffer += BYTE_BITS;

        while bits_in_buffer >= WORD_BITS {
            push_word(out, bit_buffer & WORD_MASK, true);
            bit_buffer >>= WORD_BITS;
            bits_in_buffer -= WORD_BITS;
        }
    }

    if bits_in_buffer > 0 {
        push_word(out, bit_buffer & WORD_MASK, bits_in_buffer >= TAIL_BITS);
    }
}

/// Encodes `data` and breaks the text into lines of at most `width` symbols.
///
/// Lines are joined with `\n` and there is no trailing newline. A `width` of
/// zero disables wrapping. Newlines are skipped by [`decode`](crate::decode),
/// so wrapped text decodes to the same bytes.
pub fn encode_wrapped(data: &[u8], width: usize) -> String {
    let encoded = encode(data);
    if width == 0 || encoded.len() <= width {
        return encoded;
    }

    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / width);
    for (index, line) in encoded.as_bytes().chunks(width).enumerate() {
        if index > 0 {
            wrapped.push('\n');
        }
        wrapped.extend(line.iter().map(|&symbol| char::from(symbol)));
    }
    wrapped
}

#[inline]
fn push_word(out: &mut String, word: u32, with_high: bool) {
    let word = word as usize;
    out.push(char::from(symbol_of(word % BASE)));
    if with_high {
        out.push(char::from(symbol_of(word / BASE)));
    }
}
