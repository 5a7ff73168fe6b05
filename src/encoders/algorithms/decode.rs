use super::{BYTE_BITS, TAIL_BITS, WORD_BITS, assume_decoded_size};
use crate::core::alphabet::{BASE, digit_of};

/// Decodes base91x text back into bytes.
///
/// Bytes outside the alphabet (whitespace, control characters, anything
/// above 0x7F) are skipped, so formatted or wrapped text decodes cleanly.
/// Decoding never fails: truncated or corrupted input yields a best-effort,
/// possibly shorter, result.
///
/// ```
/// assert_eq!(base91x::decode("lpOv^1!"), b"hello");
/// assert_eq!(base91x::decode("lp Ov\n^1 !"), b"hello");
/// ```
pub fn decode<T: AsRef<[u8]>>(text: T) -> Vec<u8> {
    let mut result = Vec::new();
    decode_into(text, &mut result);
    result
}

/// Decodes `text` and appends the bytes to `out`.
pub fn decode_into<T: AsRef<[u8]>>(text: T, out: &mut Vec<u8>) {
    let text = text.as_ref();
    out.reserve(assume_decoded_size(text.len()));

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0u32;
    // Low digit waiting for its partner.
    let mut pending: Option<u32> = None;

    for digit in text.iter().filter_map(|&byte| digit_of(byte)) {
        let digit = u32::from(digit);
        let Some(low) = pending.take() else {
            pending = Some(digit);
            continue;
        };

        // Pairs above 8191 never come from the encoder. They are kept
        // unmasked, which garbles the following bits but not the length.
        let word = digit * BASE as u32 + low;
        bit_buffer |= word << bits_in_buffer;
        bits_in_buffer += WORD_BITS;

        while bits_in_buffer >= BYTE_BITS {
            out.push((bit_buffer & 0xFF) as u8);
            bit_buffer >>= BYTE_BITS;
            bits_in_buffer -= BYTE_BITS;
        }
    }

    if let Some(low) = pending {
        bit_buffer |= low << bits_in_buffer;
        bits_in_buffer += TAIL_BITS;
    }

    if bits_in_buffer >= BYTE_BITS {
        out.push((bit_buffer & 0xFF) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_and_noise_only() {
        assert!(decode("").is_empty());
        assert!(decode(" \t\r\n\"'\\").is_empty());
        assert!(decode([0x80u8, 0xC3, 0xFF, 0x00]).is_empty());
    }

    #[test]
    fn test_decode_lone_digit_yields_nothing() {
        assert!(decode("!").is_empty());
        assert!(decode("~").is_empty());
        assert!(decode("%").is_empty());
    }

    #[test]
    fn test_decode_single_bytes() {
        assert_eq!(decode("!!"), [0x00]);
        assert_eq!(decode(">!"), b"A");
        assert_eq!(decode("6}"), [0xFF]);
        assert_eq!(decode("~%x"), [0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_out_of_range_word() {
        // "%%" is 90 * 91 + 90 = 8280, above any 13-bit word
        assert_eq!(decode("%%%"), [88, 96]);
    }

    #[test]
    fn test_decode_accepts_bytes_and_strings() {
        let text = String::from("lpOv^1!");
        assert_eq!(decode(&text), b"hello");
        assert_eq!(decode(text.as_bytes()), b"hello");
        assert_eq!(decode(text.into_bytes()), b"hello");
    }

    #[test]
    fn test_decode_into_appends() {
        let mut out = b"prefix:".to_vec();
        decode_into("lpOv^1!", &mut out);
        assert_eq!(out, b"prefix:hello");
    }
}
