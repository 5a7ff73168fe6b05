//! base91x: binary-to-text encoding with a quote-free 91 symbol alphabet.
//!
//! Bytes are packed into 13-bit words and each word becomes two printable
//! ASCII symbols, for an expansion of about 1.231x (base64 is 1.333x). The
//! alphabet leaves out `"`, `'` and `\`, so encoded text drops straight into
//! C strings and JSON string literals without escaping.
//!
//! ```
//! let text = base91x::encode(b"hello");
//! assert_eq!(text, "lpOv^1!");
//! assert_eq!(base91x::decode(&text), b"hello");
//! ```
//!
//! Decoding skips every byte that is not an alphabet symbol, so whitespace
//! and line breaks may be inserted freely.

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{ALPHABET, BASE, digit_of, is_symbol, symbol_of};
pub use crate::core::config::{Settings, SettingsLayer};
pub use crate::encoders::algorithms::{
    WORD_BITS, WORD_MASK, assume_decoded_size, compute_encoded_size, decode, decode_into,
    encode, encode_into, encode_wrapped,
};

#[cfg(test)]
mod tests;
