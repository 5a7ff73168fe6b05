//! Convenient re-exports for common usage.
//!
//! ```
//! use base91x::prelude::*;
//!
//! let text = encode(b"\x00\xff");
//! assert_eq!(text.len(), compute_encoded_size(2));
//! assert_eq!(decode(text), [0x00, 0xff]);
//! ```

pub use crate::{
    ALPHABET,
    // Core encoding/decoding
    assume_decoded_size,
    compute_encoded_size,
    decode,
    decode_into,
    encode,
    encode_into,
    encode_wrapped,
};
