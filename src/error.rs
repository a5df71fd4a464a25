//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding, transmitting or decoding a codeword stream.
///
/// A block carrying two or more bit errors is not an error here: the
/// Hamming(16,11) decoder cannot tell such a block from a correctable one and
/// silently miscorrects it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character's code point needs more than the 11 data bits of a codeword
    #[error("code point U+{code_point:04X} does not fit in 11 data bits")]
    CodePointTooLarge { code_point: u32 },

    /// Stream length is not a whole number of 16-bit codewords
    #[error("stream of {length} bits is not a multiple of 16")]
    MalformedStream { length: usize },

    /// A textual stream contained something other than '0' or '1'
    #[error("invalid symbol {symbol:?} at position {position}, expected '0' or '1'")]
    InvalidSymbol { position: usize, symbol: char },
}
