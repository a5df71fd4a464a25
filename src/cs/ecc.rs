//! Error correction code implementations.
//!
//! This module provides a Hamming(16,11) channel codec: text is packed into
//! 16-bit codewords carrying 11 data bits, four group parities and one overall
//! parity bit, sent through a simulated noisy channel and decoded back with
//! single-bit error correction per codeword.
//!
//! # Examples
//!
//! ```rust
//! use hamming16::cs::ecc::hamming::{decode, encode};
//!
//! let stream = encode("hi").unwrap();
//! assert_eq!(stream.len(), 32);
//! assert_eq!(decode(&stream).unwrap(), "hi");
//! ```

pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Hamming(16,11) codec, noise injection and channel simulation
pub mod hamming;
pub use hamming::{
    decode, decode_with_report, encode, inject_noise, BitStream, Codeword, Hamming16,
    NoiseModel, NoisyChannel,
};
