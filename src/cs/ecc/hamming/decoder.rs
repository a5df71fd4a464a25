//! Syndrome decoding of Hamming(16,11) codeword streams.
//!
//! Each 16-bit block is checked independently. The syndrome (XOR of the
//! indices of all set bits) names the bit in error, and the overall parity
//! tells whether any error is present at all:
//!
//! | syndrome | overall parity | action                         |
//! |----------|----------------|--------------------------------|
//! | 0        | 0              | block is clean                 |
//! | 0        | 1              | flip index 0 (overall parity)  |
//! | s ≠ 0    | any            | flip index `s`                 |
//!
//! # Limitations
//!
//! Only one error per block is guaranteed to be corrected. A block with two
//! or more errors is miscorrected into a wrong character and nothing reports
//! the failure: the algorithm cannot tell a valid single-error correction
//! from a miscorrection of a multi-bit error.
//!
//! Decoded characters keep only the low 8 bits of the 11 data bits, so any
//! code point above 255 accepted by the encoder comes back truncated.

use super::codeword::Codeword;
use super::stream::BitStream;
use crate::error::Result;
use log::info;

/// What the decoder did to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Every parity check passed
    Clean,
    /// The bit at this index was flipped
    Flipped(usize),
}

/// Result of decoding one codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedBlock {
    /// Codeword as received
    pub received: Codeword,
    /// Codeword after correction
    pub corrected: Codeword,
    /// Correction applied, if any
    pub correction: Correction,
    /// Recovered character, code point in 0..=255
    pub character: char,
}

/// A correction applied while decoding a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCorrection {
    /// Position of the block in the stream
    pub block: usize,
    /// Index of the flipped bit within the block
    pub position: usize,
}

/// Decoded text together with the corrections made on the way
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeReport {
    pub text: String,
    pub corrections: Vec<BlockCorrection>,
}

impl DecodeReport {
    /// Number of blocks that needed a correction
    pub fn corrected_blocks(&self) -> usize {
        self.corrections.len()
    }

    /// True if no block needed a correction
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// Applies single-error correction to one codeword.
pub fn correct(codeword: Codeword) -> (Codeword, Correction) {
    let syndrome = codeword.syndrome();
    if syndrome == 0 && codeword.overall_parity() == 0 {
        return (codeword, Correction::Clean);
    }

    // With only the overall parity off, the syndrome is 0 and points at the
    // overall parity bit itself.
    (codeword.flipped(syndrome), Correction::Flipped(syndrome))
}

/// Corrects one codeword and recovers its character.
pub fn decode_codeword(received: Codeword) -> DecodedBlock {
    let (corrected, correction) = correct(received);
    let character = char::from((corrected.data() & 0xFF) as u8);
    DecodedBlock {
        received,
        corrected,
        correction,
        character,
    }
}

/// Decodes a stream and reports every block that was corrected.
///
/// # Errors
///
/// Returns [`Error::MalformedStream`](crate::Error::MalformedStream) if the
/// stream length is not a multiple of 16.
pub fn decode_with_report(stream: &BitStream) -> Result<DecodeReport> {
    let mut report = DecodeReport {
        text: String::with_capacity(stream.codeword_count()),
        corrections: Vec::new(),
    };

    for (block, codeword) in stream.codewords()?.enumerate() {
        let decoded = decode_codeword(codeword);
        if let Correction::Flipped(position) = decoded.correction {
            info!(
                "error detected in block {}, correcting bit {}",
                block, position
            );
            report.corrections.push(BlockCorrection { block, position });
        }
        report.text.push(decoded.character);
    }

    Ok(report)
}

/// Decodes a stream of codewords back into text, one character per block.
pub fn decode(stream: &BitStream) -> Result<String> {
    decode_with_report(stream).map(|report| report.text)
}

/// Decodes the `'0'`/`'1'` wire form of a stream
pub fn decode_str(bits: &str) -> Result<String> {
    decode(&bits.parse::<BitStream>()?)
}
