//! Hamming(16,11) error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! This variant packs 11 data bits into a 16-bit codeword: four group parity bits at indices
//! 1, 2, 4 and 8, plus an overall parity bit at index 0. One codeword carries one character, so
//! text up to code point 2047 can be encoded.
//!
//! This implementation provides:
//! - Encoding of text into a stream of 16-bit codewords
//! - A simulated noisy channel with single flips and burst errors
//! - Syndrome decoding with single-bit error correction per codeword
//!
//! Any block hit by two or more errors is decoded into a wrong character without
//! detection, so bursts wider than one bit are bad news.
//!
//! # Examples
//!
//! ```rust
//! use hamming16::cs::ecc::hamming::{transmit, NoiseModel, NoisyChannel};
//!
//! let mut channel = NoisyChannel::with_seed(NoiseModel::single_flips(1), 7);
//! let transmission = transmit("feed my 2 cats", &mut channel).unwrap();
//! assert_eq!(transmission.text(), "feed my 2 cats");
//! ```

use crate::cs::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::debug;

/// 16-bit codeword layout, parity and syndrome
pub mod codeword;
/// Syndrome decoding back to text
pub mod decoder;
/// Text to codeword stream
pub mod encoder;
/// Channel noise injection
pub mod noise;
/// Bit streams and their `'0'`/`'1'` wire form
pub mod stream;

#[cfg(test)]
mod properties;

pub use codeword::{Codeword, CODEWORD_BITS, DATA_BITS};
pub use decoder::{
    decode, decode_codeword, decode_str, decode_with_report, BlockCorrection, Correction,
    DecodeReport, DecodedBlock,
};
pub use encoder::{encode, encode_char, encode_to_string};
pub use noise::{burst_range, inject_noise, NoiseModel, NoisyChannel};
pub use stream::BitStream;

/// Byte-oriented Hamming(16,11) codec.
///
/// Every input byte becomes one codeword, serialized as two big-endian bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming16;

impl ErrorCorrection for Hamming16 {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(data.len() * 2);
        for &byte in data {
            let codeword = Codeword::from_data(u32::from(byte))?;
            encoded.extend_from_slice(&codeword.bits().to_be_bytes());
        }
        Ok(encoded)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(Error::MalformedStream {
                length: data.len() * 8,
            });
        }

        let mut corrected = 0;
        let decoded = data
            .chunks_exact(2)
            .map(|pair| {
                let block = decode_codeword(Codeword::from_bits(u16::from_be_bytes([
                    pair[0], pair[1],
                ])));
                if block.correction != Correction::Clean {
                    corrected += 1;
                }
                block.character as u8
            })
            .collect();

        debug!("decoded {} bytes, {} corrected", data.len() / 2, corrected);
        Ok(decoded)
    }
}

/// One message sent through a noisy channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    /// Stream produced by the encoder
    pub sent: BitStream,
    /// Stream after the channel noise
    pub received: BitStream,
    /// Decoded text and the corrections applied
    pub report: DecodeReport,
}

impl Transmission {
    /// Recovered text
    pub fn text(&self) -> &str {
        &self.report.text
    }

    /// Number of bits the channel changed
    pub fn flipped_bits(&self) -> usize {
        self.sent.hamming_distance(&self.received)
    }
}

/// Encodes `text`, sends it through `channel` and decodes what arrives.
pub fn transmit(text: &str, channel: &mut NoisyChannel) -> Result<Transmission> {
    let sent = encode(text)?;
    let received = channel.transmit(&sent);
    let report = decode_with_report(&received)?;
    Ok(Transmission {
        sent,
        received,
        report,
    })
}
