//! Bit streams carried over the simulated channel.
//!
//! On the wire a stream is a run of `'0'`/`'1'` symbols with no separators
//! between codewords; in memory it is a packed `BitVec`.

use super::codeword::{Codeword, CODEWORD_BITS};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of bits, normally a concatenation of codewords.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitStream {
    bits: BitVec<u8, Msb0>,
}

impl BitStream {
    /// Creates an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits in the stream
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the stream holds no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        let value = self.bits[index];
        self.bits.set(index, !value);
    }

    /// Appends the 16 bits of a codeword
    pub fn push_codeword(&mut self, codeword: Codeword) {
        self.bits.extend_from_bitslice(codeword.as_bitslice());
    }

    /// Number of whole codewords in the stream
    pub fn codeword_count(&self) -> usize {
        self.bits.len() / CODEWORD_BITS
    }

    /// Splits the stream into consecutive 16-bit codewords.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedStream`] if the length is not a multiple of
    /// 16; a trailing partial codeword is never silently dropped.
    pub fn codewords(&self) -> Result<impl Iterator<Item = Codeword> + '_> {
        if self.bits.len() % CODEWORD_BITS != 0 {
            return Err(Error::MalformedStream {
                length: self.bits.len(),
            });
        }

        Ok(self.bits.chunks_exact(CODEWORD_BITS).map(|chunk| {
            let raw = chunk
                .iter()
                .by_vals()
                .fold(0u16, |acc, bit| (acc << 1) | u16::from(bit));
            Codeword::from_bits(raw)
        }))
    }

    /// Number of positions at which two streams differ. Bits past the end of
    /// the shorter stream count as differences.
    pub fn hamming_distance(&self, other: &BitStream) -> usize {
        let shared = self.len().min(other.len());
        let differing = self.bits[..shared]
            .iter()
            .by_vals()
            .zip(other.bits[..shared].iter().by_vals())
            .filter(|(a, b)| a != b)
            .count();
        differing + self.len().max(other.len()) - shared
    }
}

impl FromIterator<Codeword> for BitStream {
    fn from_iter<I: IntoIterator<Item = Codeword>>(iter: I) -> Self {
        let mut stream = BitStream::new();
        for codeword in iter {
            stream.push_codeword(codeword);
        }
        stream
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitStream {
            bits: iter.into_iter().collect(),
        }
    }
}

impl FromStr for BitStream {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidSymbol { position, symbol }),
            })
            .collect()
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
