//! 16-bit codeword layout for the Hamming(16,11) code.
//!
//! Bits are indexed `0..16` starting from the most significant end. Index 0
//! holds the overall parity bit, indices 1, 2, 4 and 8 hold the group parity
//! bits and the eleven remaining indices carry the data bits `m0..m10` in
//! ascending order:
//!
//! ```text
//! index:  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! role:   P  p1 p2 m0 p4 m1 m2 m3 p8 m4 m5 m6 m7 m8 m9 m10
//! ```
//!
//! Group parity `pk` covers every index with bit `k` set, so the XOR of the
//! indices of all set bits (the syndrome) of a valid codeword is zero.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt;

/// Number of bits in a codeword
pub const CODEWORD_BITS: usize = 16;

/// Number of data bits carried by a codeword
pub const DATA_BITS: usize = 11;

/// Largest value that fits in the data bits of one codeword
pub const MAX_DATA: u32 = (1 << DATA_BITS) - 1;

/// Index of the overall parity bit
pub const OVERALL_PARITY_POSITION: usize = 0;

/// Indices of the group parity bits
pub const GROUP_PARITY_POSITIONS: [usize; 4] = [1, 2, 4, 8];

/// Returns true for indices reserved for parity rather than data.
pub fn is_parity_position(index: usize) -> bool {
    index == OVERALL_PARITY_POSITION || GROUP_PARITY_POSITIONS.contains(&index)
}

/// Data-carrying indices in ascending order; the n-th one holds `m[n]`.
pub fn data_positions() -> impl Iterator<Item = usize> {
    (0..CODEWORD_BITS).filter(|&index| !is_parity_position(index))
}

fn syndrome_of(bits: &BitSlice<u16, Msb0>) -> usize {
    bits.iter_ones().fold(0, |acc, index| acc ^ index)
}

/// A single Hamming(16,11) codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword(u16);

impl Codeword {
    /// Builds the codeword for an 11-bit data value, filling in all five
    /// parity bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CodePointTooLarge`] if `data` needs more than 11 bits.
    pub fn from_data(data: u32) -> Result<Self> {
        if data > MAX_DATA {
            return Err(Error::CodePointTooLarge { code_point: data });
        }

        let data = data as u16;
        let data_bits = &data.view_bits::<Msb0>()[CODEWORD_BITS - DATA_BITS..];

        let mut word = 0u16;
        let slots = word.view_bits_mut::<Msb0>();
        for (index, bit) in data_positions().zip(data_bits.iter().by_vals()) {
            slots.set(index, bit);
        }

        // Each group parity takes the matching syndrome bit of the data-only
        // word, which brings the syndrome to zero.
        let syndrome = syndrome_of(slots);
        for &position in GROUP_PARITY_POSITIONS.iter() {
            slots.set(position, syndrome & position != 0);
        }

        let odd = slots.count_ones() % 2 == 1;
        slots.set(OVERALL_PARITY_POSITION, odd);

        Ok(Codeword(word))
    }

    /// Wraps a raw 16-bit value without checking its parity.
    pub const fn from_bits(bits: u16) -> Self {
        Codeword(bits)
    }

    /// Raw 16-bit value, index 0 in the most significant bit
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Bit view of the codeword, indexed 0..16
    pub fn as_bitslice(&self) -> &BitSlice<u16, Msb0> {
        self.0.view_bits::<Msb0>()
    }

    /// Value of the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn bit(&self, index: usize) -> bool {
        self.as_bitslice()[index]
    }

    /// Inverts the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn flip(&mut self, index: usize) {
        let bits = self.0.view_bits_mut::<Msb0>();
        let value = bits[index];
        bits.set(index, !value);
    }

    /// Copy of this codeword with the bit at `index` inverted
    pub fn flipped(mut self, index: usize) -> Self {
        self.flip(index);
        self
    }

    /// XOR of the indices of all set bits. Zero for the all-zero word.
    pub fn syndrome(&self) -> usize {
        syndrome_of(self.as_bitslice())
    }

    /// Sum of all 16 bits modulo 2
    pub fn overall_parity(&self) -> u8 {
        (self.0.count_ones() % 2) as u8
    }

    /// True when every parity equation holds
    pub fn is_valid(&self) -> bool {
        self.syndrome() == 0 && self.overall_parity() == 0
    }

    /// The 11 data bits `m0..m10` as an integer, `m0` most significant.
    pub fn data(&self) -> u16 {
        let bits = self.as_bitslice();
        data_positions().fold(0, |acc, index| (acc << 1) | u16::from(bits[index]))
    }
}

impl From<Codeword> for u16 {
    fn from(codeword: Codeword) -> Self {
        codeword.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.as_bitslice().iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
