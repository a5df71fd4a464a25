//! Property-based tests for the Hamming(16,11) codec.
//!
//! 1. **Roundtrip**: decode(encode(text)) = text for code points 0..=255
//! 2. **Single-error correction**: any one flipped bit per block is undone
//! 3. **Parity**: every encoded codeword passes all five parity checks
//! 4. **Length preservation**: noise never changes the stream length
//! 5. **Burst containment**: one event touches at most 2r+1 adjacent bits

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::codeword::{Codeword, CODEWORD_BITS, MAX_DATA};
use super::decoder::decode;
use super::encoder::encode;
use super::noise::{burst_range, inject_noise};
use super::stream::BitStream;

/// Text over code points 0..=255
fn latin1_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..200)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Random bit streams
fn stream_strategy() -> impl Strategy<Value = BitStream> {
    prop::collection::vec(any::<bool>(), 0..500).prop_map(|bits| bits.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_roundtrip_without_noise(text in latin1_text_strategy()) {
        let stream = encode(&text).unwrap();
        prop_assert_eq!(stream.len(), 16 * text.chars().count());
        prop_assert_eq!(decode(&stream).unwrap(), text);
    }

    #[test]
    fn prop_one_error_per_block_is_corrected(
        text in latin1_text_strategy(),
        offsets in prop::collection::vec(0usize..CODEWORD_BITS, 200),
    ) {
        let mut stream = encode(&text).unwrap();
        for (block, offset) in offsets.iter().take(stream.codeword_count()).enumerate() {
            stream.flip(block * CODEWORD_BITS + offset);
        }
        prop_assert_eq!(decode(&stream).unwrap(), text);
    }

    #[test]
    fn prop_encoded_codewords_are_valid(data in 0u32..=MAX_DATA) {
        let codeword = Codeword::from_data(data).unwrap();
        prop_assert_eq!(codeword.syndrome(), 0);
        prop_assert_eq!(codeword.overall_parity(), 0);
        prop_assert_eq!(u32::from(codeword.data()), data);
    }

    #[test]
    fn prop_noise_preserves_length(
        bits in stream_strategy(),
        events in 0usize..20,
        radius in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let noisy = inject_noise(&bits, events, radius, &mut rng);
        prop_assert_eq!(noisy.len(), bits.len());
    }

    #[test]
    fn prop_single_burst_is_contained(
        len in 1usize..300,
        radius in 0usize..10,
        seed in any::<u64>(),
    ) {
        let bits: BitStream = std::iter::repeat(false).take(len).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let noisy = inject_noise(&bits, 1, radius, &mut rng);

        let flipped: Vec<usize> = (0..len).filter(|&i| noisy.get(i) == Some(true)).collect();
        prop_assert!(!flipped.is_empty());
        prop_assert!(flipped.len() <= 2 * radius + 1);

        // Some centre inside the burst must reproduce exactly this span
        let first = flipped[0];
        let last = flipped[flipped.len() - 1];
        let explained = (first..=last).any(|centre| burst_range(centre, radius, len) == (first..last + 1));
        prop_assert!(explained);
    }
}
