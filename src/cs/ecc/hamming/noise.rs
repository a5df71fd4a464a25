//! Noise model for the simulated channel.
//!
//! A noise event picks an index uniformly at random and flips it together
//! with up to `burst_radius` neighbours on each side. Neighbours that fall
//! outside the stream are skipped rather than wrapped. Events are independent,
//! so overlapping bursts can flip a bit back to its original value.

use super::stream::BitStream;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::ops::Range;

/// Parameters for the channel noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoiseModel {
    /// Number of noise events per transmission
    pub events: usize,
    /// Extra bits flipped on each side of an event's centre
    pub burst_radius: usize,
}

impl NoiseModel {
    /// Isolated single-bit flips
    pub fn single_flips(events: usize) -> Self {
        Self {
            events,
            burst_radius: 0,
        }
    }

    /// Burst errors of `2 * burst_radius + 1` bits
    pub fn bursts(events: usize, burst_radius: usize) -> Self {
        Self {
            events,
            burst_radius,
        }
    }

    /// Applies this model to `bits` using the given generator
    pub fn apply<R: Rng + ?Sized>(&self, bits: &BitStream, rng: &mut R) -> BitStream {
        inject_noise(bits, self.events, self.burst_radius, rng)
    }
}

/// Indices touched by one event centred on `index`, clipped to `[0, len)`.
pub fn burst_range(index: usize, burst_radius: usize, len: usize) -> Range<usize> {
    let start = index.saturating_sub(burst_radius);
    let end = index.saturating_add(burst_radius).saturating_add(1).min(len);
    start..end
}

/// Returns a copy of `bits` with `events` random noise events applied.
///
/// The input is left untouched and the output always has the same length.
/// An empty stream is returned unchanged since no index can be drawn.
pub fn inject_noise<R: Rng + ?Sized>(
    bits: &BitStream,
    events: usize,
    burst_radius: usize,
    rng: &mut R,
) -> BitStream {
    let mut noisy = bits.clone();
    if noisy.is_empty() {
        return noisy;
    }

    for _ in 0..events {
        let centre = rng.gen_range(0..noisy.len());
        let span = burst_range(centre, burst_radius, noisy.len());
        trace!("noise event at bit {} flips {:?}", centre, span);
        for index in span {
            noisy.flip(index);
        }
    }

    debug!(
        "injected {} noise events (burst radius {}) into {} bits",
        events,
        burst_radius,
        noisy.len()
    );
    noisy
}

/// A noisy channel with its own random source.
#[derive(Debug, Clone)]
pub struct NoisyChannel {
    /// Noise applied to every transmission
    model: NoiseModel,
    /// Random number generator for picking event positions
    rng: ChaCha20Rng,
}

impl NoisyChannel {
    /// Create a channel seeded from system entropy
    pub fn new(model: NoiseModel) -> Self {
        Self {
            model,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create a channel with a fixed seed, for reproducible runs
    pub fn with_seed(model: NoiseModel, seed: u64) -> Self {
        Self {
            model,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Noise parameters of this channel
    pub fn model(&self) -> NoiseModel {
        self.model
    }

    /// Sends `bits` through the channel and returns what arrives
    pub fn transmit(&mut self, bits: &BitStream) -> BitStream {
        self.model.apply(bits, &mut self.rng)
    }
}
