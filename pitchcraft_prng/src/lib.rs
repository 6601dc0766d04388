// Random source for the Pitchcraft generators.
//
// Every random decision in the workspace (name prefixes, tagline words,
// problem/solution phrasing, the abstract logo's curve, each landing-page
// layout axis, the suffix of generated ids) is drawn through the
// `RandomSource` trait defined here. Generators take `&mut impl RandomSource`
// instead of reaching for an ambient RNG, so callers decide whether a run is
// reproducible (`PitchRng::new(seed)`), fresh (`PitchRng::from_entropy()`),
// or fully scripted (`SequenceRng`, used by tests to force a branch).
//
// `PitchRng` is xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64
// seeding. It has no external dependencies and produces the same stream on
// every platform for a given seed.
//
// Uniformity: `range_u64` uses rejection sampling, so a draw over a bank of
// N entries is unbiased for any N. Callers rely on this for the "independent
// uniform draw per axis" contract of the layout selector.

use serde::{Deserialize, Serialize};
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed 64-bit values.
///
/// Only `next_u64` is required. The provided methods derive floats, bounded
/// integers and slice choices from it.
pub trait RandomSource {
    /// Generate the next `u64` in the sequence.
    fn next_u64(&mut self) -> u64;

    /// Generate a uniform `f64` in [0, 1) from the upper 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        // Rejection sampling to avoid modulo bias.
        let threshold = range.wrapping_neg() % range;
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Pick one element of a non-empty slice uniformly.
    ///
    /// Panics on an empty slice. Every bank and table in the workspace is a
    /// non-empty constant, so an empty slice here is a programming error.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        assert!(!items.is_empty(), "choose: cannot pick from an empty slice");
        &items[self.range_usize(0, items.len())]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        (**self).range_u64(low, high)
    }
}

// ---------------------------------------------------------------------------
// PitchRng: xoshiro256++
// ---------------------------------------------------------------------------

/// Xoshiro256++ PRNG, the production `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PitchRng {
    s: [u64; 4],
}

impl PitchRng {
    /// Create a generator from a `u64` seed.
    ///
    /// SplitMix64 expands the seed into the 256-bit state. Equal seeds give
    /// equal streams.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Create a generator with an unpredictable seed.
    ///
    /// Mixes the wall clock with the per-process random keys of std's
    /// `RandomState`. Two calls in the same process still get different
    /// seeds because every `RandomState` instance gets fresh keys.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        hasher.write_u64(nanos);
        Self::new(hasher.finish())
    }
}

impl RandomSource for PitchRng {
    fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

/// SplitMix64, used only to expand a seed into xoshiro state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// ---------------------------------------------------------------------------
// SequenceRng: scripted draws for tests
// ---------------------------------------------------------------------------

/// A `RandomSource` that replays a fixed list of values, cycling forever.
///
/// Bounded draws return `low + value % (high - low)`, so a script of small
/// integers reads as "pick index N" for each successive choice. `next_f64`
/// maps a value to `(value % 1_000_000) / 1_000_000`.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    pos: usize,
}

impl SequenceRng {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// A source whose every draw picks index 0 / returns 0.0.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// How many values have been consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() % 1_000_000) as f64 / 1_000_000.0
    }

    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        low + self.next_u64() % (high - low)
    }
}
