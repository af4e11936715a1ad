//! Random sources for password generation.
//!
//! Generation only needs a stream of reals in `[0, 1)`. Anything that can
//! produce one plugs in through [`RandomSource`], which keeps the generator
//! deterministic under test.

use rand::Rng;
use rand::rngs::ThreadRng;

/// A stream of uniformly distributed reals in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Map a real in `[0, 1)` to an index in `0..len`.
///
/// Floors the scaled value and clamps to the last slot, so a source that
/// returns `1.0` (or more) still lands in range. `len` must be non-zero.
#[inline]
pub fn index(unit: f64, len: usize) -> usize {
    debug_assert!(len > 0, "index into an empty alphabet");
    let scaled = (unit * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        return 0;
    }
    (scaled as usize).min(len - 1)
}

// =============================================================================
// Sources
// =============================================================================

/// Thread-local generator from the `rand` crate. The default source.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Adapter for any `rand` generator, e.g. a seeded `StdRng`.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    pos: usize,
}

impl FixedSequence {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "FixedSequence needs at least one value");
        FixedSequence { values, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn index_floors() {
        assert_eq!(index(0.0, 26), 0);
        assert_eq!(index(0.5, 26), 13);
        assert_eq!(index(0.999, 10), 9);
    }

    #[test]
    fn index_never_reaches_len() {
        let almost_one = 1.0 - f64::EPSILON;
        for len in 1..=74 {
            assert!(index(almost_one, len) < len);
            assert_eq!(index(1.0, len), len - 1);
            assert_eq!(index(7.5, len), len - 1);
        }
    }

    #[test]
    fn index_clamps_bad_input_to_zero() {
        assert_eq!(index(-0.3, 12), 0);
        assert_eq!(index(f64::NAN, 12), 0);
    }

    #[test]
    fn fixed_sequence_wraps() {
        let mut seq = FixedSequence::new(vec![0.1, 0.2]);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.next_unit(), 0.2);
        assert_eq!(seq.next_unit(), 0.1);
    }

    #[test]
    fn rng_sources_stay_in_unit_range() {
        let mut seeded = RngSource(StdRng::seed_from_u64(7));
        let mut thread = ThreadRandom::new();
        for _ in 0..1000 {
            let a = seeded.next_unit();
            let b = thread.next_unit();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }
}
