//! Random index selection behind a swappable source.
//!
//! The session only ever asks one question: "which of these `len` remaining
//! numbers?". Production answers it with a seeded or entropy-backed `StdRng`;
//! tests answer it with a fixed script so draw sequences can be written out
//! by hand.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of uniformly distributed pool indices.
pub trait RandomSource {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

// ---------------------------------------------------------------------------
// Production source
// ---------------------------------------------------------------------------

/// `StdRng`-backed source. `Some(seed)` reproduces the same draw order every
/// run; `None` seeds from OS entropy.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        StdRandom { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Fork a fresh `StdRng` off any existing generator.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        StdRandom { rng: StdRng::seed_from_u64(rng.gen()) }
    }
}

impl RandomSource for StdRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

// ---------------------------------------------------------------------------
// Scripted source
// ---------------------------------------------------------------------------

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Out-of-range entries are clamped to the last valid index, so a script
/// written for a larger pool keeps working as the pool shrinks.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(indices: Vec<usize>) -> Self {
        ScriptedRandom { indices, cursor: 0 }
    }

    /// Always picks `index`.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// How many picks have been served.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.cursor % self.indices.len()]
        };
        self.cursor += 1;
        raw.min(len.saturating_sub(1))
    }
}
