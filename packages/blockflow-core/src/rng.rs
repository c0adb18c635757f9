use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Injectable source of bounded uniform draws. Layout and line generation
/// never touch an rng directly, so tests can script exact sequences.
pub trait RandomSource {
    /// Uniform draw over `[min(a, b), max(a, b))`. Bounds may arrive in
    /// either order.
    fn uniform(&mut self, a: f32, b: f32) -> f32;

    /// Inclusive integer draw over the normalized `[a, b]` range.
    fn round_uniform(&mut self, a: i32, b: i32) -> i32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let drawn = self.uniform(lo as f32, hi as f32 + 1.0).floor() as i32;
        drawn.clamp(lo, hi)
    }
}

/// Production source backed by a seedable generator.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, a: f32, b: f32) -> f32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}
