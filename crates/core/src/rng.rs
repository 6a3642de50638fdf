use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};

/// Randomness consumed by match setup and buying. Pass a seeded source to
/// make a match reproducible.
pub trait MatchRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `[0, len)`. Returns 0 for an empty range.
    fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MatchRng for RngState {
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
