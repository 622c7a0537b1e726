use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator; one per simulated game
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed.
    /// If seed is None, a random seed is drawn from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.random_range(i + 1);
            array.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_reproducibility() {
        let mut deck1: Vec<u32> = (0..60).collect();
        let mut deck2 = deck1.clone();

        GameRng::new(Some(42)).shuffle(&mut deck1);
        GameRng::new(Some(42)).shuffle(&mut deck2);

        assert_eq!(deck1, deck2, "Same seed should produce same shuffle");
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut deck: Vec<u32> = (0..60).collect();
        GameRng::new(Some(3)).shuffle(&mut deck);

        let mut sorted = deck.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..60).collect::<Vec<_>>());
        assert_ne!(deck, sorted, "a 60 card shuffle should move something");
    }

    #[test]
    fn test_different_seeds_produce_different_shuffles() {
        let mut deck1: Vec<u32> = (0..60).collect();
        let mut deck2 = deck1.clone();

        GameRng::new(Some(12345)).shuffle(&mut deck1);
        GameRng::new(Some(54321)).shuffle(&mut deck2);

        assert_ne!(deck1, deck2);
    }

    #[test]
    fn test_seed_getter() {
        assert_eq!(GameRng::new(Some(999)).seed(), 999);
    }

    #[test]
    fn test_random_range() {
        let mut rng = GameRng::new(Some(123));
        for _ in 0..1000 {
            assert!(rng.random_range(7) < 7, "random_range should be in [0, max)");
        }
    }
}
