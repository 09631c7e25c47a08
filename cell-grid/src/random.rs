use rand::SeedableRng;
use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Random source handed to rules. Seed it to make runs reproducible.
#[derive(Clone, Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// `p` must be in `[0, 1]`.
    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    pub fn next_in_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Random::from_seed(3);
        let mut b = Random::from_seed(3);
        let draws_a: Vec<u64> = (0..10).map(|_| a.next_seed()).collect();
        let draws_b: Vec<u64> = (0..10).map(|_| b.next_seed()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn shuffle_keeps_items() {
        let mut rand = Random::from_seed(11);
        let mut items: Vec<u32> = (0..20).collect();
        rand.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn next_bool_extremes() {
        let mut rand = Random::from_seed(5);
        assert!((0..100).all(|_| rand.next_bool(1.0)));
        assert!((0..100).all(|_| !rand.next_bool(0.0)));
    }
}
