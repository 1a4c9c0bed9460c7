//! Deterministic PRNG for simulated customers.
//!
//! SplitMix64: eight bytes of state, so a whole simulation replays exactly
//! from its seed.

/// SplitMix64 pseudo-random number generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRng {
    state: u64,
}

impl ShopRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    pub fn below(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform value in `1..=max`, or 1 when `max` is 0.
    pub fn between_one_and(&mut self, max: usize) -> usize {
        self.below(max.max(1)) + 1
    }

    /// Fair coin flip.
    pub fn flip(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Pick an element of a slice, or `None` if it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ShopRng::new(7);
        let mut b = ShopRng::new(7);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = ShopRng::new(3);
        for _ in 0..500 {
            assert!(rng.below(5) < 5);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn between_one_and_is_inclusive() {
        let mut rng = ShopRng::new(11);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = rng.between_one_and(3);
            assert!((1..=3).contains(&v));
            seen[v - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.between_one_and(0), 1);
    }

    #[test]
    fn choose_empty() {
        let mut rng = ShopRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
