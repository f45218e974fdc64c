use fastrand::Rng;

/// Source of swap proposals for the hill climber.
///
/// Implementations must return two *distinct* indices below `n`.
pub trait SwapSampler {
    fn draw_pair(&mut self, n: usize) -> (usize, usize);
}

/// Uniform draw of two distinct indices without replacement.
pub struct RandomSampler {
    pub rng: Rng,
}

impl RandomSampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        Self { rng }
    }
}

impl SwapSampler for RandomSampler {
    #[inline(always)]
    fn draw_pair(&mut self, n: usize) -> (usize, usize) {
        debug_assert!(n >= 2);
        let a = self.rng.usize(0..n);
        // pick from the n-1 remaining slots, skipping over `a`
        let mut b = self.rng.usize(0..n - 1);
        if b >= a {
            b += 1;
        }
        (a, b)
    }
}

/// Replays a fixed list of pairs, cycling when exhausted.
pub struct ScriptedSampler {
    pairs: Vec<(usize, usize)>,
    pos: usize,
}

impl ScriptedSampler {
    pub fn new(pairs: Vec<(usize, usize)>) -> Self {
        assert!(!pairs.is_empty(), "ScriptedSampler needs at least one pair");
        Self { pairs, pos: 0 }
    }
}

impl SwapSampler for ScriptedSampler {
    fn draw_pair(&mut self, _n: usize) -> (usize, usize) {
        let pair = self.pairs[self.pos % self.pairs.len()];
        self.pos += 1;
        pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pairs_are_distinct_and_in_range() {
        let mut s = RandomSampler::new(Some(7));
        for _ in 0..10_000 {
            let (a, b) = s.draw_pair(26);
            assert_ne!(a, b);
            assert!(a < 26 && b < 26);
        }
    }

    #[test]
    fn every_pair_shows_up() {
        let mut s = RandomSampler::new(Some(42));
        let mut seen = [[false; 26]; 26];
        for _ in 0..50_000 {
            let (a, b) = s.draw_pair(26);
            seen[a][b] = true;
        }
        for a in 0..26 {
            for b in 0..26 {
                assert_eq!(seen[a][b], a != b, "pair ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn seeded_samplers_agree() {
        let mut x = RandomSampler::new(Some(99));
        let mut y = RandomSampler::new(Some(99));
        for _ in 0..100 {
            assert_eq!(x.draw_pair(26), y.draw_pair(26));
        }
    }
}
