use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::generator::corpus::{Corpus, Difficulty};

/// Picks practice texts from an owned, already validated [`Corpus`].
pub struct ChallengeSelector {
    corpus: Corpus,
    rng: SmallRng,
}

impl ChallengeSelector {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_rng(corpus, SmallRng::from_entropy())
    }

    pub fn with_rng(corpus: Corpus, rng: SmallRng) -> Self {
        Self { corpus, rng }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Uniform pick from the tier's texts. `Corpus::new` rejects empty tiers,
    /// so there is always something to choose from.
    pub fn select_text(&mut self, tier: Difficulty) -> String {
        self.corpus
            .texts(tier)
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn seeded(seed: u64) -> ChallengeSelector {
        ChallengeSelector::with_rng(Corpus::builtin().unwrap(), SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn test_selection_stays_in_tier() {
        let mut selector = seeded(7);
        for tier in Difficulty::ALL {
            for _ in 0..50 {
                let text = selector.select_text(tier);
                assert!(selector.corpus().texts(tier).contains(&text));
            }
        }
    }

    #[test]
    fn test_selection_varies() {
        let mut selector = seeded(42);
        let picks: HashSet<String> = (0..200)
            .map(|_| selector.select_text(Difficulty::Medium))
            .collect();
        assert_eq!(picks.len(), 4);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(3);
        let mut b = seeded(3);
        for _ in 0..20 {
            assert_eq!(a.select_text(Difficulty::Hard), b.select_text(Difficulty::Hard));
        }
    }
}
