//! Win/lose resolution for giveaway draws

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;

/// Source of uniform samples for the resolver
pub trait RandomSource: Send {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[low, high]`
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
pub struct RngSource<R>(pub R);

impl<R: RngCore + Send> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        self.0.gen_range(low..=high)
    }
}

/// Deterministic source that always returns the same sample and payout
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    unit: f64,
    pick: u64,
}

impl FixedSource {
    pub fn new(unit: f64, pick: u64) -> Self {
        Self {
            unit: unit.clamp(0.0, 1.0 - f64::EPSILON),
            pick,
        }
    }

    /// Every draw wins (for any probability above zero) and pays `payout`
    pub fn always_win(payout: u64) -> Self {
        Self::new(0.0, payout)
    }

    /// Every draw loses (for any probability below one)
    pub fn always_lose() -> Self {
        Self::new(1.0, 0)
    }
}

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.unit
    }

    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        self.pick.clamp(low, high)
    }
}

/// Outcome of one giveaway draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawOutcome {
    pub won: bool,
    /// Coins paid out (zero on a loss)
    pub payout: u64,
}

/// Maps random samples to win/lose outcomes
pub struct ChanceResolver {
    source: Box<dyn RandomSource>,
    payout: RangeInclusive<u64>,
}

impl fmt::Debug for ChanceResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChanceResolver")
            .field("payout", &self.payout)
            .finish_non_exhaustive()
    }
}

impl ChanceResolver {
    pub fn new(source: Box<dyn RandomSource>, payout: RangeInclusive<u64>) -> Self {
        Self { source, payout }
    }

    /// Resolver backed by OS entropy
    pub fn from_entropy(payout: RangeInclusive<u64>) -> Self {
        Self::new(Box::new(RngSource(StdRng::from_entropy())), payout)
    }

    /// Reproducible resolver
    pub fn seeded(seed: u64, payout: RangeInclusive<u64>) -> Self {
        Self::new(Box::new(RngSource(StdRng::seed_from_u64(seed))), payout)
    }

    pub fn payout_range(&self) -> &RangeInclusive<u64> {
        &self.payout
    }

    /// Draw once: the draw wins when the sample falls below `win_probability`
    pub fn resolve(&mut self, win_probability: f64) -> DrawOutcome {
        let sample = self.source.next_unit();
        if sample < win_probability.clamp(0.0, 1.0) {
            let payout = self
                .source
                .next_in_range(*self.payout.start(), *self.payout.end());
            DrawOutcome { won: true, payout }
        } else {
            DrawOutcome {
                won: false,
                payout: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sources() {
        let mut win = ChanceResolver::new(Box::new(FixedSource::always_win(450)), 200..=699);
        assert_eq!(
            win.resolve(0.3),
            DrawOutcome {
                won: true,
                payout: 450
            }
        );

        let mut lose = ChanceResolver::new(Box::new(FixedSource::always_lose()), 200..=699);
        assert_eq!(
            lose.resolve(0.3),
            DrawOutcome {
                won: false,
                payout: 0
            }
        );
        // Certain wins stay certain
        assert!(lose.resolve(1.0).won);
    }

    #[test]
    fn test_payout_clamped_to_range() {
        let mut resolver = ChanceResolver::new(Box::new(FixedSource::always_win(5)), 200..=699);
        assert_eq!(resolver.resolve(0.5).payout, 200);
    }

    #[test]
    fn test_zero_probability_never_wins() {
        let mut resolver = ChanceResolver::seeded(7, 200..=699);
        assert!((0..500).all(|_| !resolver.resolve(0.0).won));
    }

    #[test]
    fn test_seeded_draws_stay_in_range() {
        let mut resolver = ChanceResolver::seeded(42, 200..=699);
        let outcomes: Vec<_> = (0..2_000).map(|_| resolver.resolve(0.3)).collect();

        let wins: Vec<_> = outcomes.iter().filter(|o| o.won).collect();
        assert!(wins.iter().all(|o| (200..=699).contains(&o.payout)));
        assert!(outcomes.iter().filter(|o| !o.won).all(|o| o.payout == 0));

        // 30% over 2000 draws; loose bounds
        assert!(wins.len() > 450 && wins.len() < 750, "wins = {}", wins.len());
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let mut a = ChanceResolver::seeded(9, 200..=699);
        let mut b = ChanceResolver::seeded(9, 200..=699);
        for _ in 0..50 {
            assert_eq!(a.resolve(0.3), b.resolve(0.3));
        }
    }
}
