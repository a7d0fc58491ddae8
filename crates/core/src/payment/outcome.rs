//! Randomness behind simulated gateways.

use rand::Rng;

/// Supplies gateway draws, uniform in `[0, 1)`.
pub trait OutcomeSource: Send + Sync {
    /// Next draw.
    fn sample(&self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOutcome;

impl OutcomeSource for RandomOutcome {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}
