use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal};
use rand_hc::Hc128Rng;

use crate::common::models::DerivativeParameter;
use crate::error::PricingError;

/// The distribution of the terminal asset price under the risk-neutral
/// measure: log-normal with location `ln(S) + (r - q - sigma^2 / 2) * t`
/// and scale `sigma * sqrt(t)`.
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
pub fn risk_neutral_terminal_distribution(
    dp: &DerivativeParameter,
) -> Result<LogNormal<f64>, PricingError> {
    let location = dp.asset_price.ln()
        + (dp.rfr - dp.dividend_yield - dp.vola.powi(2) / 2.0) * dp.time_to_expiration;
    LogNormal::new(location, dp.sigma_t()).map_err(|_| PricingError::ZeroVolatility)
}

/// Draws a fixed number of independent samples from a seeded generator.
/// A fixed `(nr_samples, seed_nr)` pair reproduces the sample vector
/// bit for bit.
pub struct MonteCarloTerminalSimulator {
    pub nr_samples: usize,
    pub seed_nr: u64,
}

impl MonteCarloTerminalSimulator {
    pub fn new(nr_samples: usize, seed_nr: u64) -> Self {
        Self {
            nr_samples,
            seed_nr,
        }
    }

    pub fn simulate(&self, distribution: impl Distribution<f64>) -> Vec<f64> {
        let rng = Hc128Rng::seed_from_u64(self.seed_nr);
        distribution
            .sample_iter(rng)
            .take(self.nr_samples)
            .collect()
    }
}

pub struct PayoffEvaluator<'a> {
    samples: &'a [f64],
}

impl<'a> PayoffEvaluator<'a> {
    pub fn new(samples: &'a [f64]) -> Self {
        Self { samples }
    }

    /// Average payoff over all samples, in sample order. `None` for an
    /// empty sample set.
    pub fn evaluate_average(&self, payoff: impl Fn(f64) -> f64) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total = self.samples.iter().fold(0.0, |acc, sample| acc + payoff(*sample));
        Some(total / self.samples.len() as f64)
    }
}
