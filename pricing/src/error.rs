use thiserror::Error;

/// Degenerate inputs for which the valuation formulas are undefined.
/// These are checked up front so that no NaN or infinity ever reaches
/// a cached result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// d1 and d2 divide by `vola * sqrt(t)`.
    #[error("volatility must be strictly positive for pricing")]
    ZeroVolatility,
    /// d1 takes `ln(price / strike)`.
    #[error("price and strike must be strictly positive for pricing")]
    ZeroPrice,
    /// Unreachable through the future-date guard, but the clock may have
    /// moved past the maturity since construction.
    #[error("the option has expired, time to maturity is not positive")]
    ExpiredOption,
    #[error("at least one Monte Carlo sample is required")]
    NoSamples,
}
