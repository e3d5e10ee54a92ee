use crate::common::models::DerivativeParameter;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for stocks paying a continuous
/// dividend yield, plus the five standard sensitivities.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        dp.asset_price * dp.carry_factor() * cdf(dp.d1())
            - dp.strike * dp.discount_factor() * cdf(dp.d2())
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        dp.strike * dp.discount_factor() * cdf(-dp.d2())
            - dp.asset_price * dp.carry_factor() * cdf(-dp.d1())
    }
}

/// Each sensitivity is the (call, put) pair; gamma and vega coincide
/// for both legs.
impl BlackScholesMerton {
    pub fn delta(dp: &DerivativeParameter) -> (f64, f64) {
        let carry = dp.carry_factor();
        (carry * cdf(dp.d1()), carry * (cdf(dp.d1()) - 1.0))
    }

    pub fn gamma(dp: &DerivativeParameter) -> (f64, f64) {
        let gamma = pdf(dp.d1()) * dp.carry_factor() / (dp.asset_price * dp.sigma_t());
        (gamma, gamma)
    }

    pub fn vega(dp: &DerivativeParameter) -> (f64, f64) {
        let vega =
            dp.asset_price * dp.time_to_expiration.sqrt() * pdf(dp.d1()) * dp.carry_factor();
        (vega, vega)
    }

    pub fn theta(dp: &DerivativeParameter) -> (f64, f64) {
        let carry = dp.carry_factor();
        let discounted_strike = dp.strike * dp.discount_factor();
        // time decay of the optionality, shared by both legs
        let decay = -(dp.asset_price * pdf(dp.d1()) * dp.vola * carry)
            / (2.0 * dp.time_to_expiration.sqrt());
        let theta_call = decay + dp.dividend_yield * dp.asset_price * cdf(dp.d1()) * carry
            - dp.rfr * discounted_strike * cdf(dp.d2());
        let theta_put = decay - dp.dividend_yield * dp.asset_price * cdf(-dp.d1()) * carry
            + dp.rfr * discounted_strike * cdf(-dp.d2());
        (theta_call, theta_put)
    }

    pub fn rho(dp: &DerivativeParameter) -> (f64, f64) {
        let discounted_strike = dp.strike * dp.time_to_expiration * dp.discount_factor();
        (
            discounted_strike * cdf(dp.d2()),
            -discounted_strike * cdf(-dp.d2()),
        )
    }
}
