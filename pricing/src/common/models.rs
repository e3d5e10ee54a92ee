pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    /// the annualized continuous dividend yield of the asset
    pub dividend_yield: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        }
    }

    pub fn sigma_t(&self) -> f64 {
        self.vola * self.time_to_expiration.sqrt()
    }

    /// Standardized moneyness term feeding the normal CDF/PDF in all the
    /// Black-Scholes formulas. Cheap, recomputed on every call.
    pub fn d1(&self) -> f64 {
        ((self.asset_price / self.strike).ln()
            + (self.rfr - self.dividend_yield + self.vola.powi(2) / 2.0) * self.time_to_expiration)
            / self.sigma_t()
    }

    pub fn d2(&self) -> f64 {
        self.d1() - self.sigma_t()
    }

    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    pub fn carry_factor(&self) -> f64 {
        (-self.dividend_yield * self.time_to_expiration).exp()
    }
}
