use crate::errors::{PricingError, PricingResult};
use crate::models::{
    ensure_finite, ensure_finite_curve, ensure_positive, format_currency, sample_grid, CurvePoint,
    Pricer, CURVE_POINTS,
};
use statrs::distribution::{ContinuousCDF, Normal};

/// Call or put payoff direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Intrinsic value at expiry for a terminal spot.
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (spot - strike).max(0.0),
            Self::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::str::FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            _ => Err(PricingError::InvalidInput { field: "kind" }),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// European option inputs. Rates and volatility are decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionRequest {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub kind: OptionKind,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OptionResult {
    pub kind: OptionKind,
    pub strike: f64,
    /// Premium. Not clamped at zero.
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
    /// Breakeven curve: `(terminal spot, net P/L)`.
    pub curve: Vec<CurvePoint>,
}

impl OptionResult {
    /// Net P/L at expiry for a terminal spot, using the premium already priced.
    #[inline]
    pub fn payoff_at(&self, terminal_spot: f64) -> f64 {
        self.kind.intrinsic(terminal_spot, self.strike) - self.price
    }

    pub fn summary(&self) -> String {
        format!("Option Price: {}", format_currency(self.price))
    }
}

/// Black-Scholes European option pricing (no dividends).
///
/// d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
/// call = S*Phi(d1) - K*exp(-rT)*Phi(d2)
/// put  = K*exp(-rT)*Phi(-d2) - S*Phi(-d1)
pub struct OptionPricer {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl OptionPricer {
    pub fn new() -> Self {
        Self {
            normal: Normal::standard(),
        }
    }

    pub fn price(&self, req: &OptionRequest) -> PricingResult<OptionResult> {
        let spot = ensure_positive("spot", req.spot)?;
        let strike = ensure_positive("strike", req.strike)?;
        let maturity = ensure_positive("maturity", req.maturity)?;
        let sigma = ensure_positive("volatility", req.volatility)?;
        let rate = ensure_finite("rate", req.rate)?;

        let sigma_sqrt_t = sigma * maturity.sqrt();
        let d1 = ((spot / strike).ln() + (rate + sigma * sigma / 2.0) * maturity) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;
        let discounted_strike = strike * (-rate * maturity).exp();

        let price = match req.kind {
            OptionKind::Call => {
                spot * self.normal.cdf(d1) - discounted_strike * self.normal.cdf(d2)
            }
            OptionKind::Put => {
                discounted_strike * self.normal.cdf(-d2) - spot * self.normal.cdf(-d1)
            }
        };
        let price = ensure_finite("option price", price)?;

        tracing::debug!(kind = %req.kind, d1, d2, price, "black-scholes evaluated");

        let upper = ensure_finite("breakeven curve upper spot", 1.5 * spot)?;
        let curve: Vec<CurvePoint> = sample_grid(0.5 * spot, upper, CURVE_POINTS)
            .into_iter()
            .map(|sp| CurvePoint {
                x: sp,
                y: req.kind.intrinsic(sp, strike) - price,
            })
            .collect();
        ensure_finite_curve("breakeven curve", &curve)?;

        Ok(OptionResult {
            kind: req.kind,
            strike,
            price,
            d1,
            d2,
            curve,
        })
    }
}

impl Default for OptionPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pricer for OptionPricer {
    type Request = OptionRequest;
    type Output = OptionResult;

    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn evaluate(&self, request: &OptionRequest) -> PricingResult<OptionResult> {
        self.price(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn request(kind: OptionKind) -> OptionRequest {
        OptionRequest {
            spot: 100.0,
            strike: 105.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.20,
            kind,
        }
    }

    #[test]
    fn test_reference_call() {
        let res = OptionPricer::new().price(&request(OptionKind::Call)).unwrap();
        assert_abs_diff_eq!(res.price, 8.0214, epsilon = 1e-3);
        assert_eq!(res.summary(), "Option Price: $8.02");
    }

    #[test]
    fn test_reference_put() {
        let res = OptionPricer::new().price(&request(OptionKind::Put)).unwrap();
        assert_abs_diff_eq!(res.price, 7.9004, epsilon = 1e-3);
        assert_eq!(res.summary(), "Option Price: $7.90");
    }

    #[test]
    fn test_atm_zero_rate_call_equals_put() {
        let pricer = OptionPricer::new();
        let mut req = request(OptionKind::Call);
        req.strike = req.spot;
        req.rate = 0.0;
        let call = pricer.price(&req).unwrap().price;
        req.kind = OptionKind::Put;
        let put = pricer.price(&req).unwrap().price;
        assert_relative_eq!(call, put, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_maturity_is_domain_error() {
        let mut req = request(OptionKind::Call);
        req.maturity = 0.0;
        assert!(matches!(
            OptionPricer::new().price(&req),
            Err(PricingError::Domain(_))
        ));
    }

    #[test]
    fn test_zero_or_negative_volatility_is_domain_error() {
        let pricer = OptionPricer::new();
        for vol in [0.0, -0.2] {
            let mut req = request(OptionKind::Put);
            req.volatility = vol;
            assert!(matches!(pricer.price(&req), Err(PricingError::Domain(_))));
        }
    }

    #[test]
    fn test_non_positive_spot_or_strike_is_domain_error() {
        let pricer = OptionPricer::new();
        let mut req = request(OptionKind::Call);
        req.spot = 0.0;
        assert!(pricer.price(&req).is_err());
        let mut req = request(OptionKind::Call);
        req.strike = -1.0;
        assert!(pricer.price(&req).is_err());
    }

    #[test]
    fn test_breakeven_curve_shape() {
        let res = OptionPricer::new().price(&request(OptionKind::Call)).unwrap();
        assert_eq!(res.curve.len(), CURVE_POINTS);
        assert_eq!(res.curve[0].x, 50.0);
        assert_eq!(res.curve[CURVE_POINTS - 1].x, 150.0);
        // Deep OTM end loses exactly the premium
        assert_eq!(res.curve[0].y, -res.price);
        assert_relative_eq!(res.curve[CURVE_POINTS - 1].y, 45.0 - res.price, max_relative = 1e-12);
    }

    #[test]
    fn test_curve_reuses_single_price() {
        let res = OptionPricer::new().price(&request(OptionKind::Put)).unwrap();
        for p in &res.curve {
            assert_eq!(p.y, (105.0 - p.x).max(0.0) - res.price);
        }
    }

    #[test]
    fn test_payoff_at_spot() {
        let res = OptionPricer::new().price(&request(OptionKind::Call)).unwrap();
        assert_eq!(res.payoff_at(100.0), (100.0_f64 - 105.0).max(0.0) - res.price);
    }

    #[test]
    fn test_curve_overflow_is_domain_error() {
        let pricer = OptionPricer::new();
        let mut req = request(OptionKind::Call);
        req.spot = 1.5e308;
        req.strike = 1.0;
        assert!(matches!(pricer.price(&req), Err(PricingError::Domain(_))));

        // Upper grid bound still fits in f64 here.
        let mut req = request(OptionKind::Call);
        req.spot = 1.0e308;
        req.strike = 1.0e308;
        match pricer.price(&req) {
            Ok(res) => assert!(res.curve.iter().all(|p| p.x.is_finite() && p.y.is_finite())),
            Err(e) => assert!(matches!(e, PricingError::Domain(_))),
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(" Call ".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_deterministic() {
        let pricer = OptionPricer::new();
        let a = pricer.price(&request(OptionKind::Call)).unwrap();
        let b = pricer.price(&request(OptionKind::Call)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn put_call_parity_holds(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            maturity in 0.05_f64..5.0,
            rate in -0.02_f64..0.15,
            volatility in 0.05_f64..0.9,
        ) {
            let pricer = OptionPricer::new();
            let mut req = OptionRequest { spot, strike, maturity, rate, volatility, kind: OptionKind::Call };
            let call = pricer.price(&req).unwrap().price;
            req.kind = OptionKind::Put;
            let put = pricer.price(&req).unwrap().price;
            let forward_gap = spot - strike * (-rate * maturity).exp();
            let tol = 1e-6 * spot.max(strike);
            prop_assert!(
                (call - put - forward_gap).abs() <= tol,
                "call={call} put={put} gap={forward_gap}"
            );
        }
    }
}
