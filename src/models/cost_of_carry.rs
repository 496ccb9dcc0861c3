use crate::errors::PricingResult;
use crate::models::{ensure_finite, ensure_finite_curve, format_currency, sample_grid, CurvePoint, Pricer, CURVE_POINTS};

/// Futures inputs. `rate` and `carry` are decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuturesRequest {
    pub spot: f64,
    pub rate: f64,
    /// Net cost of carry. `None` prices the plain financing-only contract.
    pub carry: Option<f64>,
    pub maturity: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FuturesResult {
    pub spot: f64,
    pub price: f64,
    /// Spot-futures basis, `spot - futures`.
    pub basis: f64,
    /// Price path: `(time in years, futures price)`.
    pub curve: Vec<CurvePoint>,
}

impl FuturesResult {
    pub fn summary(&self) -> String {
        format!("Future Price: {}", format_currency(self.price))
    }
}

/// Cost-of-carry futures pricing.
///
/// F = S * exp((r + c) * T), with c = 0 when no carry is given.
pub struct FuturesPricer;

impl FuturesPricer {
    pub fn new() -> Self {
        Self
    }

    pub fn price(&self, req: &FuturesRequest) -> PricingResult<FuturesResult> {
        let spot = ensure_finite("spot", req.spot)?;
        let rate = ensure_finite("rate", req.rate)?;
        let carry = ensure_finite("carry", req.carry.unwrap_or(0.0))?;
        let maturity = ensure_finite("maturity", req.maturity)?;

        let drift = rate + carry;
        let forward_at = |t: f64| spot * (drift * t).exp();

        let price = ensure_finite("futures price", forward_at(maturity))?;

        // Zero maturity collapses the grid to the single point (0, S).
        let curve: Vec<CurvePoint> = sample_grid(0.0, maturity, CURVE_POINTS)
            .into_iter()
            .map(|t| CurvePoint { x: t, y: forward_at(t) })
            .collect();
        ensure_finite_curve("futures curve", &curve)?;

        Ok(FuturesResult {
            spot,
            price,
            basis: spot - price,
            curve,
        })
    }
}

impl Default for FuturesPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pricer for FuturesPricer {
    type Request = FuturesRequest;
    type Output = FuturesResult;

    #[inline]
    fn name(&self) -> &'static str {
        "Cost-of-Carry"
    }

    fn evaluate(&self, request: &FuturesRequest) -> PricingResult<FuturesResult> {
        self.price(request)
    }
}
