pub mod black_scholes;
pub mod cost_of_carry;
pub mod swap;

use crate::errors::{PricingError, PricingResult};

/// Number of samples in every chart curve.
pub const CURVE_POINTS: usize = 100;

/// All instrument pricers implement this trait.
/// evaluate() must be a pure function: deterministic output from the request only.
/// Send + Sync required so one instance can be shared across tokio tasks.
pub trait Pricer: Send + Sync {
    type Request;
    type Output;

    fn name(&self) -> &'static str;

    fn evaluate(&self, request: &Self::Request) -> PricingResult<Self::Output>;
}

/// One `(x, y)` sample of a chart curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// `n` equally spaced values over `[start, end]`, both ends included.
///
/// The last value is exactly `end`. A zero-length interval collapses to a
/// single sample.
pub fn sample_grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n <= 1 || start == end {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    grid[n - 1] = end;
    grid
}

/// Display convention shared by every result: `$` then two decimals.
#[inline]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> PricingResult<f64> {
    if !value.is_finite() {
        return Err(PricingError::Domain(format!("{name} must be finite, got {value}")));
    }
    Ok(value)
}

pub(crate) fn ensure_finite_curve(name: &str, curve: &[CurvePoint]) -> PricingResult<()> {
    match curve.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        Some(p) => Err(PricingError::Domain(format!(
            "{name} overflows at ({}, {})",
            p.x, p.y
        ))),
        None => Ok(()),
    }
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> PricingResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::Domain(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(value)
}
