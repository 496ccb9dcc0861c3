use crate::errors::PricingResult;
use crate::models::{ensure_finite, format_currency, Pricer};

/// Fixed-vs-floating swap inputs. Rates are decimal fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapRequest {
    pub notional: f64,
    pub fixed_rate: f64,
    pub floating_rate: f64,
    pub tenor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SwapResult {
    /// Signed value; positive favours the floating receiver.
    pub value: f64,
    pub annual_differential: f64,
}

impl SwapResult {
    pub fn summary(&self) -> String {
        format!("Swap Value: {}", format_currency(self.value))
    }
}

/// Undiscounted fixed-vs-floating differential.
///
/// value = notional * (floating - fixed) * tenor
///
/// This is a linear annuity approximation, not a discounted par-swap PV.
pub struct SwapValuator;

impl SwapValuator {
    pub fn new() -> Self {
        Self
    }

    pub fn value(&self, req: &SwapRequest) -> PricingResult<SwapResult> {
        let notional = ensure_finite("notional", req.notional)?;
        let fixed = ensure_finite("fixed rate", req.fixed_rate)?;
        let floating = ensure_finite("floating rate", req.floating_rate)?;
        let tenor = ensure_finite("tenor", req.tenor)?;

        let annual_differential = notional * (floating - fixed);
        let value = ensure_finite("swap value", annual_differential * tenor)?;

        Ok(SwapResult { value, annual_differential })
    }
}

impl Default for SwapValuator {
    fn default() -> Self {
        Self::new()
    }
}

impl Pricer for SwapValuator {
    type Request = SwapRequest;
    type Output = SwapResult;

    #[inline]
    fn name(&self) -> &'static str {
        "Fixed-Float Differential"
    }

    fn evaluate(&self, request: &SwapRequest) -> PricingResult<SwapResult> {
        self.value(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn reference() -> SwapRequest {
        SwapRequest {
            notional: 1_000_000.0,
            fixed_rate: 0.03,
            floating_rate: 0.025,
            tenor: 5.0,
        }
    }

    #[test]
    fn test_reference_value() {
        let res = SwapValuator::new().value(&reference()).unwrap();
        assert_relative_eq!(res.value, -25_000.0, max_relative = 1e-9);
        assert_relative_eq!(res.annual_differential, -5_000.0, max_relative = 1e-9);
        assert_eq!(res.summary(), "Swap Value: $-25000.00");
    }

    #[test]
    fn test_floating_above_fixed_is_positive() {
        let req = SwapRequest { floating_rate: 0.04, ..reference() };
        assert!(SwapValuator::new().value(&req).unwrap().value > 0.0);
    }

    #[test]
    fn test_equal_rates_worth_zero() {
        let req = SwapRequest { floating_rate: 0.03, ..reference() };
        assert_eq!(SwapValuator::new().value(&req).unwrap().value, 0.0);
    }

    #[test]
    fn test_negative_notional_allowed() {
        let req = SwapRequest { notional: -1_000_000.0, ..reference() };
        assert_relative_eq!(SwapValuator::new().value(&req).unwrap().value, 25_000.0, max_relative = 1e-9);
    }

    proptest! {
        #[test]
        fn linear_in_notional(
            notional in -1e9_f64..1e9,
            fixed in 0.0_f64..0.2,
            floating in 0.0_f64..0.2,
            tenor in 0.0_f64..30.0,
        ) {
            let valuator = SwapValuator::new();
            let one = valuator.value(&SwapRequest { notional, fixed_rate: fixed, floating_rate: floating, tenor }).unwrap();
            let two = valuator.value(&SwapRequest { notional: 2.0 * notional, fixed_rate: fixed, floating_rate: floating, tenor }).unwrap();
            prop_assert_eq!(two.value, 2.0 * one.value);
        }
    }
}
