use crate::config::AppConfig;
use crate::desk::{InstrumentKind, PricingDesk};
use crate::errors::PricingError;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ── Performance Counters (lock-free) ──

#[derive(Debug, Default)]
pub struct Counters {
    pub options_priced: AtomicU64,
    pub futures_priced: AtomicU64,
    pub swaps_valued: AtomicU64,
    pub invalid_inputs: AtomicU64,
    pub domain_errors: AtomicU64,
}

impl Counters {
    pub fn record_success(&self, kind: InstrumentKind) {
        let counter = match kind {
            InstrumentKind::Option => &self.options_priced,
            InstrumentKind::Future => &self.futures_priced,
            InstrumentKind::Swap => &self.swaps_valued,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, err: &PricingError) {
        let counter = match err {
            PricingError::InvalidInput { .. } => &self.invalid_inputs,
            PricingError::Domain(_) => &self.domain_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            options_priced: self.options_priced.load(Ordering::Relaxed),
            futures_priced: self.futures_priced.load(Ordering::Relaxed),
            swaps_valued: self.swaps_valued.load(Ordering::Relaxed),
            invalid_inputs: self.invalid_inputs.load(Ordering::Relaxed),
            domain_errors: self.domain_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CounterSnapshot {
    pub options_priced: u64,
    pub futures_priced: u64,
    pub swaps_valued: u64,
    pub invalid_inputs: u64,
    pub domain_errors: u64,
}

// ── Shared App State ──

/// Read-only apart from the counters; requests never see each other's data.
pub struct AppState {
    pub config: AppConfig,
    pub desk: PricingDesk,
    pub counters: Counters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            desk: PricingDesk::new(),
            counters: Counters::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_outcomes() {
        let c = Counters::default();
        c.record_success(InstrumentKind::Option);
        c.record_success(InstrumentKind::Option);
        c.record_success(InstrumentKind::Swap);
        c.record_failure(&PricingError::InvalidInput { field: "spot" });
        c.record_failure(&PricingError::Domain("maturity".into()));

        let snap = c.snapshot();
        assert_eq!(snap.options_priced, 2);
        assert_eq!(snap.futures_priced, 0);
        assert_eq!(snap.swaps_valued, 1);
        assert_eq!(snap.invalid_inputs, 1);
        assert_eq!(snap.domain_errors, 1);
    }
}
