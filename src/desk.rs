use crate::errors::PricingResult;
use crate::models::black_scholes::{OptionPricer, OptionRequest, OptionResult};
use crate::models::cost_of_carry::{FuturesPricer, FuturesRequest, FuturesResult};
use crate::models::swap::{SwapRequest, SwapResult, SwapValuator};
use crate::models::Pricer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Option,
    Future,
    Swap,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Option => write!(f, "option"),
            Self::Future => write!(f, "future"),
            Self::Swap => write!(f, "swap"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstrumentRequest {
    Option(OptionRequest),
    Future(FuturesRequest),
    Swap(SwapRequest),
}

impl InstrumentRequest {
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Option(_) => InstrumentKind::Option,
            Self::Future(_) => InstrumentKind::Future,
            Self::Swap(_) => InstrumentKind::Swap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Valuation {
    Option(OptionResult),
    Future(FuturesResult),
    Swap(SwapResult),
}

impl Valuation {
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Option(_) => InstrumentKind::Option,
            Self::Future(_) => InstrumentKind::Future,
            Self::Swap(_) => InstrumentKind::Swap,
        }
    }

    /// Headline number: premium, futures price or swap value.
    pub fn amount(&self) -> f64 {
        match self {
            Self::Option(r) => r.price,
            Self::Future(r) => r.price,
            Self::Swap(r) => r.value,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::Option(r) => r.summary(),
            Self::Future(r) => r.summary(),
            Self::Swap(r) => r.summary(),
        }
    }
}

/// One instance of each pricer (created once, reused). Pricers never share
/// state, so the desk is freely shared across tasks.
#[derive(Default)]
pub struct PricingDesk {
    options: OptionPricer,
    futures: FuturesPricer,
    swaps: SwapValuator,
}

impl PricingDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(&self, req: &OptionRequest) -> PricingResult<OptionResult> {
        self.options.evaluate(req)
    }

    pub fn future(&self, req: &FuturesRequest) -> PricingResult<FuturesResult> {
        self.futures.evaluate(req)
    }

    pub fn swap(&self, req: &SwapRequest) -> PricingResult<SwapResult> {
        self.swaps.evaluate(req)
    }

    /// Route a request to the pricer for its instrument kind.
    pub fn dispatch(&self, request: &InstrumentRequest) -> PricingResult<Valuation> {
        let valuation = match request {
            InstrumentRequest::Option(r) => Valuation::Option(self.option(r)?),
            InstrumentRequest::Future(r) => Valuation::Future(self.future(r)?),
            InstrumentRequest::Swap(r) => Valuation::Swap(self.swap(r)?),
        };
        tracing::debug!(
            instrument = %valuation.kind(),
            model = self.model_name(valuation.kind()),
            amount = valuation.amount(),
            "instrument priced"
        );
        Ok(valuation)
    }

    pub fn model_name(&self, kind: InstrumentKind) -> &'static str {
        match kind {
            InstrumentKind::Option => self.options.name(),
            InstrumentKind::Future => self.futures.name(),
            InstrumentKind::Swap => self.swaps.name(),
        }
    }
}

pub fn price_option(request: OptionRequest) -> PricingResult<OptionResult> {
    OptionPricer::new().price(&request)
}

pub fn price_future(request: FuturesRequest) -> PricingResult<FuturesResult> {
    FuturesPricer::new().price(&request)
}

pub fn value_swap(request: SwapRequest) -> PricingResult<SwapResult> {
    SwapValuator::new().value(&request)
}
