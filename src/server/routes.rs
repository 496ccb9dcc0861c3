use crate::desk::{InstrumentKind, InstrumentRequest, Valuation};
use crate::errors::{PricingError, PricingResult};
use crate::forms::{DefaultForms, FutureForm, OptionForm, SwapForm};
use crate::models::black_scholes::OptionRequest;
use crate::models::cost_of_carry::FuturesRequest;
use crate::models::swap::SwapRequest;
use crate::state::{AppState, CounterSnapshot};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// A priced instrument as returned to the front-end. Nothing is stored.
#[derive(Debug, serde::Serialize)]
pub struct Quote {
    pub quote_id: String,
    pub priced_at: String,
    pub instrument: InstrumentKind,
    pub model: &'static str,
    pub summary: String,
    #[serde(flatten)]
    pub valuation: Valuation,
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// GET /api/health
pub async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/defaults -- pre-filled form values for every instrument
pub async fn get_defaults() -> Json<DefaultForms> {
    Json(DefaultForms::default())
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CounterSnapshot> {
    Json(state.counters.snapshot())
}

/// POST /api/options
pub async fn post_option(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptionForm>, JsonRejection>,
) -> Result<Json<Quote>, PricingError> {
    let request = read_body(payload)
        .and_then(|Json(form)| OptionRequest::try_from(&form))
        .map(InstrumentRequest::Option);
    price(&state, InstrumentKind::Option, request).map(Json)
}

/// POST /api/futures
pub async fn post_future(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FutureForm>, JsonRejection>,
) -> Result<Json<Quote>, PricingError> {
    let request = read_body(payload)
        .and_then(|Json(form)| FuturesRequest::try_from(&form))
        .map(InstrumentRequest::Future);
    price(&state, InstrumentKind::Future, request).map(Json)
}

/// POST /api/swaps
pub async fn post_swap(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SwapForm>, JsonRejection>,
) -> Result<Json<Quote>, PricingError> {
    let request = read_body(payload)
        .and_then(|Json(form)| SwapRequest::try_from(&form))
        .map(InstrumentRequest::Swap);
    price(&state, InstrumentKind::Swap, request).map(Json)
}

/// A body that is not a JSON form counts as one invalid-input failure.
fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> PricingResult<Json<T>> {
    payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "unreadable request body");
        PricingError::InvalidInput { field: "body" }
    })
}

/// Validate-then-price for one request. Pure computation, no awaits.
fn price(
    state: &AppState,
    kind: InstrumentKind,
    request: PricingResult<InstrumentRequest>,
) -> PricingResult<Quote> {
    match request.and_then(|r| state.desk.dispatch(&r)) {
        Ok(valuation) => {
            state.counters.record_success(kind);
            let quote = Quote {
                quote_id: uuid::Uuid::new_v4().to_string(),
                priced_at: chrono::Utc::now().to_rfc3339(),
                instrument: kind,
                model: state.desk.model_name(kind),
                summary: valuation.summary(),
                valuation,
            };
            tracing::info!(
                instrument = %kind,
                quote_id = %quote.quote_id,
                amount = quote.valuation.amount(),
                "quote issued"
            );
            Ok(quote)
        }
        Err(e) => {
            state.counters.record_failure(&e);
            tracing::warn!(instrument = %kind, error = ?e, "pricing request rejected");
            Err(e)
        }
    }
}
