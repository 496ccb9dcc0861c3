//! Raw text forms, one per instrument, as a caller collects them.
//!
//! Defaults are the values the calculator is pre-filled with. Conversion into
//! a request validates every field; the first bad field fails the whole form.

use crate::errors::PricingError;
use crate::models::black_scholes::OptionRequest;
use crate::models::cost_of_carry::FuturesRequest;
use crate::models::swap::SwapRequest;
use crate::validation::{parse_field, parse_optional_percent, parse_percent_field};
use serde::{Deserialize, Deserializer};

/// A form field as sent by a client: entry text, or a bare JSON number.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(f64),
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(t) => t,
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    FieldValue::deserialize(deserializer).map(String::from)
}

fn optional_text_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<FieldValue>::deserialize(deserializer).map(|v| v.map(String::from))
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OptionForm {
    #[serde(deserialize_with = "text_or_number")]
    pub spot: String,
    #[serde(deserialize_with = "text_or_number")]
    pub strike: String,
    /// Years.
    #[serde(deserialize_with = "text_or_number")]
    pub maturity: String,
    /// Percent.
    #[serde(deserialize_with = "text_or_number")]
    pub rate: String,
    /// Percent.
    #[serde(deserialize_with = "text_or_number")]
    pub volatility: String,
    pub kind: String,
}

impl Default for OptionForm {
    fn default() -> Self {
        Self {
            spot: "100".into(),
            strike: "105".into(),
            maturity: "1".into(),
            rate: "5".into(),
            volatility: "20".into(),
            kind: "call".into(),
        }
    }
}

impl TryFrom<&OptionForm> for OptionRequest {
    type Error = PricingError;

    fn try_from(form: &OptionForm) -> Result<Self, Self::Error> {
        Ok(Self {
            spot: parse_field("spot", &form.spot)?,
            strike: parse_field("strike", &form.strike)?,
            maturity: parse_field("maturity", &form.maturity)?,
            rate: parse_percent_field("rate", &form.rate)?,
            volatility: parse_percent_field("volatility", &form.volatility)?,
            kind: form.kind.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FutureForm {
    #[serde(deserialize_with = "text_or_number")]
    pub spot: String,
    /// Percent.
    #[serde(deserialize_with = "text_or_number")]
    pub rate: String,
    /// Percent; omitted for the financing-only contract.
    #[serde(deserialize_with = "optional_text_or_number")]
    pub carry: Option<String>,
    /// Years.
    #[serde(deserialize_with = "text_or_number")]
    pub maturity: String,
}

impl Default for FutureForm {
    fn default() -> Self {
        Self {
            spot: "100".into(),
            rate: "5".into(),
            carry: None,
            maturity: "1".into(),
        }
    }
}

impl TryFrom<&FutureForm> for FuturesRequest {
    type Error = PricingError;

    fn try_from(form: &FutureForm) -> Result<Self, Self::Error> {
        Ok(Self {
            spot: parse_field("spot", &form.spot)?,
            rate: parse_percent_field("rate", &form.rate)?,
            carry: parse_optional_percent("carry", form.carry.as_deref())?,
            maturity: parse_field("maturity", &form.maturity)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SwapForm {
    #[serde(deserialize_with = "text_or_number")]
    pub notional: String,
    /// Percent.
    #[serde(deserialize_with = "text_or_number")]
    pub fixed_rate: String,
    /// Percent.
    #[serde(deserialize_with = "text_or_number")]
    pub floating_rate: String,
    /// Years.
    #[serde(deserialize_with = "text_or_number")]
    pub tenor: String,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self {
            notional: "1000000".into(),
            fixed_rate: "3".into(),
            floating_rate: "2.5".into(),
            tenor: "5".into(),
        }
    }
}

impl TryFrom<&SwapForm> for SwapRequest {
    type Error = PricingError;

    fn try_from(form: &SwapForm) -> Result<Self, Self::Error> {
        Ok(Self {
            notional: parse_field("notional", &form.notional)?,
            fixed_rate: parse_percent_field("fixed_rate", &form.fixed_rate)?,
            floating_rate: parse_percent_field("floating_rate", &form.floating_rate)?,
            tenor: parse_field("tenor", &form.tenor)?,
        })
    }
}

/// All three pre-filled forms, served to the front-end on load.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DefaultForms {
    pub option: OptionForm,
    pub future: FutureForm,
    pub swap: SwapForm,
}
