use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use fxdesk_core::{
    chat::ChatReply,
    fx::{ConversionInput, ConversionResult, RateSheet},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /convert_currency`.
///
/// Fields stay untyped until validation so that a missing field, a wrong
/// type and a bad value each get their own error message.
#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct ConvertCurrencyPayload {
    #[schema(value_type = f64, example = 100)]
    pub amount: Option<Value>,
    #[schema(value_type = String, example = "USD")]
    pub from_currency: Option<Value>,
    #[schema(value_type = String, example = "TRY")]
    pub to_currency: Option<Value>,
}

impl From<ConvertCurrencyPayload> for ConversionInput {
    fn from(p: ConvertCurrencyPayload) -> Self {
        Self {
            amount: p.amount,
            from_currency: p.from_currency,
            to_currency: p.to_currency,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ConvertCurrencyResponse {
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub original_amount: f64,
}

impl From<ConversionResult> for ConvertCurrencyResponse {
    fn from(r: ConversionResult) -> Self {
        Self {
            converted_amount: r.converted_amount,
            exchange_rate: r.exchange_rate,
            from_currency: r.from_currency.into(),
            to_currency: r.to_currency.into(),
            original_amount: r.original_amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RateSheetResponse {
    pub base: String,
    pub rates: BTreeMap<String, f64>,
}

impl From<RateSheet> for RateSheetResponse {
    fn from(sheet: RateSheet) -> Self {
        Self {
            base: sheet.base.into(),
            rates: sheet
                .rates
                .into_iter()
                .map(|(code, rate)| (code.into(), rate))
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub rate_source: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
pub struct ChatPayload {
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            success: true,
        }
    }
}
