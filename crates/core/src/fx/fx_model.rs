use fxdesk_market_data::CurrencyCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fx_errors::FxError;

/// Raw conversion parameters as they arrive from a caller.
///
/// Fields are kept loosely typed so that absence, wrong types and bad values
/// can each be reported with their own error instead of a generic decode
/// failure.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ConversionInput {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub from_currency: Option<Value>,
    #[serde(default)]
    pub to_currency: Option<Value>,
}

/// A validated conversion request.
///
/// Invariants: `amount` is positive and finite, both codes are normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    amount: f64,
    from_currency: CurrencyCode,
    to_currency: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: f64, from_currency: &str, to_currency: &str) -> Result<Self, FxError> {
        let from = CurrencyCode::parse(from_currency);
        let to = CurrencyCode::parse(to_currency);
        let (from_currency, to_currency) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (None, Some(_)) => return Err(FxError::MissingParameter("from_currency".into())),
            (Some(_), None) => return Err(FxError::MissingParameter("to_currency".into())),
            (None, None) => {
                return Err(FxError::MissingParameter(
                    "from_currency, to_currency".into(),
                ))
            }
        };

        validate_amount(amount)?;

        Ok(Self {
            amount,
            from_currency,
            to_currency,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn from_currency(&self) -> &CurrencyCode {
        &self.from_currency
    }

    pub fn to_currency(&self) -> &CurrencyCode {
        &self.to_currency
    }

    /// Source and target are the same currency after normalization.
    pub fn is_identity(&self) -> bool {
        self.from_currency == self.to_currency
    }
}

impl TryFrom<ConversionInput> for ConversionRequest {
    type Error = FxError;

    fn try_from(input: ConversionInput) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = [
            ("amount", &input.amount),
            ("from_currency", &input.from_currency),
            ("to_currency", &input.to_currency),
        ]
        .into_iter()
        .filter(|(_, value)| is_absent(value))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(FxError::MissingParameter(missing.join(", ")));
        }

        let from = text_field("from_currency", &input.from_currency)?;
        let to = text_field("to_currency", &input.to_currency)?;
        let amount = match &input.amount {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| FxError::InvalidAmount(format!("{} is not representable", n)))?,
            _ => return Err(FxError::InvalidAmount("amount must be a number".into())),
        };

        ConversionRequest::new(amount, from, to)
    }
}

/// Absent, null and blank strings all count as not provided.
fn is_absent(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn text_field<'a>(name: &str, value: &'a Option<Value>) -> Result<&'a str, FxError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(FxError::InvalidCurrency(format!("{} must be a string", name))),
    }
}

fn validate_amount(amount: f64) -> Result<(), FxError> {
    if !amount.is_finite() {
        return Err(FxError::InvalidAmount(format!("{} is not a finite number", amount)));
    }
    if amount <= 0.0 {
        return Err(FxError::InvalidAmount(format!("{} must be greater than zero", amount)));
    }
    Ok(())
}

/// Outcome of a conversion, echoing the normalized request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub exchange_rate: f64,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub original_amount: f64,
}

impl ConversionResult {
    /// Same-currency result: rate 1, amount unchanged.
    pub fn identity(request: &ConversionRequest) -> Self {
        Self {
            converted_amount: request.amount,
            exchange_rate: 1.0,
            from_currency: request.from_currency.clone(),
            to_currency: request.to_currency.clone(),
            original_amount: request.amount,
        }
    }

    /// Applies `rate` to the request amount. No rounding is performed.
    pub fn with_rate(request: &ConversionRequest, rate: f64) -> Self {
        Self {
            converted_amount: request.amount * rate,
            exchange_rate: rate,
            from_currency: request.from_currency.clone(),
            to_currency: request.to_currency.clone(),
            original_amount: request.amount,
        }
    }
}
