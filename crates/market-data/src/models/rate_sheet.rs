use std::collections::BTreeMap;

use serde::Serialize;

use super::currency::CurrencyCode;

/// All rates known for one base currency at the time of the lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSheet {
    pub base: CurrencyCode,
    pub rates: BTreeMap<CurrencyCode, f64>,
}

impl RateSheet {
    pub fn new(base: CurrencyCode, rates: BTreeMap<CurrencyCode, f64>) -> Self {
        Self { base, rates }
    }

    /// Rate from `base` to `to`, if quoted.
    pub fn rate(&self, to: &CurrencyCode) -> Option<f64> {
        self.rates.get(to).copied()
    }
}
