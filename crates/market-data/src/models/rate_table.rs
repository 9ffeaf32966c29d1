use std::collections::{BTreeMap, HashMap};

use super::currency::CurrencyCode;
use crate::errors::MarketDataError;

/// Reference rates, one row per source currency.
///
/// Rows are independent: `USD -> TRY` and `TRY -> USD` are separate entries
/// and are not kept mutually inverse.
const REFERENCE_RATES: &[(&str, &[(&str, f64)])] = &[
    ("USD", &[("TRY", 32.50), ("EUR", 0.92), ("GBP", 0.79)]),
    ("EUR", &[("TRY", 35.30), ("USD", 1.09), ("GBP", 0.86)]),
    ("TRY", &[("USD", 0.031), ("EUR", 0.028), ("GBP", 0.024)]),
    ("GBP", &[("USD", 1.27), ("EUR", 1.16), ("TRY", 41.25)]),
];

/// Ordered-pair exchange rate table.
///
/// Built once and never mutated afterwards; share it behind an `Arc` for
/// concurrent read-only lookups. Lookups are direct only: a missing pair is
/// missing even when its inverse is present.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, HashMap<CurrencyCode, f64>>,
}

impl RateTable {
    /// The hard-coded reference table.
    pub fn reference() -> Self {
        let mut rates: HashMap<CurrencyCode, HashMap<CurrencyCode, f64>> = HashMap::new();
        for (from, row) in REFERENCE_RATES {
            let entries = rates.entry(CurrencyCode::from_static(*from)).or_default();
            for (to, rate) in row.iter() {
                entries.insert(CurrencyCode::from_static(*to), *rate);
            }
        }
        Self { rates }
    }

    /// Builds a table from `(from, to, rate)` triples.
    ///
    /// Codes are normalized. Blank codes, self-pairs, duplicate pairs and
    /// rates that are not positive and finite are rejected.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, MarketDataError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut rates: HashMap<CurrencyCode, HashMap<CurrencyCode, f64>> = HashMap::new();

        for (from, to, rate) in pairs {
            let (from, to) = match (
                CurrencyCode::parse(from.as_ref()),
                CurrencyCode::parse(to.as_ref()),
            ) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    return Err(MarketDataError::InvalidRateTable(
                        "currency codes must not be blank".to_string(),
                    ))
                }
            };

            if from == to {
                return Err(MarketDataError::InvalidRateTable(format!(
                    "self pair {}/{} is not allowed",
                    from, to
                )));
            }

            if !rate.is_finite() || rate <= 0.0 {
                return Err(MarketDataError::InvalidRateTable(format!(
                    "rate for {}/{} must be positive, got {}",
                    from, to, rate
                )));
            }

            let row = rates.entry(from.clone()).or_default();
            if row.insert(to.clone(), rate).is_some() {
                return Err(MarketDataError::InvalidRateTable(format!(
                    "duplicate pair {}/{}",
                    from, to
                )));
            }
        }

        Ok(Self { rates })
    }

    /// Direct rate for the ordered pair, if present.
    pub fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Option<f64> {
        self.rates.get(from)?.get(to).copied()
    }

    /// Every rate quoted against `base`, sorted by target code.
    pub fn row(&self, base: &CurrencyCode) -> BTreeMap<CurrencyCode, f64> {
        self.rates
            .get(base)
            .map(|row| row.iter().map(|(to, rate)| (to.clone(), *rate)).collect())
            .unwrap_or_default()
    }

    /// Number of ordered pairs in the table.
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CurrencyCode {
        CurrencyCode::parse(raw).unwrap()
    }

    #[test]
    fn test_reference_table_contents() {
        let table = RateTable::reference();
        assert_eq!(table.len(), 12);
        assert_eq!(table.rate(&code("USD"), &code("TRY")), Some(32.50));
        assert_eq!(table.rate(&code("GBP"), &code("TRY")), Some(41.25));
        assert_eq!(table.rate(&code("TRY"), &code("EUR")), Some(0.028));
    }

    #[test]
    fn test_reference_table_is_not_inverse_consistent() {
        let table = RateTable::reference();
        let usd_try = table.rate(&code("USD"), &code("TRY")).unwrap();
        let try_usd = table.rate(&code("TRY"), &code("USD")).unwrap();
        assert_ne!(usd_try * try_usd, 1.0);
    }

    #[test]
    fn test_no_self_rates() {
        let table = RateTable::reference();
        assert_eq!(table.rate(&code("USD"), &code("USD")), None);
    }

    #[test]
    fn test_missing_pair_does_not_fall_back_to_inverse() {
        let table = RateTable::from_pairs([("USD", "JPY", 150.0)]).unwrap();
        assert_eq!(table.rate(&code("USD"), &code("JPY")), Some(150.0));
        assert_eq!(table.rate(&code("JPY"), &code("USD")), None);
    }

    #[test]
    fn test_from_pairs_normalizes_codes() {
        let table = RateTable::from_pairs([("usd", " chf", 0.88)]).unwrap();
        assert_eq!(table.rate(&code("USD"), &code("CHF")), Some(0.88));
    }

    #[test]
    fn test_from_pairs_rejects_non_positive_rates() {
        assert!(matches!(
            RateTable::from_pairs([("USD", "EUR", 0.0)]),
            Err(MarketDataError::InvalidRateTable(_))
        ));
        assert!(matches!(
            RateTable::from_pairs([("USD", "EUR", -1.0)]),
            Err(MarketDataError::InvalidRateTable(_))
        ));
        assert!(matches!(
            RateTable::from_pairs([("USD", "EUR", f64::NAN)]),
            Err(MarketDataError::InvalidRateTable(_))
        ));
    }

    #[test]
    fn test_from_pairs_rejects_self_and_duplicate_pairs() {
        assert!(RateTable::from_pairs([("USD", "usd", 1.0)]).is_err());
        assert!(RateTable::from_pairs([("USD", "EUR", 0.9), ("usd", "eur", 0.91)]).is_err());
    }

    #[test]
    fn test_row_is_sorted_and_empty_for_unknown_base() {
        let table = RateTable::reference();
        let row = table.row(&code("USD"));
        let targets: Vec<&str> = row.keys().map(CurrencyCode::as_str).collect();
        assert_eq!(targets, vec!["EUR", "GBP", "TRY"]);
        assert!(table.row(&code("JPY")).is_empty());
    }
}
