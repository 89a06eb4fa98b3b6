use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub price: String,
}

impl Record {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into() }
    }
}

/// Source-A name -> `[price_a]` or `[price_a, price_b]`, in source-A order.
pub type MatchedPrices = IndexMap<String, Vec<String>>;

/// Same keys and order as [`MatchedPrices`], prices parsed to numbers.
pub type NumericPrices = IndexMap<String, Vec<f64>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Competing price is strictly lower than the baseline.
    pub at_risk: Vec<String>,
    /// Competing price is equal to or higher than the baseline.
    pub safe: Vec<String>,
    /// No competing product cleared the similarity threshold.
    pub unmatched: Vec<String>,
    /// Matched, but one of the two prices did not parse.
    pub unpriced: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub source_a: String,
    pub source_b: String,
    pub threshold: f64,
    pub timestamp: String,
    #[serde(flatten)]
    pub classification: Classification,
}
