use indexmap::IndexMap;
use tracing::{debug, info};

use crate::matcher::find_best_match;
use crate::models::{MatchedPrices, Record};

/// Keys every source-A product by name and, when a source-B product matches,
/// appends its price after the source-A one.
///
/// Duplicate names within a source keep their first position but take the
/// last price seen.
pub fn compare(records_a: &[Record], records_b: &[Record], threshold: f64) -> MatchedPrices {
    let mut matched = MatchedPrices::new();
    for record in records_a {
        matched.insert(record.name.clone(), vec![record.price.clone()]);
    }

    let mut prices_b: IndexMap<&str, &str> = IndexMap::new();
    for record in records_b {
        prices_b.insert(record.name.as_str(), record.price.as_str());
    }
    let names_b: Vec<&str> = prices_b.keys().copied().collect();

    let mut hits = 0usize;
    for (name, prices) in matched.iter_mut() {
        match find_best_match(name, &names_b, threshold) {
            Some(found) => {
                debug!(name = %name, matched = found, "matched product");
                prices.push(prices_b[found].to_string());
                hits += 1;
            }
            None => debug!(name = %name, "no match above threshold"),
        }
    }

    info!(products = matched.len(), matched = hits, threshold, "comparison finished");
    matched
}
