use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::models::{Classification, MatchedPrices, NumericPrices};

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '¢', '₩', '₽'];

/// Parses a display price such as `1,234.50`, `$1,234.50` or ` 12.00`.
///
/// Anything that still fails to parse comes back as NaN rather than an error.
pub fn normalize_price(price: &str) -> f64 {
    let cleaned: String = price.chars().filter(|&c| c != ',').collect();
    let cleaned = cleaned.trim();
    let cleaned = cleaned.strip_prefix(CURRENCY_SYMBOLS).unwrap_or(cleaned).trim_start();

    // `f64::from_str` also accepts "inf" and "NaN"; those are not prices.
    if !cleaned.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) {
        return f64::NAN;
    }
    cleaned.parse().unwrap_or(f64::NAN)
}

pub fn to_numeric(matched: &MatchedPrices) -> NumericPrices {
    matched
        .iter()
        .map(|(name, prices)| {
            let values = prices.iter().map(|p| normalize_price(p)).collect();
            (name.clone(), values)
        })
        .collect()
}

/// Splits matched products into at-risk and safe in one pass over the prices.
///
/// A product is at risk when its baseline price is strictly above the
/// competing one; equal or higher competing prices are safe. Products with
/// an unparseable price land in neither list.
pub fn classify(matched: &MatchedPrices) -> Classification {
    let numeric = to_numeric(matched);
    let mut result = Classification::default();

    for (name, values) in &numeric {
        let (baseline, competing) = match values.as_slice() {
            [baseline, competing, ..] => (*baseline, *competing),
            _ => {
                result.unmatched.push(name.clone());
                continue;
            }
        };

        match baseline.partial_cmp(&competing) {
            Some(Ordering::Greater) => {
                debug!(name = %name, baseline, competing, "at risk");
                result.at_risk.push(name.clone());
            }
            Some(Ordering::Less | Ordering::Equal) => {
                debug!(name = %name, baseline, competing, "safe");
                result.safe.push(name.clone());
            }
            None => {
                warn!(name = %name, prices = ?matched[name], "unparseable price, excluding product");
                result.unpriced.push(name.clone());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(entries: &[(&str, &[&str])]) -> MatchedPrices {
        entries
            .iter()
            .map(|(name, prices)| (name.to_string(), prices.iter().map(|p| p.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_normalize_price() {
        assert_eq!(normalize_price("$1,234.50"), 1234.50);
        assert_eq!(normalize_price("1,234.50"), 1234.50);
        assert_eq!(normalize_price("12"), 12.0);
        assert_eq!(normalize_price("€ 9.99"), 9.99);
    }

    #[test]
    fn test_normalize_second_source_price() {
        let stripped = crate::profile::strip_prefix_chars("SA 12.00", 2);
        assert_eq!(normalize_price(stripped), 12.00);
    }

    #[test]
    fn test_normalize_price_malformed_is_nan() {
        assert!(normalize_price("").is_nan());
        assert!(normalize_price("Sold out").is_nan());
        assert!(normalize_price("R 199.00").is_nan());
        assert!(normalize_price("inf").is_nan());
        assert!(normalize_price("NaN").is_nan());
        assert!(normalize_price("12.00 each").is_nan());
    }

    #[test]
    fn test_to_numeric_preserves_order_and_length() {
        let input = matched(&[("B", &["2,000.00", "1,999.99"]), ("A", &["5"])]);
        let numeric = to_numeric(&input);
        let keys: Vec<&str> = numeric.keys().map(String::as_str).collect();
        assert_eq!(keys, ["B", "A"]);
        assert_eq!(numeric["B"], vec![2000.0, 1999.99]);
        assert_eq!(numeric["A"], vec![5.0]);
    }

    #[test]
    fn test_classify_competitor_cheaper_is_at_risk() {
        let result = classify(&matched(&[("Widget Pro ", &["10.00", "8.00"])]));
        assert_eq!(result.at_risk, vec!["Widget Pro "]);
        assert!(result.safe.is_empty());
    }

    #[test]
    fn test_classify_equal_prices_are_safe() {
        let result = classify(&matched(&[("Gan 356", &["150.00", "150.00"])]));
        assert!(result.at_risk.is_empty());
        assert_eq!(result.safe, vec!["Gan 356"]);
    }

    #[test]
    fn test_classify_competitor_dearer_is_safe() {
        let result = classify(&matched(&[("Skewb", &["99.00", "120.00"])]));
        assert_eq!(result.safe, vec!["Skewb"]);
    }

    #[test]
    fn test_classify_unmatched_excluded() {
        let result = classify(&matched(&[("Megaminx", &["300.00"])]));
        assert!(result.at_risk.is_empty());
        assert!(result.safe.is_empty());
        assert_eq!(result.unmatched, vec!["Megaminx"]);
    }

    #[test]
    fn test_classify_unparseable_excluded() {
        let result = classify(&matched(&[
            ("Broken A", &["n/a", "10.00"]),
            ("Broken B", &["10.00", ""]),
        ]));
        assert!(result.at_risk.is_empty());
        assert!(result.safe.is_empty());
        assert_eq!(result.unpriced, vec!["Broken A", "Broken B"]);
    }

    #[test]
    fn test_classify_partitions_matched_entries() {
        let input = matched(&[
            ("One", &["10", "9"]),
            ("Two", &["10", "10"]),
            ("Three", &["1,000", "999"]),
            ("Four", &["5"]),
            ("Five", &["5", "x"]),
            ("Six", &["3", "4"]),
        ]);
        let result = classify(&input);

        assert_eq!(result.at_risk, vec!["One", "Three"]);
        assert_eq!(result.safe, vec!["Two", "Six"]);
        assert!(result.at_risk.iter().all(|n| !result.safe.contains(n)));

        let numeric = to_numeric(&input);
        let mut expected: Vec<&String> = numeric
            .iter()
            .filter(|(_, v)| v.len() >= 2 && v.iter().all(|x| !x.is_nan()))
            .map(|(k, _)| k)
            .collect();
        expected.sort();
        let mut covered: Vec<&String> = result.at_risk.iter().chain(&result.safe).collect();
        covered.sort();
        assert_eq!(covered, expected);
    }
}
