use serde::{Deserialize, Serialize};

/// How the price string is read out of the price element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceText {
    /// All descendant text of the element.
    #[default]
    FullText,
    /// Text of the element's last child node only, e.g. the trailing amount
    /// in `<p><s>R 250.00</s> Sale price R 199.00</p>`.
    LastChildText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceProfile {
    /// When set, only containers inside the first element matching this are read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_selector: Option<String>,
    pub container_selector: String,
    pub name_selector: String,
    pub price_selector: String,
    /// Characters dropped from the end of the trimmed name.
    #[serde(default)]
    pub name_suffix_strip: usize,
    /// Characters dropped from the start of the trimmed price.
    #[serde(default)]
    pub price_prefix_strip: usize,
    #[serde(default)]
    pub price_text: PriceText,
}

impl SourceProfile {
    /// speedcubes.co.za category pages. Titles carry a 3-character size code
    /// and prices a single currency symbol.
    pub fn speedcubes() -> Self {
        Self {
            scope_selector: None,
            container_selector: "article".into(),
            name_selector: ".h3.product-title".into(),
            price_selector: ".price".into(),
            name_suffix_strip: 3,
            price_prefix_strip: 1,
            price_text: PriceText::FullText,
        }
    }

    /// cubeco.co.za collection pages. Prices render as `R 199.00` after any
    /// struck-through original price.
    pub fn cubeco() -> Self {
        Self {
            scope_selector: Some(".grid-uniform.grid-link__container".into()),
            container_selector: ".grid__item.wide--one-fifth.large--one-quarter.medium-down--one-half".into(),
            name_selector: ".grid-link__title".into(),
            price_selector: ".grid-link__meta".into(),
            name_suffix_strip: 0,
            price_prefix_strip: 2,
            price_text: PriceText::LastChildText,
        }
    }
}

// Both strips count chars, not bytes.
pub fn strip_suffix_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

pub fn strip_prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
