use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Record;
use crate::profile::{PriceText, SourceProfile, strip_prefix_chars, strip_suffix_chars};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    #[default]
    Skip,
    Strict,
}

impl ExtractMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Skip }
    }
}

struct CompiledProfile<'a> {
    profile: &'a SourceProfile,
    scope: Option<Selector>,
    container: Selector,
    name: Selector,
    price: Selector,
}

impl<'a> CompiledProfile<'a> {
    fn new(profile: &'a SourceProfile) -> Result<Self> {
        Ok(Self {
            profile,
            scope: profile.scope_selector.as_deref().map(parse_selector).transpose()?,
            container: parse_selector(&profile.container_selector)?,
            name: parse_selector(&profile.name_selector)?,
            price: parse_selector(&profile.price_selector)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Pulls `(name, price)` records out of a listing page, in document order.
pub fn extract(doc: &Html, profile: &SourceProfile, mode: ExtractMode) -> Result<Vec<Record>> {
    let compiled = CompiledProfile::new(profile)?;

    let containers: Vec<ElementRef<'_>> = match (&compiled.scope, &profile.scope_selector) {
        (Some(scope), Some(scope_text)) => match doc.select(scope).next() {
            Some(root) => root.select(&compiled.container).collect(),
            None => {
                if mode == ExtractMode::Strict {
                    return Err(Error::MissingScope { selector: scope_text.clone() });
                }
                warn!(scope = %scope_text, "no product grid on page");
                Vec::new()
            }
        },
        _ => doc.select(&compiled.container).collect(),
    };

    let mut records = Vec::new();
    for (index, container) in containers.into_iter().enumerate() {
        match extract_one(&compiled, container) {
            Ok(record) => {
                debug!(index, name = %record.name, price = %record.price, "extracted product");
                records.push(record);
            }
            Err(selector) => {
                if mode == ExtractMode::Strict {
                    return Err(Error::MissingElement { index, selector: selector.to_string() });
                }
                warn!(index, selector, "skipping product without expected element");
            }
        }
    }

    debug!(
        container = %profile.container_selector,
        count = records.len(),
        "extraction finished"
    );
    Ok(records)
}

// Err carries the selector that matched nothing.
fn extract_one<'p>(compiled: &'p CompiledProfile<'_>, container: ElementRef<'_>) -> std::result::Result<Record, &'p str> {
    let profile = compiled.profile;

    let name_el = container
        .select(&compiled.name)
        .next()
        .ok_or(profile.name_selector.as_str())?;
    let price_el = container
        .select(&compiled.price)
        .next()
        .ok_or(profile.price_selector.as_str())?;

    let name = full_text(name_el);
    let price = match profile.price_text {
        PriceText::FullText => full_text(price_el),
        PriceText::LastChildText => {
            last_child_text(price_el).ok_or(profile.price_selector.as_str())?
        }
    };

    Ok(Record::new(
        strip_suffix_chars(&name, profile.name_suffix_strip),
        strip_prefix_chars(&price, profile.price_prefix_strip),
    ))
}

fn full_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the last child node, which may be a bare text node.
fn last_child_text(el: ElementRef<'_>) -> Option<String> {
    let last = el.children().last()?;
    match last.value() {
        Node::Text(text) => Some(text.trim().to_string()),
        Node::Element(_) => ElementRef::wrap(last).map(full_text),
        _ => Some(String::new()),
    }
}
