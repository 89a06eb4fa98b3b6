use std::io::Write;

use anyhow::Result;

use crate::models::{Classification, Report};

impl Report {
    pub fn new(source_a: &str, source_b: &str, threshold: f64, classification: Classification) -> Self {
        Self {
            source_a: source_a.to_string(),
            source_b: source_b.to_string(),
            threshold,
            timestamp: chrono::Utc::now().to_rfc3339(),
            classification,
        }
    }
}

pub fn write_text<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let c = &report.classification;
    writeln!(out, "Safe Products: {}", c.safe.join(", "))?;
    writeln!(out)?;
    writeln!(out, "At Risk Products: {}", c.at_risk.join(", "))?;
    if !c.unmatched.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unmatched: {}", c.unmatched.join(", "))?;
    }
    if !c.unpriced.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unreadable Prices: {}", c.unpriced.join(", "))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    out.write_all(json.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
