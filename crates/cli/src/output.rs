use anyhow::{Context, Result};
use clap::ValueEnum;
use numrepr_binary64::Binary64;
use serde::Serialize;

/// How `numrepr bits` prints each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// 64 digits back to back
    #[default]
    Plain,
    /// Sign, exponent and mantissa separated by spaces
    Grouped,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Serialize)]
struct BitsRecord {
    value: f64,
    sign: char,
    exponent: String,
    mantissa: String,
    bits: String,
}

impl From<(f64, Binary64)> for BitsRecord {
    fn from((value, b): (f64, Binary64)) -> Self {
        Self {
            value,
            sign: b.sign().digit(),
            exponent: b.exponent_bits(),
            mantissa: b.mantissa_bits(),
            bits: b.to_string(),
        }
    }
}

pub fn render_bits(value: f64, layout: Layout) -> Result<String> {
    let b = Binary64::decompose(value).with_context(|| format!("failed to encode {value}"))?;

    Ok(match layout {
        Layout::Plain => b.to_string(),
        Layout::Grouped => format!("{b:#}"),
        Layout::Json => serde_json::to_string(&BitsRecord::from((value, b)))?,
    })
}
