//! Provider response formatting
//!
//! Turns a time-series payload into the most recent [`QuoteResult`]. The
//! provider lists points most recent first; that order is kept as is.

use crate::catalog::Symbol;
use crate::duration::QuoteDuration;
use crate::error::{QuoteError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Field names of one time-series point
mod fields {
    pub const OPEN: &str = "1. open";
    pub const HIGH: &str = "2. high";
    pub const LOW: &str = "3. low";
    pub const CLOSE: &str = "4. close";
    pub const VOLUME: &str = "5. volume";
}

/// Top-level keys the provider uses to report problems
const ERROR_KEY: &str = "Error Message";
const THROTTLE_KEYS: [&str; 2] = ["Note", "Information"];

/// The most recent point of a time series
///
/// Values are kept exactly as the provider wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteResult {
    pub symbol: String,
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// Extract the most recent point for `symbol` at `duration` from `body`
pub fn parse_quote(symbol: &Symbol, duration: QuoteDuration, body: &Value) -> Result<QuoteResult> {
    if let Some(message) = body.get(ERROR_KEY) {
        return Err(QuoteError::ApiError(value_text(message)));
    }
    if let Some(notice) = THROTTLE_KEYS.iter().find_map(|key| body.get(*key)) {
        return Err(QuoteError::RateLimited(value_text(notice)));
    }

    let label = duration.series_label();
    let empty = || QuoteError::EmptyData {
        symbol: symbol.to_string(),
        series: label.to_string(),
    };

    let series = match body.get(label) {
        None | Some(Value::Null) => return Err(empty()),
        Some(Value::Object(series)) => series,
        Some(_) => {
            return Err(QuoteError::MalformedResponse(format!(
                "\"{label}\" is not an object"
            )));
        }
    };

    let (date, point) = series.iter().next().ok_or_else(empty)?;
    let point = point.as_object().ok_or_else(|| {
        QuoteError::MalformedResponse(format!("point {date} is not an object"))
    })?;

    let field = |name: &str| {
        point.get(name).map(value_text).ok_or_else(|| {
            QuoteError::MalformedResponse(format!("point {date} has no \"{name}\""))
        })
    };

    Ok(QuoteResult {
        symbol: symbol.to_string(),
        date: date.clone(),
        open: field(fields::OPEN)?,
        high: field(fields::HIGH)?,
        low: field(fields::LOW)?,
        close: field(fields::CLOSE)?,
        volume: field(fields::VOLUME)?,
    })
}

/// Strings verbatim, anything else in its JSON form
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock: {}", self.symbol)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Open: {}", self.open)?;
        writeln!(f, "High: {}", self.high)?;
        writeln!(f, "Low: {}", self.low)?;
        writeln!(f, "Close: {}", self.close)?;
        write!(f, "Volume: {}", self.volume)
    }
}
