//! Selection state carried through callback payloads
//!
//! There is no server-side session store. The pending selection travels in
//! the button payload and comes back with the callback:
//!
//! - `AAPL` selects a symbol and asks for a duration
//! - `AAPL:daily` selects a symbol and a duration
//!
//! Symbols never contain [`SEPARATOR`], so decoding is unambiguous. The
//! longest payload is `MAX_SYMBOL_LEN + 1 + 7` ASCII bytes.

use crate::catalog::Symbol;
use crate::duration::QuoteDuration;
use crate::error::{QuoteError, Result};
use std::fmt;

/// Joins symbol and duration token in a payload
pub const SEPARATOR: char = ':';

/// Payload of the "enter custom symbol" button
///
/// Lowercase, so it can never equal an encoded selection.
pub const CUSTOM_SYMBOL_PAYLOAD: &str = "~custom";

/// A symbol, optionally with the chosen duration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub symbol: Symbol,
    pub duration: Option<QuoteDuration>,
}

impl Selection {
    /// Symbol chosen, duration pending
    pub fn symbol(symbol: Symbol) -> Self {
        Self {
            symbol,
            duration: None,
        }
    }

    /// Symbol and duration chosen
    pub fn complete(symbol: Symbol, duration: QuoteDuration) -> Self {
        Self {
            symbol,
            duration: Some(duration),
        }
    }

    /// Payload string for this selection
    pub fn encode(&self) -> String {
        match self.duration {
            Some(duration) => format!("{}{SEPARATOR}{}", self.symbol, duration.token()),
            None => self.symbol.to_string(),
        }
    }

    /// Decode a payload produced by [`Selection::encode`].
    ///
    /// Payloads that do not split into one or two parts, or whose symbol part
    /// is invalid, are `MalformedPayload`. A well-formed payload with an
    /// unknown duration token is `UnknownDuration`.
    pub fn decode(payload: &str) -> Result<Self> {
        let mut parts = payload.split(SEPARATOR);
        let symbol_part = parts.next().unwrap_or_default();
        let duration_part = parts.next();
        if parts.next().is_some() {
            return Err(QuoteError::MalformedPayload(payload.to_string()));
        }

        let symbol = Symbol::parse(symbol_part)
            .map_err(|_| QuoteError::MalformedPayload(payload.to_string()))?;

        match duration_part {
            None => Ok(Self::symbol(symbol)),
            Some(token) => Ok(Self::complete(symbol, QuoteDuration::from_token(token)?)),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
