//! Ticker symbols and the symbol catalog

use crate::error::{QuoteError, Result};
use crate::selection::SEPARATOR;
use std::fmt;

/// Longest accepted symbol, in bytes
pub const MAX_SYMBOL_LEN: usize = 16;

/// Built-in catalog shown in the top-level menu
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "META", "NVDA", "JPM", "GS", "BAC", "WFC", "C",
    "JNJ", "PFE", "MRK", "UNH", "ABBV", "PG", "KO", "PEP", "NKE", "WMT", "XOM", "CVX", "COP",
    "BP", "DUK", "D", "NEE", "SO", "ED", "HD", "COST", "TGT", "T", "VZ", "CMCSA", "DIS", "NFLX",
];

/// An uppercase ticker symbol
///
/// Never empty, printable ASCII only, no whitespace and never containing the
/// payload separator, so it can be embedded in a callback payload unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Trim, uppercase and validate raw input
    pub fn parse(raw: &str) -> Result<Self> {
        let symbol = raw.trim().to_ascii_uppercase();

        let valid = !symbol.is_empty()
            && symbol.len() <= MAX_SYMBOL_LEN
            && symbol.chars().all(|c| c.is_ascii_graphic() && c != SEPARATOR);

        if valid {
            Ok(Self(symbol))
        } else {
            Err(QuoteError::InvalidSymbol(raw.to_string()))
        }
    }

    /// The symbol text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of symbols offered in the top-level menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| Symbol(s.to_string())).collect(),
        }
    }
}

impl SymbolCatalog {
    /// Build a catalog from raw symbols, keeping first occurrences only
    pub fn new<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<Symbol> = Vec::new();
        for item in raw {
            let symbol = Symbol::parse(item.as_ref())?;
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        Ok(Self { symbols })
    }

    /// Parse a comma separated list, ignoring blank entries
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(list.split(',').filter(|s| !s.trim().is_empty()))
    }

    /// Symbols in menu order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
