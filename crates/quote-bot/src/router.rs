//! Session router
//!
//! Classifies one inbound event into the next step of the conversation.
//! The router keeps no state: everything it needs travels in the event,
//! so routing is a pure function of its input.

use crate::catalog::Symbol;
use crate::duration::QuoteDuration;
use crate::error::QuoteError;
use crate::selection::{CUSTOM_SYMBOL_PAYLOAD, Selection};

/// An event delivered by the chat transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// Any other slash command
    UnknownCommand(String),
    /// A button press carrying its payload
    Callback(String),
    /// Free text typed by the user
    Text(String),
}

impl InboundEvent {
    /// Classify a text message
    ///
    /// Commands may carry a `@botname` suffix and trailing arguments, both
    /// ignored.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        let Some(command) = text.strip_prefix('/') else {
            return Self::Text(text.to_string());
        };

        let name = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match name.as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            _ => Self::UnknownCommand(name),
        }
    }
}

/// The next step of the conversation
#[derive(Debug)]
pub enum Route {
    /// Show the welcome text and the symbol menu
    Welcome,
    /// Show usage and the symbol menu
    Help,
    /// Ask the user to type a symbol
    PromptCustomSymbol,
    /// Show the duration menu for a symbol
    DurationMenu { symbol: Symbol, custom: bool },
    /// Fetch and show a quote
    FetchQuote {
        symbol: Symbol,
        duration: QuoteDuration,
    },
    /// Input could not be used; tell the user and show the symbol menu
    Rejected(QuoteError),
}

/// Decide what to do with `event`
pub fn route(event: &InboundEvent) -> Route {
    match event {
        InboundEvent::Start => Route::Welcome,
        InboundEvent::Help => Route::Help,
        InboundEvent::UnknownCommand(name) => {
            Route::Rejected(QuoteError::UnknownCommand(name.clone()))
        }
        InboundEvent::Callback(payload) => route_callback(payload),
        InboundEvent::Text(text) => match Symbol::parse(text) {
            Ok(symbol) => Route::DurationMenu {
                symbol,
                custom: true,
            },
            Err(err) => Route::Rejected(err),
        },
    }
}

fn route_callback(payload: &str) -> Route {
    if payload == CUSTOM_SYMBOL_PAYLOAD {
        return Route::PromptCustomSymbol;
    }

    match Selection::decode(payload) {
        Ok(Selection {
            symbol,
            duration: None,
        }) => Route::DurationMenu {
            symbol,
            custom: false,
        },
        Ok(Selection {
            symbol,
            duration: Some(duration),
        }) => Route::FetchQuote { symbol, duration },
        Err(err) => Route::Rejected(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback(payload: &str) -> Route {
        route(&InboundEvent::Callback(payload.to_string()))
    }

    #[test]
    fn test_from_text() {
        assert_eq!(InboundEvent::from_text("/start"), InboundEvent::Start);
        assert_eq!(InboundEvent::from_text(" /START@QuoteBot "), InboundEvent::Start);
        assert_eq!(InboundEvent::from_text("/help me"), InboundEvent::Help);
        assert_eq!(
            InboundEvent::from_text("/price AAPL"),
            InboundEvent::UnknownCommand("price".to_string())
        );
        assert_eq!(
            InboundEvent::from_text("  ibm "),
            InboundEvent::Text("ibm".to_string())
        );
    }

    #[test]
    fn test_start_and_help() {
        assert!(matches!(route(&InboundEvent::Start), Route::Welcome));
        assert!(matches!(route(&InboundEvent::Help), Route::Help));
        assert!(matches!(
            route(&InboundEvent::UnknownCommand("price".to_string())),
            Route::Rejected(QuoteError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_symbol_callback() {
        match callback("AAPL") {
            Route::DurationMenu { symbol, custom } => {
                assert_eq!(symbol.as_str(), "AAPL");
                assert!(!custom);
            }
            other => panic!("Expected DurationMenu, got {other:?}"),
        }

        // Symbols outside the catalog are accepted too
        assert!(matches!(callback("BRK.B"), Route::DurationMenu { .. }));
    }

    #[test]
    fn test_duration_callback() {
        match callback("NVDA:60min") {
            Route::FetchQuote { symbol, duration } => {
                assert_eq!(symbol.as_str(), "NVDA");
                assert_eq!(duration, QuoteDuration::SixtyMinutes);
            }
            other => panic!("Expected FetchQuote, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_symbol_callback() {
        assert!(matches!(callback(CUSTOM_SYMBOL_PAYLOAD), Route::PromptCustomSymbol));
    }

    #[test]
    fn test_unknown_duration_fails_closed() {
        assert!(matches!(
            callback("AAPL:2min"),
            Route::Rejected(QuoteError::UnknownDuration(_))
        ));
    }

    #[test]
    fn test_malformed_callbacks() {
        for payload in ["", "AAPL:daily:x", ":daily", "A B"] {
            assert!(
                matches!(callback(payload), Route::Rejected(QuoteError::MalformedPayload(_))),
                "{payload:?}"
            );
        }
    }

    #[test]
    fn test_free_text_symbol() {
        match route(&InboundEvent::Text("  tsla ".to_string())) {
            Route::DurationMenu { symbol, custom } => {
                assert_eq!(symbol.as_str(), "TSLA");
                assert!(custom);
            }
            other => panic!("Expected DurationMenu, got {other:?}"),
        }

        assert!(matches!(
            route(&InboundEvent::Text("what is apple at".to_string())),
            Route::Rejected(QuoteError::InvalidSymbol(_))
        ));
    }
}
