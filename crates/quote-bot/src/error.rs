//! Error types for quote bot operations

use thiserror::Error;

/// Text shown for any transport-level fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch stock data. Please try again later.";

/// Quote bot specific errors
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Callback payload could not be decoded into a selection
    #[error("Malformed payload: {0:?}")]
    MalformedPayload(String),

    /// Slash command the bot does not know
    #[error("Unknown command: /{0}")]
    UnknownCommand(String),

    /// Symbol failed validation
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// Duration token is not part of the closed duration set
    #[error("Unknown duration: {0:?}")]
    UnknownDuration(String),

    /// Provider answered with an explicit error field
    #[error("API error: {0}")]
    ApiError(String),

    /// Provider answered with a throttling notice
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Provider answered with a non-2xx status
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Network or HTTP transport error, including timeouts
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Provider answered 2xx with a body that is not JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Time series missing or empty
    #[error("No data available for {symbol} ({series})")]
    EmptyData { symbol: String, series: String },

    /// Provider payload lacks expected structure or fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for quote bot operations
pub type Result<T> = std::result::Result<T, QuoteError>;

impl QuoteError {
    /// Short text shown to the chat user for this error
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedPayload(_) => {
                "Sorry, that selection could not be understood. Please start again.".to_string()
            }
            Self::UnknownCommand(name) => {
                format!("Unknown command /{name}. Use /start to choose a stock.")
            }
            Self::InvalidSymbol(raw) => format!(
                "\"{}\" is not a valid stock symbol. Please choose a stock or type another symbol.",
                raw.trim()
            ),
            Self::UnknownDuration(_) => {
                "That duration is not supported. Please choose a stock again.".to_string()
            }
            Self::ApiError(_) => "Invalid API call. Please try again later.".to_string(),
            Self::RateLimited(_) => {
                "The data provider's request limit was reached. Please try again in a minute."
                    .to_string()
            }
            Self::HttpStatus(_) | Self::NetworkError(_) | Self::InvalidBody(_) => {
                FETCH_FAILED_MESSAGE.to_string()
            }
            Self::EmptyData { .. } => "No data available for the selected duration.".to_string(),
            Self::MalformedResponse(_) => {
                "Received an unexpected response from the data provider.".to_string()
            }
            Self::ConfigError(_) => "The bot is misconfigured.".to_string(),
        }
    }

    /// Whether the error comes from the provider or the network rather than
    /// from user input
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::ApiError(_)
                | Self::RateLimited(_)
                | Self::HttpStatus(_)
                | Self::NetworkError(_)
                | Self::InvalidBody(_)
                | Self::EmptyData { .. }
                | Self::MalformedResponse(_)
        )
    }
}

impl From<quote_utils::EnvError> for QuoteError {
    fn from(err: quote_utils::EnvError) -> Self {
        QuoteError::ConfigError(err.to_string())
    }
}
