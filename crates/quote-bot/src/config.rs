//! Configuration for the quote bot

use crate::catalog::SymbolCatalog;
use crate::duration::QuoteDuration;
use crate::error::{QuoteError, Result};
use quote_utils::{ProcessEnv, VarSource, optional_var, parsed_var, required_var};
use std::fmt;
use std::time::Duration;

/// Environment variable names
pub mod vars {
    pub const BOT_TOKEN: &str = "BOT_TOKEN";
    pub const BOT_NAME: &str = "BOT_NAME";
    pub const API_KEY: &str = "STOCK_API_KEY";
    pub const API_URL: &str = "STOCK_API_URL";
    pub const API_TIMEOUT_SECS: &str = "STOCK_API_TIMEOUT_SECS";
    pub const SYMBOLS: &str = "STOCK_SYMBOLS";
    pub const DURATIONS: &str = "STOCK_DURATIONS";
}

/// Default provider request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the quote bot
///
/// Built once at startup and shared by reference; there is no global state.
#[derive(Clone)]
pub struct BotConfig {
    /// Chat transport authentication token
    pub bot_token: String,

    /// Display name used in the welcome text
    pub bot_name: String,

    /// Market-data provider API key
    pub api_key: String,

    /// Market-data provider base URL
    pub api_url: String,

    /// Total timeout of one provider request
    pub request_timeout: Duration,

    /// Symbols offered in the top-level menu
    pub symbols: SymbolCatalog,

    /// Durations offered in the duration menu
    pub durations: Vec<QuoteDuration>,
}

impl BotConfig {
    /// Create a new configuration builder
    pub fn builder() -> BotConfigBuilder {
        BotConfigBuilder::default()
    }

    /// Load and validate the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load and validate the configuration from any variable source
    pub fn from_source(source: &impl VarSource) -> Result<Self> {
        let mut builder = Self::builder()
            .bot_token(required_var(source, vars::BOT_TOKEN)?)
            .bot_name(required_var(source, vars::BOT_NAME)?)
            .api_key(required_var(source, vars::API_KEY)?)
            .api_url(required_var(source, vars::API_URL)?);

        if let Some(secs) = parsed_var::<u64>(source, vars::API_TIMEOUT_SECS)? {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(list) = optional_var(source, vars::SYMBOLS) {
            builder = builder.symbols(SymbolCatalog::parse_list(&list)?);
        }
        if let Some(list) = optional_var(source, vars::DURATIONS) {
            builder = builder.durations(QuoteDuration::parse_list(&list)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            (vars::BOT_TOKEN, &self.bot_token),
            (vars::BOT_NAME, &self.bot_name),
            (vars::API_KEY, &self.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(QuoteError::ConfigError(format!("{name} must not be empty")));
            }
        }

        let url = url::Url::parse(&self.api_url).map_err(|e| {
            QuoteError::ConfigError(format!("{} is not a valid URL: {e}", vars::API_URL))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuoteError::ConfigError(format!(
                "{} must use http or https",
                vars::API_URL
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(QuoteError::ConfigError(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        if self.symbols.is_empty() {
            return Err(QuoteError::ConfigError(format!(
                "{} must list at least one symbol",
                vars::SYMBOLS
            )));
        }

        if self.durations.is_empty() {
            return Err(QuoteError::ConfigError(
                "at least one duration must be offered".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("bot_name", &self.bot_name)
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("symbols", &self.symbols.len())
            .field("durations", &self.durations)
            .finish()
    }
}

/// Builder for BotConfig
#[derive(Debug, Default)]
pub struct BotConfigBuilder {
    bot_token: Option<String>,
    bot_name: Option<String>,
    api_key: Option<String>,
    api_url: Option<String>,
    request_timeout: Option<Duration>,
    symbols: Option<SymbolCatalog>,
    durations: Option<Vec<QuoteDuration>>,
}

impl BotConfigBuilder {
    /// Set the chat transport token
    pub fn bot_token(mut self, token: impl Into<String>) -> Self {
        self.bot_token = Some(token.into());
        self
    }

    /// Set the bot display name
    pub fn bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = Some(name.into());
        self
    }

    /// Set the provider API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the provider base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the provider request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the symbol catalog
    pub fn symbols(mut self, symbols: SymbolCatalog) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Set the offered durations
    pub fn durations(mut self, durations: Vec<QuoteDuration>) -> Self {
        self.durations = Some(durations);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<BotConfig> {
        let missing = |name: &str| QuoteError::ConfigError(format!("{name} not set"));

        let config = BotConfig {
            bot_token: self.bot_token.ok_or_else(|| missing(vars::BOT_TOKEN))?,
            bot_name: self.bot_name.ok_or_else(|| missing(vars::BOT_NAME))?,
            api_key: self.api_key.ok_or_else(|| missing(vars::API_KEY))?,
            api_url: self.api_url.ok_or_else(|| missing(vars::API_URL))?,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            symbols: self.symbols.unwrap_or_default(),
            durations: self
                .durations
                .unwrap_or_else(|| QuoteDuration::ALL.to_vec()),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (vars::BOT_TOKEN, "123:abc"),
            (vars::BOT_NAME, "Ticker Bot"),
            (vars::API_KEY, "secret-key"),
            (vars::API_URL, "https://www.alphavantage.co/query"),
        ])
    }

    #[test]
    fn test_from_source_defaults() {
        let config = BotConfig::from_source(&required()).unwrap();
        assert_eq!(config.bot_name, "Ticker Bot");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.symbols, SymbolCatalog::default());
        assert_eq!(config.durations, QuoteDuration::ALL.to_vec());
    }

    #[test]
    fn test_from_source_overrides() {
        let mut source = required();
        source.insert(vars::API_TIMEOUT_SECS, "3");
        source.insert(vars::SYMBOLS, "ibm, msft");
        source.insert(vars::DURATIONS, "daily,weekly,monthly");

        let config = BotConfig::from_source(&source).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.durations, QuoteDuration::MINIMAL.to_vec());
    }

    #[test]
    fn test_missing_required_values() {
        for key in [vars::BOT_TOKEN, vars::BOT_NAME, vars::API_KEY, vars::API_URL] {
            let mut source = required();
            source.remove(key);
            let err = BotConfig::from_source(&source).unwrap_err();
            assert!(
                matches!(&err, QuoteError::ConfigError(msg) if msg.contains(key)),
                "{key}: {err}"
            );
        }

        let mut source = required();
        source.insert(vars::BOT_TOKEN, "  ");
        assert!(BotConfig::from_source(&source).is_err());
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            (vars::API_URL, "not a url"),
            (vars::API_URL, "ftp://example.com/query"),
            (vars::API_TIMEOUT_SECS, "0"),
            (vars::API_TIMEOUT_SECS, "ten"),
            (vars::SYMBOLS, "AAPL,BAD:SYMBOL"),
            (vars::DURATIONS, "daily,hourly"),
            (vars::DURATIONS, " , "),
        ];
        for (key, value) in cases {
            let mut source = required();
            source.insert(key, value);
            assert!(
                BotConfig::from_source(&source).is_err(),
                "{key}={value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_symbol_list_is_rejected() {
        let mut source = required();
        source.insert(vars::SYMBOLS, " , ");
        let err = BotConfig::from_source(&source).unwrap_err();
        assert!(
            matches!(&err, QuoteError::ConfigError(msg) if msg.contains(vars::SYMBOLS)),
            "{err}"
        );
    }

    #[test]
    fn test_builder() {
        let config = BotConfig::builder()
            .bot_token("t")
            .bot_name("n")
            .api_key("k")
            .api_url("http://localhost:8080/query")
            .request_timeout(Duration::from_secs(60))
            .durations(vec![QuoteDuration::Daily])
            .build()
            .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.durations, vec![QuoteDuration::Daily]);

        assert!(BotConfig::builder().bot_name("n").build().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = BotConfig::from_source(&required()).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("123:abc"));
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("Ticker Bot"));
    }
}
