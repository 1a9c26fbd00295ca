//! Mapping from a selection to provider request parameters

use crate::catalog::Symbol;
use crate::config::BotConfig;
use crate::duration::QuoteDuration;
use std::fmt;

/// Query parameters for one time-series request
#[derive(Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Provider function name
    pub function: &'static str,
    pub symbol: String,
    /// Bar granularity, intraday only
    pub interval: Option<&'static str>,
    pub api_key: String,
}

impl QueryParams {
    /// Build the request for `symbol` at `duration`
    pub fn new(symbol: &Symbol, duration: QuoteDuration, config: &BotConfig) -> Self {
        Self {
            function: duration.provider_function(),
            symbol: symbol.to_string(),
            interval: duration.interval(),
            api_key: config.api_key.clone(),
        }
    }

    /// Query string pairs, in request order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("function", self.function), ("symbol", self.symbol.as_str())];
        if let Some(interval) = self.interval {
            pairs.push(("interval", interval));
        }
        pairs.push(("apikey", self.api_key.as_str()));
        pairs
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParams")
            .field("function", &self.function)
            .field("symbol", &self.symbol)
            .field("interval", &self.interval)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BotConfig {
        BotConfig::builder()
            .bot_token("token")
            .bot_name("Quotes")
            .api_key("demo-key")
            .api_url("https://www.alphavantage.co/query")
            .build()
            .unwrap()
    }

    #[test]
    fn test_mapping_table() {
        let cases = [
            (QuoteDuration::OneMinute, "TIME_SERIES_INTRADAY", Some("1min")),
            (QuoteDuration::FiveMinutes, "TIME_SERIES_INTRADAY", Some("5min")),
            (QuoteDuration::FifteenMinutes, "TIME_SERIES_INTRADAY", Some("15min")),
            (QuoteDuration::ThirtyMinutes, "TIME_SERIES_INTRADAY", Some("30min")),
            (QuoteDuration::SixtyMinutes, "TIME_SERIES_INTRADAY", Some("60min")),
            (QuoteDuration::Daily, "TIME_SERIES_DAILY", None),
            (QuoteDuration::Weekly, "TIME_SERIES_WEEKLY", None),
            (QuoteDuration::Monthly, "TIME_SERIES_MONTHLY", None),
        ];
        assert_eq!(cases.len(), QuoteDuration::ALL.len());

        let config = config();
        let symbol = Symbol::parse("IBM").unwrap();
        for (duration, function, interval) in cases {
            let params = QueryParams::new(&symbol, duration, &config);
            assert_eq!(params.function, function, "{duration:?}");
            assert_eq!(params.interval, interval, "{duration:?}");
            assert_eq!(params.symbol, "IBM");
            assert_eq!(params.api_key, "demo-key");
        }
    }

    #[test]
    fn test_query_pairs() {
        let config = config();
        let symbol = Symbol::parse("IBM").unwrap();

        let intraday = QueryParams::new(&symbol, QuoteDuration::FiveMinutes, &config);
        assert_eq!(
            intraday.query_pairs(),
            vec![
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", "IBM"),
                ("interval", "5min"),
                ("apikey", "demo-key"),
            ]
        );

        let daily = QueryParams::new(&symbol, QuoteDuration::Daily, &config);
        assert!(daily.query_pairs().iter().all(|(k, _)| *k != "interval"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let params = QueryParams::new(&Symbol::parse("IBM").unwrap(), QuoteDuration::Daily, &config());
        let debug = format!("{params:?}");
        assert!(!debug.contains("demo-key"));
        assert!(debug.contains("TIME_SERIES_DAILY"));
    }
}
