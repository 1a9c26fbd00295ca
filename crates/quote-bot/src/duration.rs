//! Reporting durations offered to the user
//!
//! Every provider-facing attribute of a duration is an exhaustive match, so
//! adding a variant without its function, interval and series label does not
//! compile.

use crate::error::{QuoteError, Result};
use std::fmt;

/// Requested reporting granularity for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteDuration {
    /// 1 minute intraday bars
    OneMinute,
    /// 5 minute intraday bars
    FiveMinutes,
    /// 15 minute intraday bars
    FifteenMinutes,
    /// 30 minute intraday bars
    ThirtyMinutes,
    /// 60 minute intraday bars
    SixtyMinutes,
    /// Daily bars
    Daily,
    /// Weekly bars
    Weekly,
    /// Monthly bars
    Monthly,
}

impl QuoteDuration {
    /// All durations, in menu order
    pub const ALL: [QuoteDuration; 8] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::SixtyMinutes,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
    ];

    /// Reduced set for minimal deployments
    pub const MINIMAL: [QuoteDuration; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Token used in callback payloads and configuration
    pub fn token(self) -> &'static str {
        match self {
            Self::OneMinute => "1min",
            Self::FiveMinutes => "5min",
            Self::FifteenMinutes => "15min",
            Self::ThirtyMinutes => "30min",
            Self::SixtyMinutes => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Self::OneMinute => "1 minute",
            Self::FiveMinutes => "5 minutes",
            Self::FifteenMinutes => "15 minutes",
            Self::ThirtyMinutes => "30 minutes",
            Self::SixtyMinutes => "60 minutes",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Provider `function` parameter
    pub fn provider_function(self) -> &'static str {
        match self {
            Self::OneMinute
            | Self::FiveMinutes
            | Self::FifteenMinutes
            | Self::ThirtyMinutes
            | Self::SixtyMinutes => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Provider `interval` parameter; only intraday durations carry one
    pub fn interval(self) -> Option<&'static str> {
        match self {
            Self::OneMinute => Some("1min"),
            Self::FiveMinutes => Some("5min"),
            Self::FifteenMinutes => Some("15min"),
            Self::ThirtyMinutes => Some("30min"),
            Self::SixtyMinutes => Some("60min"),
            Self::Daily | Self::Weekly | Self::Monthly => None,
        }
    }

    /// Key of the time-series object in the provider response
    pub fn series_label(self) -> &'static str {
        match self {
            Self::OneMinute => "Time Series (1min)",
            Self::FiveMinutes => "Time Series (5min)",
            Self::FifteenMinutes => "Time Series (15min)",
            Self::ThirtyMinutes => "Time Series (30min)",
            Self::SixtyMinutes => "Time Series (60min)",
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
        }
    }

    /// Parse a payload token; unknown tokens fail closed
    pub fn from_token(token: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.token() == token)
            .ok_or_else(|| QuoteError::UnknownDuration(token.to_string()))
    }

    /// Parse a comma separated list of tokens, dropping duplicates
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        let mut durations = Vec::new();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let duration = Self::from_token(&token.to_lowercase())?;
            if !durations.contains(&duration) {
                durations.push(duration);
            }
        }
        Ok(durations)
    }
}

impl fmt::Display for QuoteDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for duration in QuoteDuration::ALL {
            assert_eq!(QuoteDuration::from_token(duration.token()).unwrap(), duration);
        }
    }

    #[test]
    fn test_unknown_token() {
        let err = QuoteDuration::from_token("2min").unwrap_err();
        assert!(matches!(err, QuoteError::UnknownDuration(t) if t == "2min"));

        // Tokens are case sensitive on the payload path
        assert!(QuoteDuration::from_token("Daily").is_err());
    }

    #[test]
    fn test_intraday_has_interval() {
        for duration in QuoteDuration::ALL {
            assert_eq!(
                duration.interval().is_some(),
                duration.provider_function() == "TIME_SERIES_INTRADAY"
            );
        }
    }

    #[test]
    fn test_parse_list() {
        let list = QuoteDuration::parse_list(" Daily, weekly,,daily ,monthly").unwrap();
        assert_eq!(list, QuoteDuration::MINIMAL.to_vec());

        assert!(QuoteDuration::parse_list("daily,hourly").is_err());
        assert!(QuoteDuration::parse_list("").unwrap().is_empty());
    }
}
