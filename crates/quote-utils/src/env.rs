//! Typed access to environment configuration
//!
//! Values are read through [`VarSource`] so configuration loading can be
//! exercised against an in-memory map instead of the process environment.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration variables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// Required variable is unset or blank
    #[error("{0} is not set")]
    Missing(String),

    /// Variable is set but could not be parsed
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// A source of configuration variables
pub trait VarSource {
    /// Raw value for `key`, if any
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl VarSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| (*v).to_string())
    }
}

/// Trimmed value of `key`; blank values count as unset
pub fn optional_var(source: &impl VarSource, key: &str) -> Option<String> {
    source
        .var(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trimmed value of `key`, failing when it is unset or blank
pub fn required_var(source: &impl VarSource, key: &str) -> Result<String, EnvError> {
    optional_var(source, key).ok_or_else(|| EnvError::Missing(key.to_string()))
}

/// Parse the value of `key` when present
pub fn parsed_var<T>(source: &impl VarSource, key: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    optional_var(source, key)
        .map(|value| {
            value.parse::<T>().map_err(|e| EnvError::Invalid {
                key: key.to_string(),
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}

/// Load a `.env` file from the working directory or its parents.
///
/// Returns the path that was loaded. A missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
