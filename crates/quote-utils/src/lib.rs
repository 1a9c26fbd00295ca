//! Shared utilities for quote-bot
//!
//! This crate provides the ambient pieces used across the workspace:
//! tracing setup and typed access to environment configuration.

pub mod env;
pub mod logging;

pub use env::{EnvError, ProcessEnv, VarSource, load_dotenv, optional_var, parsed_var, required_var};
pub use logging::{LogFormat, init_tracing};
