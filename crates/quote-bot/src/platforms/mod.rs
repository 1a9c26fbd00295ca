//! Platform-specific bot implementations

pub mod cli;
pub mod telegram;

pub use cli::ConsoleBot;
pub use telegram::{TelegramBot, TelegramConfig};
