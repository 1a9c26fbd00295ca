//! Bot platform interfaces
//!
//! Platform-agnostic responses, menus and quote formatting

pub mod formatter;
pub mod interface;
pub mod menu;

pub use formatter::{QuoteResult, parse_quote};
pub use interface::{BotResponse, Button, Keyboard, ResponseType};
pub use menu::{CUSTOM_SYMBOL_LABEL, duration_menu, symbol_menu};
