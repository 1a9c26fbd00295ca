//! Bot response and keyboard types
//!
//! Transport adapters translate these into their own message and button
//! types.

use serde::{Deserialize, Serialize};

/// Bot response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotResponse {
    /// Response content
    pub content: String,

    /// Response type
    pub response_type: ResponseType,

    /// Inline keyboard attached to the message
    pub keyboard: Option<Keyboard>,
}

/// Type of bot response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    /// Plain text
    Text,

    /// Quote summary
    Quote,

    /// Error message
    Error,
}

/// A button carrying an opaque callback payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

/// Rows of buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Button {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

impl Keyboard {
    /// Buttons in reading order
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Total number of buttons
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl BotResponse {
    /// Create a simple text response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Text,
            keyboard: None,
        }
    }

    /// Create a quote response
    pub fn quote(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Quote,
            keyboard: None,
        }
    }

    /// Create an error response
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            response_type: ResponseType::Error,
            keyboard: None,
        }
    }

    /// Attach a keyboard
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}
