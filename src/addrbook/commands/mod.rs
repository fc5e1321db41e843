//! # Command Layer
//!
//! One module per command. Handlers take the book (and whatever else they
//! need) as plain arguments and return a [`CmdResult`]. They never print and
//! never touch storage; the API layer decides when to save.
//!
//! Mistakes in user input come back as errors, see
//! [`AddrBookError::is_input_error`](crate::error::AddrBookError::is_input_error).

use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod days_left;
pub mod find;
pub mod greet;
pub mod helpers;
pub mod phone;
pub mod remove_phone;
pub mod set_birthday;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Command output proper, printed as is
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Plain,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_records: Vec<Record>,
    /// The book changed and should be saved
    pub modified: bool,
    /// The session should end
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    /// All message text joined by newlines, as a REPL would print it.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
