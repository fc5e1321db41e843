//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every addrbook operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the in-memory [`AddressBook`] and the [`BookStore`] behind it
//! - **Dispatches** a raw input line to the matching command handler
//! - **Persists** the whole book after a command that changed it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: No stdout, stderr, or colors
//!
//! ## Generic Over BookStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::config::BookConfig;
use crate::dispatch::{self, Command};
use crate::error::Result;
use crate::store::BookStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct AddressBookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    config: BookConfig,
}

impl<S: BookStore> AddressBookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S, config: BookConfig) -> Result<Self> {
        let book = store.load()?;
        info!(contacts = book.len(), "address book opened");
        Ok(Self {
            store,
            book,
            config,
        })
    }

    /// Runs one input line. The book is saved when the command changed it.
    pub fn execute(&mut self, line: &str, today: NaiveDate) -> Result<commands::CmdResult> {
        let invocation = dispatch::parse(line);
        debug!(command = %invocation.command, args = invocation.args, "dispatching");

        let args = invocation.args;
        let result = match invocation.command {
            Command::Hello => commands::greet::hello(),
            Command::Help => commands::greet::help(),
            Command::Exit => commands::greet::exit(),
            Command::Unknown => commands::greet::unknown(args),
            Command::Add => commands::add::run(&mut self.book, args)?,
            Command::Phone => commands::phone::run(&self.book, args)?,
            Command::Change => commands::change::run(&mut self.book, args)?,
            Command::ShowAll => commands::show::run(&self.book, args, self.config.page_size)?,
            Command::Birthday => commands::birthday::run(&self.book, args)?,
            Command::Find => commands::find::run(&self.book, args)?,
            Command::DaysLeft => commands::days_left::run(&self.book, args, today)?,
            Command::RemovePhone => commands::remove_phone::run(&mut self.book, args)?,
            Command::SetBirthday => commands::set_birthday::run(&mut self.book, args)?,
        };

        if result.modified {
            self.save()?;
        }
        Ok(result)
    }

    /// Writes the whole book back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Where the book is persisted, if the store is file-backed.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.store.location()
    }
}

/// Shows or sets configuration in `data_dir`. Needs no book, so it works even
/// when the book file cannot be read.
pub fn config(data_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(data_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
