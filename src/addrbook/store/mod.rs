//! # Storage Layer
//!
//! The [`BookStore`] trait hides where an [`AddressBook`] lives between runs.
//! Persistence is whole-book: `load` reads everything, `save` rewrites
//! everything. There is no partial update and no journal.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file
//! - [`memory::InMemoryStore`]: keeps a copy in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "Ann", "phones": ["+380501111111"], "birthday": "07.03.1990" },
//!     { "name": "Bob", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! The array keeps insertion order. Every value is validated again on load.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Read the whole book. A store with nothing saved yet yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace whatever was saved with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the book is kept, for stores backed by a file.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}

/// On-disk shape of a book.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BookFile {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl From<&AddressBook> for BookFile {
    fn from(book: &AddressBook) -> Self {
        Self {
            contacts: book.records().to_vec(),
        }
    }
}

impl TryFrom<BookFile> for AddressBook {
    type Error = crate::error::AddrBookError;

    fn try_from(file: BookFile) -> Result<Self> {
        AddressBook::from_records(file.contacts)
    }
}
