use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Name, Phone, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = Record::new(
                    Name::new(format!("Contact{}", i + 1)).unwrap(),
                    Some(Phone::new(format!("+38050000{:04}", i + 1)).unwrap()),
                    None,
                );
                self.store.book.add_record(record).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, birthday: Option<&str>) -> Self {
            let record = Record::new(
                Name::new(name).unwrap(),
                Some(Phone::new(phone).unwrap()),
                birthday.map(|b| b.parse().unwrap()),
            );
            self.store.book.add_record(record).unwrap();
            self
        }
    }
}
