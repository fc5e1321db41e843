//! # Address Book
//!
//! [`AddressBook`] is the in-memory store: records keyed by contact name, kept
//! in the order they were added. Lookup is a linear scan; books are small.
//!
//! ## Pagination
//!
//! [`AddressBook::pages`] walks the book in fixed-size slices:
//!
//! ```text
//! 5 records, size 2:  [r1 r2] [r3 r4] [r5]
//! ```
//!
//! The last page may be short, and an empty book yields no pages at all.

use crate::error::{AddrBookError, Result};
use crate::model::Record;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from records in order, refusing duplicate names.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut book = Self::new();
        for record in records {
            book.add_record(record)?;
        }
        Ok(book)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Adds a record. Names are unique, so an existing name is refused and
    /// the book is left untouched.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.contains(record.name.as_str()) {
            return Err(AddrBookError::ContactExists(record.name.to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Like [`get`](Self::get), but a missing contact is an error.
    pub fn require(&self, name: &str) -> Result<&Record> {
        self.get(name)
            .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.name.as_str() == name)?;
        Some(self.records.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn pages(&self, size: NonZeroUsize) -> Pages<'_> {
        Pages {
            remaining: &self.records,
            size: size.get(),
        }
    }

    /// Case-insensitive substring search over names, phones and birthdays.
    pub fn find(&self, pattern: &str) -> Vec<&Record> {
        let needle = pattern.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.as_str().to_lowercase().contains(&needle)
                    || r.phones.iter().any(|p| p.as_str().contains(&needle))
                    || r
                        .birthday
                        .is_some_and(|b| b.to_string().contains(&needle))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Iterator over consecutive slices of an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    remaining: &'a [Record],
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.size.min(self.remaining.len());
        let (page, rest) = self.remaining.split_at(take);
        self.remaining = rest;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len().div_ceil(self.size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Name, Phone};

    fn record(name: &str, phone: &str) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Some(Phone::new(phone).unwrap()),
            None,
        )
    }

    fn book_of(n: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..n {
            book.add_record(record(&format!("Contact{}", i + 1), &format!("+3805000000{:02}", i)))
                .unwrap();
        }
        book
    }

    fn page_size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", "+380501111111")).unwrap();
        book.add_record(record("Amy", "+380502222222")).unwrap();
        let names: Vec<_> = book.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn refuses_duplicate_names() {
        let mut book = AddressBook::new();
        book.add_record(record("Amy", "+380501111111")).unwrap();
        let err = book.add_record(record("Amy", "+380502222222")).unwrap_err();
        assert!(matches!(err, AddrBookError::ContactExists(name) if name == "Amy"));
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Amy").unwrap().phones_joined(), "+380501111111");
    }

    #[test]
    fn lookup_is_exact() {
        let book = book_of(2);
        assert!(book.get("Contact1").is_some());
        assert!(book.get("contact1").is_none());
        assert!(matches!(
            book.require("Nobody"),
            Err(AddrBookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn pages_split_with_short_tail() {
        let book = book_of(5);
        let pages: Vec<_> = book.pages(page_size(2)).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 2);
        assert_eq!(pages[2].len(), 1);
        assert_eq!(pages[2][0].name.as_str(), "Contact5");
        assert_eq!(book.pages(page_size(2)).len(), 3);
    }

    #[test]
    fn pages_of_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.pages(page_size(3)).count(), 0);
    }

    #[test]
    fn page_larger_than_book() {
        let book = book_of(2);
        let pages: Vec<_> = book.pages(page_size(10)).collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 2);
    }

    #[test]
    fn find_matches_name_phone_and_birthday() {
        let mut book = AddressBook::new();
        let mut ann = record("Ann", "+380501111111");
        ann.add_birthday("07.03.1990".parse().unwrap());
        book.add_record(ann).unwrap();
        book.add_record(record("Bob", "+380672222222")).unwrap();

        assert_eq!(book.find("aNN").len(), 1);
        assert_eq!(book.find("067")[0].name.as_str(), "Bob");
        assert_eq!(book.find("1990")[0].name.as_str(), "Ann");
        assert!(book.find("xyz").is_empty());
    }

    #[test]
    fn remove_returns_record() {
        let mut book = book_of(3);
        let removed = book.remove("Contact2").unwrap();
        assert_eq!(removed.name.as_str(), "Contact2");
        assert_eq!(book.len(), 2);
        assert!(book.remove("Contact2").is_none());
    }
}
