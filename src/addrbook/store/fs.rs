use super::{BookFile, BookStore};
use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no book file yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddrBookError::Io)?;
        let file: BookFile =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        let book = AddressBook::try_from(file)?;
        debug!(path = %self.path.display(), contacts = book.len(), "loaded book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(&BookFile::from(book))
            .map_err(AddrBookError::Serialization)?;
        fs::write(&self.path, content).map_err(AddrBookError::Io)?;
        debug!(path = %self.path.display(), contacts = book.len(), "saved book");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Name, Phone, Record};
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut ann = Record::new(
            Name::new("Ann").unwrap(),
            Some(Phone::new("+380501111111").unwrap()),
            None,
        );
        ann.add_birthday("07.03.1990".parse().unwrap());
        let bob = Record::new(Name::new("Bob").unwrap(), None, None);
        AddressBook::from_records([ann, bob]).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("contacts.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_order_and_values() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested").join("contacts.json"));
        let book = sample_book();
        store.save(&book).unwrap();

        let loaded = FileStore::new(store.path()).load().unwrap();
        assert_eq!(loaded, book);
        let names: Vec<_> = loaded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn writes_contacts_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.json");
        let mut store = FileStore::new(&path);
        store.save(&sample_book()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["contacts"][0]["name"], "Ann");
        assert_eq!(raw["contacts"][0]["birthday"], "07.03.1990");
        assert!(raw["contacts"][1]["birthday"].is_null());
    }

    #[test]
    fn rejects_malformed_phone_on_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.json");
        fs::write(
            &path,
            r#"{"contacts":[{"name":"Ann","phones":["0501111111"],"birthday":null}]}"#,
        )
        .unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, AddrBookError::Serialization(_)));
    }

    #[test]
    fn rejects_duplicate_names_on_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.json");
        fs::write(
            &path,
            r#"{"contacts":[{"name":"Ann"},{"name":"Ann"}]}"#,
        )
        .unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, AddrBookError::ContactExists(_)));
    }
}
