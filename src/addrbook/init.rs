use crate::api::AddressBookApi;
use crate::config::BookConfig;
use crate::error::{AddrBookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "ADDRBOOK_HOME";

/// Picks the data directory: `$ADDRBOOK_HOME` if set, the platform data dir
/// otherwise.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddrBookError::Config("Could not determine data directory".into()))
}

/// Where the book file lives: an explicit override, or `data_file` from the
/// config resolved against the data directory.
pub fn book_path(data_dir: &Path, config: &BookConfig, file_override: Option<&Path>) -> PathBuf {
    match file_override {
        Some(path) => path.to_path_buf(),
        None => data_dir.join(&config.data_file),
    }
}

/// Resolves the book path from the config in `data_dir` without reading the
/// book itself.
pub fn locate(data_dir: &Path, file_override: Option<&Path>) -> Result<PathBuf> {
    let config = BookConfig::load(data_dir)?;
    Ok(book_path(data_dir, &config, file_override))
}

pub fn initialize(
    data_dir: &Path,
    file_override: Option<&Path>,
) -> Result<AddressBookApi<FileStore>> {
    let config = BookConfig::load(data_dir)?;
    let path = book_path(data_dir, &config, file_override);
    debug!(data_dir = %data_dir.display(), book = %path.display(), "initializing");

    AddressBookApi::open(FileStore::new(path), config)
}
