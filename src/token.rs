//! Durable session token storage.
//!
//! The backend issues an opaque token on login. It is persisted to a single
//! file with no expiry metadata and no schema versioning, and replayed as a
//! bearer credential until the user logs in again. The file is the terminal
//! analog of a browser's local storage key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File-backed store for the session token.
///
/// Tokens are accepted and written verbatim; no shape or signature checks
/// happen client-side. A missing or empty file reads as "no token".
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not created until the first [`set`](Self::set).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored token, if any.
    pub fn get(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                // A text editor or shell redirect may leave a trailing newline.
                let token = contents.trim_end_matches(['\r', '\n']);
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::io("failed to read token file", err)),
        }
    }

    /// Persists the token, replacing any previous one.
    pub fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|err| Error::io("failed to create token directory", err))?;
        }
        fs::write(&self.path, token).map_err(|err| Error::io("failed to write token file", err))
    }

    /// Returns true if a token is currently stored.
    pub fn has(&self) -> bool {
        matches!(self.get(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> TokenStore {
        let mut path = std::env::temp_dir();
        path.push(format!("finsight-token-{}-{}", name, std::process::id()));
        let _ = fs::remove_file(&path);
        TokenStore::open(path)
    }

    #[test]
    fn missing_file_reads_as_none() {
        let store = scratch_store("missing");
        assert_eq!(store.get().unwrap(), None);
        assert!(!store.has());
    }

    #[test]
    fn set_then_get_round_trips_verbatim() {
        let store = scratch_store("roundtrip");
        store.set("eyJ.opaque.token==").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("eyJ.opaque.token=="));
        assert!(store.has());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn set_overwrites_previous_token() {
        let store = scratch_store("overwrite");
        store.set("first").unwrap();
        store.set("second").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("second"));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn trailing_newline_is_stripped_on_read() {
        let store = scratch_store("newline");
        fs::write(store.path(), "token-value\n").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("token-value"));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn empty_file_reads_as_none() {
        let store = scratch_store("empty");
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.get().unwrap(), None);
        let _ = fs::remove_file(store.path());
    }
}
