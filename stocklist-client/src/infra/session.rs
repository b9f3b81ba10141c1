//! Access-token lookup for catalog requests.
//!
//! The session is written by the login flow (outside this crate) as a JSON
//! object carrying an `accessToken`. We only ever read it.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

pub(crate) const SESSION_FILE: &str = "session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("unable to determine data directory for the session file")]
    NoDataDir,
    #[error("failed to read session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed session file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Provides the bearer token for the current user, if any.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn access_token(&self) -> Result<Option<String>, SessionError>;
}

/// Persisted session object. Other fields the login flow stores are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    #[serde(default)]
    access_token: Option<String>,
}

/// Session read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/session.json`, e.g. `~/.local/share/stocklist/session.json`.
    pub fn at_default_location() -> Result<Self, SessionError> {
        let dirs = ProjectDirs::from("", "", "stocklist").ok_or(SessionError::NoDataDir)?;
        Ok(Self::new(dirs.data_dir().join(SESSION_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn access_token(&self) -> Result<Option<String>, SessionError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No session file at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let session: StoredSession =
            serde_json::from_slice(&raw).map_err(|source| SessionError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Ok(session.access_token.filter(|token| !token.trim().is_empty()))
    }
}

/// Fixed token, for `--token` and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn session_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write session");
        file
    }

    #[test]
    fn reads_access_token_and_ignores_other_fields() {
        let file = session_file(
            r#"{"_id":"u1","username":"admin","accessToken":"abc.def","refreshToken":"r"}"#,
        );
        let store = FileSessionStore::new(file.path());
        assert_eq!(store.access_token().expect("token"), Some("abc.def".to_string()));
    }

    #[test]
    fn missing_file_means_no_token() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.access_token().expect("no token"), None);
    }

    #[test]
    fn blank_or_absent_token_means_no_token() {
        let blank = session_file(r#"{"accessToken":"  "}"#);
        assert_eq!(FileSessionStore::new(blank.path()).access_token().expect("blank"), None);

        let absent = session_file(r#"{"username":"admin"}"#);
        assert_eq!(FileSessionStore::new(absent.path()).access_token().expect("absent"), None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = session_file("not json");
        let err = FileSessionStore::new(file.path())
            .access_token()
            .expect_err("malformed");
        assert!(matches!(err, SessionError::Malformed { .. }));
    }
}
