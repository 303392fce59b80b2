//! Bearer-token persistence.
//!
//! The session store is the only durable client state: one opaque token under
//! the fixed key [`TOKEN_KEY`]. There is no expiry logic; an expired token is
//! only noticed when the backend rejects a request, and even then it is kept.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use url::Url;

/// Key (and file name) the token is stored under.
pub const TOKEN_KEY: &str = "auth_token";

/// Errors raised when the token cannot be written or removed.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to save session: {0}")]
    Io(#[from] io::Error),
}

/// Holds, returns and clears the bearer token.
///
/// # Implementations
///
/// - [`MemorySessionStore`] - process-local slot
/// - [`FileSessionStore`] - plain-text file scoped to the backend origin
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, or `None` when absent.
    fn get(&self) -> Option<String>;

    /// Stores `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Removes the token. Clearing an absent token succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be modified.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session store that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

/// Session store backed by a plain-text file.
///
/// [`FileSessionStore::for_origin`] gives every backend origin (scheme, host, port)
/// its own directory, so tokens for different servers never mix.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Uses `path` as the token file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Token file for `base_url`'s origin under `root`.
    pub fn for_origin(root: &Path, base_url: &Url) -> Self {
        Self::new(root.join(origin_key(base_url)).join(TOKEN_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Filesystem-safe name for the origin of `url`.
///
/// `http://127.0.0.1:8000/app` becomes `http___127.0.0.1_8000`.
fn origin_key(url: &Url) -> String {
    url.origin()
        .ascii_serialization()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Some(token),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable session file");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        // `mode` only applies on creation; tighten a pre-existing file before writing.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(token.as_bytes())?;

        tracing::debug!(path = %self.path.display(), "Session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_set_get_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set("token-1").unwrap();
        assert_eq!(store.get().as_deref(), Some("token-1"));

        store.set("token-2").unwrap();
        assert_eq!(store.get().as_deref(), Some("token-2"));

        store.clear().unwrap();
        assert_eq!(store.get(), None);

        store.clear().unwrap();
    }

    #[test]
    fn test_file_set_get_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join(TOKEN_KEY));

        assert_eq!(store.get(), None);

        store.set("abc.def").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc.def"));

        store.clear().unwrap();
        assert_eq!(store.get(), None);
        assert!(!store.path().exists());

        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join(TOKEN_KEY));

        store.set("secret").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        // A world-readable leftover is tightened before the new token lands in it.
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();
        store.set("rotated").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.get().as_deref(), Some("rotated"));
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let dir = TempDir::new().unwrap();
        let url = Url::parse("http://127.0.0.1:8000").unwrap();

        FileSessionStore::for_origin(dir.path(), &url)
            .set("persisted")
            .unwrap();

        let reopened = FileSessionStore::for_origin(dir.path(), &url);
        assert_eq!(reopened.get().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_origins_are_isolated() {
        let dir = TempDir::new().unwrap();
        let a = FileSessionStore::for_origin(dir.path(), &Url::parse("http://localhost:8000").unwrap());
        let b = FileSessionStore::for_origin(dir.path(), &Url::parse("http://localhost:9000").unwrap());

        a.set("token-a").unwrap();

        assert_eq!(b.get(), None);
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_origin_key_ignores_path() {
        let with_path = Url::parse("http://127.0.0.1:8000/dashboard/").unwrap();
        let bare = Url::parse("http://127.0.0.1:8000").unwrap();

        assert_eq!(origin_key(&with_path), origin_key(&bare));
        assert_eq!(origin_key(&bare), "http___127.0.0.1_8000");
    }
}
