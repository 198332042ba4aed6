//! Credential storage
//!
//! Holds the current credential pair behind a tokio Mutex. The pair is only
//! ever replaced or cleared as a whole, so a reader sees either the old pair
//! or the new pair, never an access token from one refresh and a refresh
//! token from another.
//!
//! `MemoryCredentialStore` is the default for in-process sessions and tests.
//! `FileCredentialStore` persists the pair across restarts with atomic
//! temp-file + rename writes at 0600.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Credential;

/// Abstraction over where the credential pair lives.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility
/// (`Arc<dyn CredentialStore>`).
pub trait CredentialStore: Send + Sync {
    /// Current credential pair, if a session exists.
    fn get(&self) -> Pin<Box<dyn Future<Output = Result<Option<Credential>>> + Send + '_>>;

    /// Replace the stored pair. Both tokens change together.
    fn set(&self, credential: Credential) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Drop the stored pair. Subsequent `get`s return `None` until the next
    /// login.
    fn clear(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// In-memory store for a single session.
#[derive(Default)]
pub struct MemoryCredentialStore {
    state: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pair already present, as after a completed login.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            state: Mutex::new(Some(credential)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Pin<Box<dyn Future<Output = Result<Option<Credential>>> + Send + '_>> {
        Box::pin(async move {
            let state = self.state.lock().await;
            Ok(state.clone())
        })
    }

    fn set(&self, credential: Credential) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            *state = Some(credential);
            debug!("stored credential pair");
            Ok(())
        })
    }

    fn clear(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            *state = None;
            debug!("cleared credential pair");
            Ok(())
        })
    }
}

/// On-disk representation of the credential pair.
///
/// The key names match what the backend's web client stores, so a session
/// file is portable between the two.
#[derive(Serialize, Deserialize)]
struct StoredCredential {
    access_token: String,
    refresh_token: String,
}

/// File-backed store for sessions that survive a restart.
///
/// The Mutex serializes writes. A missing file means no session, not an
/// error.
pub struct FileCredentialStore {
    path: PathBuf,
    state: Mutex<Option<Credential>>,
}

impl FileCredentialStore {
    /// Load the pair from the given file path.
    ///
    /// If the file doesn't exist the store starts empty and the file is
    /// created on the first `set`.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let state = if path.exists() {
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::Io(format!("reading credential file: {e}")))?;
            let stored: StoredCredential = serde_json::from_str(&contents)
                .map_err(|e| Error::CredentialParse(format!("parsing credential file: {e}")))?;
            debug!(path = %path.display(), "loaded credential pair");
            Some(Credential::new(stored.access_token, stored.refresh_token))
        } else {
            debug!(path = %path.display(), "credential file not found, starting without a session");
            None
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Pin<Box<dyn Future<Output = Result<Option<Credential>>> + Send + '_>> {
        Box::pin(async move {
            let state = self.state.lock().await;
            Ok(state.clone())
        })
    }

    fn set(&self, credential: Credential) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            write_atomic(&self.path, &credential).await?;
            *state = Some(credential);
            Ok(())
        })
    }

    fn clear(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.state.lock().await;
            *state = None;
            if self.path.exists() {
                tokio::fs::remove_file(&self.path)
                    .await
                    .map_err(|e| Error::Io(format!("removing credential file: {e}")))?;
            }
            debug!(path = %self.path.display(), "cleared credential pair");
            Ok(())
        })
    }
}

/// Write the pair to a file atomically.
///
/// Writes to a temporary file in the same directory, then renames it over
/// the target. This prevents corruption if the process crashes mid-write.
/// Sets file permissions to 0600 since the file contains session tokens.
async fn write_atomic(path: &Path, credential: &Credential) -> Result<()> {
    let stored = StoredCredential {
        access_token: credential.access_token().to_owned(),
        refresh_token: credential.refresh_token().to_owned(),
    };
    let json = serde_json::to_string_pretty(&stored)
        .map_err(|e| Error::CredentialParse(format!("serializing credential pair: {e}")))?;

    let dir = path
        .parent()
        .ok_or_else(|| Error::Io("credential path has no parent directory".into()))?;

    let tmp_path = dir.join(format!(".session.tmp.{}", std::process::id()));

    tokio::fs::write(&tmp_path, json.as_bytes())
        .await
        .map_err(|e| Error::Io(format!("writing temp credential file: {e}")))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        tokio::fs::set_permissions(&tmp_path, perms)
            .await
            .map_err(|e| Error::Io(format!("setting credential file permissions: {e}")))?;
    }

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Error::Io(format!("renaming temp credential file: {e}")))?;

    debug!(path = %path.display(), "persisted credential pair");
    Ok(())
}
