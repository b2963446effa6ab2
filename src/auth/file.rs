use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{AuthError, CredentialStore, MemoryCredentialStore};

/// One stored row of the credential sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CredentialRecord {
    username: String,
    password: String,
}

/// Credential store persisted to a single `bincode` file. The whole sheet is
/// loaded on open and rewritten after every successful registration.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    inner: MemoryCredentialStore,
}

impl FileCredentialStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref().to_path_buf();
        let mut inner = MemoryCredentialStore::new();
        match fs::read(&path) {
            Ok(bytes) => {
                let records: Vec<CredentialRecord> = bincode::deserialize(&bytes)
                    .map_err(|e| AuthError::Store(format!("{}: {}", path.display(), e)))?;
                for rec in records {
                    inner.register(&rec.username, &rec.password)?;
                }
                info!("loaded {} credential records from {}", inner.len(), path.display());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", path.display());
            }
            Err(e) => return Err(AuthError::Store(format!("{}: {}", path.display(), e))),
        }
        Ok(Self { path, inner })
    }

    fn save(&self) -> Result<(), AuthError> {
        let records: Vec<CredentialRecord> = self
            .inner
            .records()
            .map(|(u, p)| CredentialRecord {
                username: u.to_string(),
                password: p.to_string(),
            })
            .collect();
        let bytes = bincode::serialize(&records)
            .map_err(|e| AuthError::Store(format!("{}: {}", self.path.display(), e)))?;
        fs::write(&self.path, bytes)
            .map_err(|e| AuthError::Store(format!("{}: {}", self.path.display(), e)))
    }
}

impl CredentialStore for FileCredentialStore {
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        self.inner.verify(username, password)
    }

    fn register(&mut self, username: &str, password: &str) -> Result<bool, AuthError> {
        if !self.inner.register(username, password)? {
            return Ok(false);
        }
        if let Err(e) = self.save() {
            warn!("rolling back registration of {}: {}", username, e);
            self.inner.remove(username);
            return Err(e);
        }
        Ok(true)
    }
}
