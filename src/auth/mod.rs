//! Credential checks and the pluggable credential store used by the login
//! menu. The game core never depends on this module.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::core::config::MIN_CREDENTIAL_LEN;

#[cfg(feature = "std")]
pub mod file;
#[cfg(feature = "std")]
pub use file::FileCredentialStore;

/// Errors raised while validating or checking credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A username or password breaks the length/blank rule.
    CredentialInvalid { field: &'static str },
    /// Unknown user, wrong password, or a username that is already taken.
    AuthenticationFailed(&'static str),
    /// The backing store could not be read or written.
    Store(String),
}

impl core::fmt::Display for AuthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthError::CredentialInvalid { field } => write!(
                f,
                "{} must be at least {} characters and not blank",
                field, MIN_CREDENTIAL_LEN
            ),
            AuthError::AuthenticationFailed(why) => write!(f, "Authentication failed: {}", why),
            AuthError::Store(msg) => write!(f, "Credential store error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AuthError {}

/// Check one credential field. The value is trimmed first.
pub fn validate_credential(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().chars().count() < MIN_CREDENTIAL_LEN {
        return Err(AuthError::CredentialInvalid { field });
    }
    Ok(())
}

/// Validate a username/password pair before it reaches a store.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    validate_credential("Username", username)?;
    validate_credential("Password", password)
}

/// Storage of `(username, password)` records.
pub trait CredentialStore {
    /// `true` iff a record with this username and password exists.
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError>;

    /// Add a record. Returns `false` if the username is already taken.
    fn register(&mut self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// Credential store kept in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    records: BTreeMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop the record for `username`. Returns `false` if there was none.
    pub fn remove(&mut self, username: &str) -> bool {
        self.records.remove(username).is_some()
    }

    /// Iterator over `(username, password)` records in username order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|(u, p)| (u.as_str(), p.as_str()))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        Ok(self
            .records
            .get(username)
            .is_some_and(|stored| stored == password))
    }

    fn register(&mut self, username: &str, password: &str) -> Result<bool, AuthError> {
        if self.records.contains_key(username) {
            return Ok(false);
        }
        self.records
            .insert(String::from(username), String::from(password));
        Ok(true)
    }
}
