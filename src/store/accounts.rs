//! Account store: email-keyed user records in a single JSON file

use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use super::{read_optional, write_atomic, StoreError};
use crate::domain::{Account, Role};

/// File name of the account store inside the data directory
pub const ACCOUNTS_FILE: &str = "users.json";

/// Sign-in failures surfaced to the UI.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Signup rejections surfaced to the UI.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("email already registered")]
    EmailTaken,

    #[error("invalid signup input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// All registered accounts, keyed by lower-cased email.
///
/// Entries keep the order they appear in the store file. Leaderboard
/// tie-breaking relies on that order being stable across load/save
/// cycles, so this is a Vec-backed map rather than a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct Accounts {
    entries: Vec<(String, Account)>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, email: &str) -> Option<&Account> {
        self.entries
            .iter()
            .find(|(e, _)| e == email)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, email: &str) -> Option<&mut Account> {
        self.entries
            .iter_mut()
            .find(|(e, _)| e == email)
            .map(|(_, a)| a)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.get(email).is_some()
    }

    /// Insert or replace the record for an email. New emails append,
    /// keeping existing entries in place.
    pub fn insert(&mut self, email: String, account: Account) {
        match self.entries.iter().position(|(e, _)| *e == email) {
            Some(i) => self.entries[i].1 = account,
            None => self.entries.push((email, account)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.entries.iter().map(|(e, a)| (e.as_str(), a))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Account)> {
        self.entries.iter_mut().map(|(e, a)| (e.as_str(), a))
    }

    /// Accounts with the Client role, in store order
    pub fn clients(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.iter().filter(|(_, a)| a.is_client())
    }

    /// Accounts with the Coach role, in store order
    pub fn coaches(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.iter().filter(|(_, a)| a.is_coach())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Accounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (email, account) in &self.entries {
            map.serialize_entry(email, account)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Accounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccountsVisitor;

        impl<'de> Visitor<'de> for AccountsVisitor {
            type Value = Accounts;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map from email to account record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Accounts, A::Error> {
                let mut accounts = Accounts {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                // Duplicate keys in the file collapse last-wins, the
                // same way a plain JSON object parse would
                while let Some((email, account)) = access.next_entry::<String, Account>()? {
                    accounts.insert(email, account);
                }
                Ok(accounts)
            }
        }

        deserializer.deserialize_map(AccountsVisitor)
    }
}

/// Unsalted SHA-256 hex digest of the password.
///
/// Kept digest-compatible with stores written by earlier releases, so
/// existing users can still sign in. Known weakness, not a free choice.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Emails are compared lower-cased and trimmed throughout.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whole-file persistence for the account map.
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional file name inside a data directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(ACCOUNTS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full account map. A missing or empty file is an empty
    /// map; unparseable content is `StoreError::Corrupt`.
    pub fn load(&self) -> Result<Accounts, StoreError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(Accounts::new());
        };

        let accounts: Accounts = serde_json::from_str(&content)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;

        tracing::debug!("Loaded {} accounts from {}", accounts.len(), self.path.display());
        Ok(accounts)
    }

    /// Overwrite the store with the full account map.
    pub fn save(&self, accounts: &Accounts) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(accounts)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;
        write_atomic(&self.path, &content)
    }

    /// Read-modify-write a single account record.
    pub fn save_account(&self, email: &str, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.load()?;
        accounts.insert(email.to_string(), account.clone());
        self.save(&accounts)
    }

    /// Look up the email and compare password digests.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let email = normalize_email(email);
        let accounts = self.load()?;

        let account = accounts.get(&email).ok_or(AuthError::InvalidCredentials)?;
        if account.password_hash != hash_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!("Signed in {} ({})", email, account.role);
        Ok(account.clone())
    }

    /// Create and persist a new account with empty collections.
    pub fn sign_up(
        &self,
        email: &str,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Account, SignupError> {
        let username = username.trim();
        if email.trim().is_empty() || username.is_empty() || password.is_empty() {
            return Err(SignupError::InvalidInput(
                "email, username and password are required".to_string(),
            ));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(SignupError::InvalidInput(
                "not a valid email address".to_string(),
            ));
        }

        let email = normalize_email(email);
        let mut accounts = self.load()?;
        if accounts.contains(&email) {
            return Err(SignupError::EmailTaken);
        }

        let account = Account::new(username, role, hash_password(password));
        accounts.insert(email.clone(), account.clone());
        self.save(&accounts)?;

        tracing::info!("Registered {} as {}", email, role);
        Ok(account)
    }

    /// Attach an uploaded avatar (already base64-encoded) to an account.
    pub fn set_avatar(&self, email: &str, avatar: Option<String>) -> Result<(), StoreError> {
        let mut accounts = self.load()?;
        if let Some(account) = accounts.get_mut(&normalize_email(email)) {
            account.avatar = avatar;
            self.save(&accounts)?;
        }
        Ok(())
    }
}
