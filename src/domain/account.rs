use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Message;

/// Role assigned at signup. Fixed for the lifetime of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Coach,
    Client,
}

impl Default for Role {
    /// Records written before roles existed are treated as clients.
    fn default() -> Self {
        Role::Client
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Coach => write!(f, "Coach"),
            Role::Client => write!(f, "Client"),
        }
    }
}

/// Display font size preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Per-account UI preferences.
///
/// Always present on an account with defined defaults, never an
/// absent-key lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub font_size: FontSize,
}

/// A registered user, keyed by email in the account store.
///
/// The email itself is the store key and is not duplicated here; the
/// record is persisted wholesale on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Display name, mutable after signup
    pub username: String,

    /// Immutable identifier derived from the username at creation.
    /// Not guaranteed unique if usernames collide across emails.
    pub user_id: String,

    #[serde(default)]
    pub role: Role,

    /// Unsalted SHA-256 hex digest of the password
    pub password_hash: String,

    /// Titles of completed challenges. Grows monotonically.
    #[serde(default)]
    pub completed_challenges: BTreeSet<String>,

    /// ISO dates (YYYY-MM-DD) with completed workouts. Grows monotonically.
    #[serde(default)]
    pub viewed_calendar: BTreeSet<String>,

    /// Badge names earned so far. Merged, never removed.
    #[serde(default)]
    pub earned_badges: BTreeSet<String>,

    /// Coach-authored board messages (empty for clients)
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Base64-encoded avatar image, if one was uploaded
    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub preferences: Preferences,
}

impl Account {
    /// Create a fresh account with empty progress collections.
    pub fn new(username: &str, role: Role, password_hash: String) -> Self {
        Self {
            username: username.to_string(),
            user_id: format!("user_{}", username),
            role,
            password_hash,
            completed_challenges: BTreeSet::new(),
            viewed_calendar: BTreeSet::new(),
            earned_badges: BTreeSet::new(),
            messages: Vec::new(),
            avatar: None,
            preferences: Preferences::default(),
        }
    }

    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }

    pub fn is_coach(&self) -> bool {
        self.role == Role::Coach
    }

    /// Number of distinct challenges this account has completed
    pub fn completed_count(&self) -> usize {
        self.completed_challenges.len()
    }
}
