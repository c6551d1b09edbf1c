use serde::{Deserialize, Serialize};

/// A static badge catalog entry.
///
/// Earned state is not stored here; it lives in each account's
/// `earned_badges` set by badge name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub category: String,
}
