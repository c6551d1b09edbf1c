use serde::{Deserialize, Serialize};

/// Difficulty levels offered when a coach creates a workout.
///
/// Catalog rows keep the difficulty as free text (the store does no
/// per-row validation), so this is a menu for input, not a parse target.
pub const DIFFICULTIES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// A workout definition from the challenge catalog.
///
/// The title doubles as the completion-tracking key; two catalog rows
/// sharing a title are indistinguishable to progress tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub equipment: String,
    pub body_part: String,
}

impl Challenge {
    /// Body part normalized for filtering: first letter upper-cased,
    /// rest lower-cased, empty mapped to "Other".
    pub fn body_part_normalized(&self) -> String {
        normalize_body_part(&self.body_part)
    }
}

/// Normalize a body part for comparison: first letter upper-cased,
/// rest lower-cased, empty mapped to "Other". Filter values go through
/// the same normalization as catalog rows, so "legs" matches "Legs".
pub fn normalize_body_part(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => "Other".to_string(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// A motivational quote from the quote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub category: String,
}
