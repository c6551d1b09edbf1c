//! Leaderboard derivation over the account store

use crate::store::Accounts;

/// One leaderboard row. The email is the stable key for rank lookups;
/// usernames are display-only and may collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub email: String,
    pub username: String,
    pub completed: usize,
}

/// Clients ranked by completed-challenge count, descending.
///
/// Uses a stable sort so ties keep the account store's insertion
/// order; coaches never appear regardless of their counts.
pub fn compute_leaderboard(accounts: &Accounts) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = accounts
        .clients()
        .map(|(email, account)| LeaderboardEntry {
            email: email.to_string(),
            username: account.username.clone(),
            completed: account.completed_count(),
        })
        .collect();

    entries.sort_by(|a, b| b.completed.cmp(&a.completed));
    entries
}

/// 1-based leaderboard position for an account, by store email.
pub fn rank_of(entries: &[LeaderboardEntry], email: &str) -> Option<usize> {
    entries.iter().position(|e| e.email == email).map(|i| i + 1)
}
