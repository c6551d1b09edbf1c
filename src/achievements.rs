//! Badge evaluation and the coach achievement overview

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Account, Badge};
use crate::store::Accounts;

/// Earned at 10 or more completed challenges
pub const BADGE_TEN_WORKOUTS: &str = "10 Workouts";

/// Earned at 7 or more completed challenges. Despite the name this is
/// a plain count threshold, not a consecutive-day streak; the catalog
/// text and the rule have always disagreed and clients expect the
/// count behavior.
pub const BADGE_STREAK_WEEK: &str = "Streak Week";

/// Badge names an account qualifies for at its current completion count.
pub fn evaluate(account: &Account) -> BTreeSet<String> {
    let count = account.completed_count();
    let mut earned = BTreeSet::new();
    if count >= 7 {
        earned.insert(BADGE_STREAK_WEEK.to_string());
    }
    if count >= 10 {
        earned.insert(BADGE_TEN_WORKOUTS.to_string());
    }
    earned
}

/// Union freshly evaluated badges into the account's earned set.
/// Badges are never removed; returns the names added this pass.
pub fn merge_earned(account: &mut Account) -> Vec<String> {
    let mut added = Vec::new();
    for badge in evaluate(account) {
        if account.earned_badges.insert(badge.clone()) {
            added.push(badge);
        }
    }
    added
}

/// One row of the coach overview: a client crossed with every badge in
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementRow {
    pub username: String,
    pub badges: BTreeMap<String, bool>,
}

/// Client-by-badge matrix over the full badge catalog.
pub fn achievement_matrix(accounts: &Accounts, catalog: &[Badge]) -> Vec<AchievementRow> {
    accounts
        .clients()
        .map(|(_, account)| AchievementRow {
            username: account.username.clone(),
            badges: catalog
                .iter()
                .map(|b| (b.name.clone(), account.earned_badges.contains(&b.name)))
                .collect(),
        })
        .collect()
}
