//! Per-request session context and render-cycle helpers
//!
//! The session is explicit state handed to each component call; there
//! is no process-wide current user.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::achievements;
use crate::domain::{Account, Preferences, Quote, Role};
use crate::store::{AccountStore, AuthError, StoreError};

/// A signed-in user: the normalized store key plus the loaded record.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub account: Account,
}

impl Session {
    /// Authenticate and build the session context.
    pub fn sign_in(store: &AccountStore, email: &str, password: &str) -> Result<Self, AuthError> {
        let account = store.sign_in(email, password)?;
        Ok(Self {
            email: crate::store::normalize_email(email),
            account,
        })
    }

    pub fn role(&self) -> Role {
        self.account.role
    }

    /// Persist the session's account record wholesale.
    pub fn save(&self, store: &AccountStore) -> Result<(), StoreError> {
        store.save_account(&self.email, &self.account)
    }

    /// Change the display name and persist. The user_id is immutable.
    pub fn update_username(&mut self, store: &AccountStore, username: &str) -> Result<(), StoreError> {
        self.account.username = username.to_string();
        self.save(store)
    }

    /// Replace preferences and persist.
    pub fn set_preferences(
        &mut self,
        store: &AccountStore,
        preferences: Preferences,
    ) -> Result<(), StoreError> {
        self.account.preferences = preferences;
        self.save(store)
    }

    /// Re-evaluate badges, merge into the earned set and persist.
    /// Returns the badge names added this pass.
    pub fn refresh_badges(&mut self, store: &AccountStore) -> Result<Vec<String>, StoreError> {
        let added = achievements::merge_earned(&mut self.account);
        if !added.is_empty() {
            tracing::info!("{} earned: {}", self.account.username, added.join(", "));
        }
        self.save(store)?;
        Ok(added)
    }
}

/// How long a quote stays on screen before the next render re-rolls it
pub const QUOTE_INTERVAL: Duration = Duration::from_secs(20);

/// Rotating motivational quote, re-rolled by a polling check at the
/// start of each render cycle rather than a background timer.
#[derive(Debug, Clone)]
pub struct QuoteRotation {
    index: Option<usize>,
    chosen_at: Instant,
}

impl Default for QuoteRotation {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRotation {
    pub fn new() -> Self {
        Self {
            index: None,
            chosen_at: Instant::now(),
        }
    }

    /// The quote to show right now, re-rolled when the interval has
    /// elapsed (or nothing was chosen yet). Empty catalogs yield None.
    pub fn current<'a, R: Rng + ?Sized>(
        &mut self,
        quotes: &'a [Quote],
        rng: &mut R,
    ) -> Option<&'a Quote> {
        if quotes.is_empty() {
            self.index = None;
            return None;
        }

        let stale = self.chosen_at.elapsed() > QUOTE_INTERVAL;
        let index = match self.index {
            Some(i) if !stale && i < quotes.len() => i,
            _ => {
                let i = rng.random_range(0..quotes.len());
                self.index = Some(i);
                self.chosen_at = Instant::now();
                i
            }
        };
        Some(&quotes[index])
    }

    /// Fraction of the interval already spent, clamped to 1.0, for the
    /// countdown bar.
    pub fn progress(&self) -> f32 {
        (self.chosen_at.elapsed().as_secs_f32() / QUOTE_INTERVAL.as_secs_f32()).min(1.0)
    }
}

/// Day-of-month numbers this account completed workouts on, for the
/// calendar grid.
pub fn completed_days_in_month(account: &Account, year: i32, month: u32) -> BTreeSet<u32> {
    let prefix = format!("{:04}-{:02}-", year, month);
    account
        .viewed_calendar
        .iter()
        .filter_map(|date| date.strip_prefix(&prefix))
        .filter_map(|day| day.parse().ok())
        .collect()
}
