//! CLI command implementations

pub mod accounts;
pub mod board;
pub mod workouts;

use std::path::Path;

use anyhow::{Context, Result};
use equinox::store::AccountStore;
use equinox::Session;

/// Sign in for a mutating command, with context on failure.
pub(crate) fn sign_in(data_dir: &Path, email: &str, password: &str) -> Result<Session> {
    let store = AccountStore::in_dir(data_dir);
    Session::sign_in(&store, email, password).context("sign-in failed")
}
