//! Account, leaderboard and achievement commands

use std::path::Path;

use anyhow::{bail, Context, Result};
use equinox::domain::Role;
use equinox::store::{AccountStore, CatalogStore};
use equinox::{achievements, ranking};

pub fn signup(data_dir: &Path, email: &str, username: &str, password: &str, role: &str) -> Result<()> {
    let role = match role {
        "Coach" => Role::Coach,
        "Client" => Role::Client,
        other => bail!("unknown role '{}', expected Coach or Client", other),
    };

    let store = AccountStore::in_dir(data_dir);
    let account = store
        .sign_up(email, username, password, role)
        .context("signup rejected")?;

    println!("Account created: {} ({})", account.username, account.role);
    Ok(())
}

pub fn signin(data_dir: &Path, email: &str, password: &str) -> Result<()> {
    let store = AccountStore::in_dir(data_dir);
    let mut session = super::sign_in(data_dir, email, password)?;

    // Badge thresholds are re-checked on every profile view
    let added = session.refresh_badges(&store)?;

    let account = &session.account;
    println!("{} ({})", account.username, account.role);
    println!("  challenges completed: {}", account.completed_count());
    println!("  days on calendar:     {}", account.viewed_calendar.len());
    if account.earned_badges.is_empty() {
        println!("  badges:               none yet");
    } else {
        let badges: Vec<_> = account.earned_badges.iter().cloned().collect();
        println!("  badges:               {}", badges.join(", "));
    }
    for badge in added {
        println!("  NEW badge earned: {}", badge);
    }

    if account.is_client() {
        let accounts = store.load()?;
        let board = ranking::compute_leaderboard(&accounts);
        if let Some(rank) = ranking::rank_of(&board, &session.email) {
            println!("  leaderboard rank:     #{}", rank);
        }
    }
    Ok(())
}

pub fn leaderboard(data_dir: &Path) -> Result<()> {
    let store = AccountStore::in_dir(data_dir);
    let accounts = store.load()?;
    let board = ranking::compute_leaderboard(&accounts);

    if board.is_empty() {
        println!("No clients registered yet.");
        return Ok(());
    }
    for (i, entry) in board.iter().enumerate() {
        println!("{}. {} - {} workouts completed", i + 1, entry.username, entry.completed);
    }
    Ok(())
}

pub fn achievements(data_dir: &Path) -> Result<()> {
    let accounts = AccountStore::in_dir(data_dir).load()?;
    let catalog = CatalogStore::new(data_dir).load_badges()?;

    let matrix = achievements::achievement_matrix(&accounts, &catalog);
    if matrix.is_empty() {
        println!("No client data to display.");
        return Ok(());
    }
    for row in matrix {
        let earned: Vec<_> = row
            .badges
            .iter()
            .map(|(name, earned)| format!("{} {}", if *earned { "+" } else { "-" }, name))
            .collect();
        println!("{}: {}", row.username, earned.join("  "));
    }
    Ok(())
}
