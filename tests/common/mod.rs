//! Shared helpers for integration tests

use std::path::Path;

use equinox::domain::{Challenge, Role};
use equinox::store::{AccountStore, CatalogStore};

/// Register a client and mark `completed` distinct challenges done.
pub fn seed_client(store: &AccountStore, email: &str, username: &str, completed: usize) {
    let mut account = store
        .sign_up(email, username, "pw", Role::Client)
        .expect("seed signup");
    for i in 0..completed {
        account.completed_challenges.insert(format!("exercise-{}", i));
    }
    store.save_account(email, &account).expect("seed save");
}

/// Register a coach account.
pub fn seed_coach(store: &AccountStore, email: &str, username: &str) {
    store
        .sign_up(email, username, "pw", Role::Coach)
        .expect("seed coach signup");
}

/// Write a small workout catalog into the data directory.
pub fn seed_catalog(dir: &Path) -> Vec<Challenge> {
    let challenges: Vec<Challenge> = [
        ("Plank", "core", "Beginner"),
        ("Crunches", "core", "Beginner"),
        ("Squats", "legs", "Beginner"),
        ("Lunges", "legs", "Intermediate"),
        ("Deadlift", "legs", "Advanced"),
        ("Push-ups", "arms", "Beginner"),
        ("Pull-ups", "arms", "Advanced"),
    ]
    .iter()
    .map(|(title, part, level)| Challenge {
        title: (*title).to_string(),
        description: format!("{} routine", title),
        difficulty: (*level).to_string(),
        equipment: "None".to_string(),
        body_part: (*part).to_string(),
    })
    .collect();

    CatalogStore::new(dir)
        .save_challenges(&challenges)
        .expect("seed catalog");
    challenges
}
