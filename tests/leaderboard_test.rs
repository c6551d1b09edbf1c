//! Leaderboard and achievement flows over a persisted store

mod common;

use equinox::store::{AccountStore, CatalogStore};
use equinox::{achievements, ranking, Session};

#[test]
fn leaderboard_excludes_coaches_whatever_their_count() {
    let dir = tempfile::tempdir().unwrap();
    let store = AccountStore::in_dir(dir.path());

    common::seed_client(&store, "a@x.example", "client-a", 3);
    common::seed_client(&store, "b@x.example", "client-b", 7);
    common::seed_coach(&store, "c@x.example", "coach-c");
    // Even a coach with the biggest count stays off the board
    let mut coach = store.load().unwrap().get("c@x.example").unwrap().clone();
    for i in 0..100 {
        coach.completed_challenges.insert(format!("exercise-{}", i));
    }
    store.save_account("c@x.example", &coach).unwrap();

    let board = ranking::compute_leaderboard(&store.load().unwrap());
    let names: Vec<_> = board.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(names, ["client-b", "client-a"]);

    assert_eq!(ranking::rank_of(&board, "b@x.example"), Some(1));
    assert_eq!(ranking::rank_of(&board, "a@x.example"), Some(2));
    assert_eq!(ranking::rank_of(&board, "c@x.example"), None);
}

#[test]
fn badge_refresh_persists_and_never_regresses() {
    let dir = tempfile::tempdir().unwrap();
    let store = AccountStore::in_dir(dir.path());
    common::seed_client(&store, "kim@x.example", "kim", 9);

    let mut session = Session::sign_in(&store, "kim@x.example", "pw").unwrap();
    let added = session.refresh_badges(&store).unwrap();
    // Nine completions: Streak Week only
    assert_eq!(added, vec![achievements::BADGE_STREAK_WEEK.to_string()]);

    // Cross the second threshold
    session
        .account
        .completed_challenges
        .insert("one more".to_string());
    let added = session.refresh_badges(&store).unwrap();
    assert_eq!(added, vec![achievements::BADGE_TEN_WORKOUTS.to_string()]);

    // A later refresh at the same count changes nothing
    let mut again = Session::sign_in(&store, "kim@x.example", "pw").unwrap();
    assert!(again.refresh_badges(&store).unwrap().is_empty());
    assert_eq!(again.account.earned_badges.len(), 2);
}

#[test]
fn achievement_matrix_reads_the_badge_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = AccountStore::in_dir(dir.path());
    let catalogs = CatalogStore::new(dir.path());
    std::fs::write(
        catalogs.badges_path(),
        r#"[
            {"name": "10 Workouts", "description": "Complete 10 unique challenges", "requirements": [], "category": "progress"},
            {"name": "Streak Week", "description": "Complete challenges 7 days in a row", "requirements": [], "category": "consistency"}
        ]"#,
    )
    .unwrap();

    common::seed_client(&store, "done@x.example", "done", 12);
    common::seed_client(&store, "new@x.example", "new", 1);
    let mut session = Session::sign_in(&store, "done@x.example", "pw").unwrap();
    session.refresh_badges(&store).unwrap();

    let matrix = achievements::achievement_matrix(
        &store.load().unwrap(),
        &catalogs.load_badges().unwrap(),
    );
    assert_eq!(matrix.len(), 2);

    let done = matrix.iter().find(|r| r.username == "done").unwrap();
    assert!(done.badges["10 Workouts"]);
    assert!(done.badges["Streak Week"]);

    let fresh = matrix.iter().find(|r| r.username == "new").unwrap();
    assert!(!fresh.badges["10 Workouts"]);
    assert!(!fresh.badges["Streak Week"]);
}
