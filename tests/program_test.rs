//! Program generation and completion against a seeded catalog

mod common;

use equinox::store::{AccountStore, CatalogStore, PlanStore};
use equinox::{program, session, Session};

#[test]
fn generated_program_draws_from_the_stored_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::seed_catalog(dir.path());

    let loaded = CatalogStore::new(dir.path()).load_challenges().unwrap();
    assert_eq!(loaded, catalog);

    let pool = program::filter(&loaded, Some("Legs"), None);
    assert_eq!(pool.len(), 3);
    // Raw lowercase input filters the same as the normalized form
    assert_eq!(program::filter(&loaded, Some("legs"), None).len(), 3);

    let mut rng = rand::rng();
    let generated = program::generate(&pool, &mut rng);
    assert_eq!(generated.len(), 3);
    for exercise in &generated {
        assert_eq!(exercise.body_part_normalized(), "Legs");
    }
}

#[test]
fn completing_a_program_updates_progress_and_calendar() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = common::seed_catalog(dir.path());
    let store = AccountStore::in_dir(dir.path());
    common::seed_client(&store, "kim@x.example", "kim", 0);

    let mut session = Session::sign_in(&store, "kim@x.example", "pw").unwrap();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    program::complete_program(&mut session.account, &catalog[..5], today);
    session.save(&store).unwrap();

    let account = store.load().unwrap().get("kim@x.example").unwrap().clone();
    assert_eq!(account.completed_count(), 5);
    assert!(account.viewed_calendar.contains("2024-03-09"));

    let days = session::completed_days_in_month(&account, 2024, 3);
    assert_eq!(days, std::collections::BTreeSet::from([9]));
}

#[test]
fn plans_round_trip_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let plans = PlanStore::in_dir(dir.path());

    plans
        .create_plan("Leg Day", vec!["Squats".to_string(), "Lunges".to_string()])
        .unwrap();
    plans
        .create_plan("Core Day", vec!["Plank".to_string()])
        .unwrap();
    // Any coach may overwrite an existing plan name
    plans
        .create_plan("Leg Day", vec!["Deadlift".to_string()])
        .unwrap();

    let loaded = plans.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded["Leg Day"], vec!["Deadlift".to_string()]);
    assert_eq!(loaded["Core Day"], vec!["Plank".to_string()]);
}
