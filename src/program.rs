//! Randomized workout program generation

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::{normalize_body_part, Account, Challenge};

/// A generated program holds at most this many exercises.
pub const PROGRAM_SIZE: usize = 5;

/// Distinct body parts present in the catalog, normalized and sorted,
/// for the filter menu.
pub fn body_parts(challenges: &[Challenge]) -> Vec<String> {
    let mut parts: Vec<String> = challenges
        .iter()
        .map(Challenge::body_part_normalized)
        .collect();
    parts.sort();
    parts.dedup();
    parts
}

/// Distinct difficulty labels in a challenge pool, sorted, for the
/// filter menu.
pub fn difficulties(challenges: &[Challenge]) -> Vec<String> {
    let mut levels: Vec<String> = challenges.iter().map(|c| c.difficulty.clone()).collect();
    levels.sort();
    levels.dedup();
    levels
}

/// Narrow the catalog by optional body part and difficulty filters.
/// Both sides of the body-part comparison are normalized, so raw user
/// input like "legs" matches catalog rows; difficulty compares exactly.
pub fn filter<'a>(
    challenges: &'a [Challenge],
    body_part: Option<&str>,
    difficulty: Option<&str>,
) -> Vec<&'a Challenge> {
    let body_part = body_part.map(normalize_body_part);
    challenges
        .iter()
        .filter(|c| {
            body_part
                .as_deref()
                .is_none_or(|bp| c.body_part_normalized() == bp)
        })
        .filter(|c| difficulty.is_none_or(|d| c.difficulty == d))
        .collect()
}

/// Sample a random program of up to [`PROGRAM_SIZE`] exercises from the
/// filtered pool. An empty pool yields an empty program.
pub fn generate<R: Rng + ?Sized>(pool: &[&Challenge], rng: &mut R) -> Vec<Challenge> {
    let amount = PROGRAM_SIZE.min(pool.len());
    pool.choose_multiple(rng, amount)
        .map(|c| (*c).clone())
        .collect()
}

/// Mark every exercise of the program complete and stamp today on the
/// calendar. Both collections only ever grow.
pub fn complete_program(account: &mut Account, program: &[Challenge], today: NaiveDate) {
    for exercise in program {
        account.completed_challenges.insert(exercise.title.clone());
    }
    account
        .viewed_calendar
        .insert(today.format("%Y-%m-%d").to_string());
}
