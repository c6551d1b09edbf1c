//! Workout catalog, program and plan commands

use std::path::Path;

use anyhow::{bail, Result};
use equinox::domain::{Challenge, DIFFICULTIES};
use equinox::program;
use equinox::session::QuoteRotation;
use equinox::store::{AccountStore, CatalogStore, PlanStore};

pub fn list(data_dir: &Path) -> Result<()> {
    let challenges = CatalogStore::new(data_dir).load_challenges()?;
    if challenges.is_empty() {
        println!("The workout catalog is empty.");
        return Ok(());
    }
    for c in &challenges {
        println!(
            "{} [{} / {}] equipment: {}",
            c.title,
            c.difficulty,
            c.body_part_normalized(),
            if c.equipment.is_empty() { "none" } else { c.equipment.as_str() }
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    data_dir: &Path,
    email: &str,
    password: &str,
    title: &str,
    description: &str,
    difficulty: &str,
    equipment: &str,
    body_part: &str,
) -> Result<()> {
    let session = super::sign_in(data_dir, email, password)?;
    if !session.account.is_coach() {
        bail!("only coaches can add workouts");
    }
    if title.trim().is_empty() || description.trim().is_empty() {
        bail!("title and description are required");
    }
    check_difficulty(difficulty)?;

    CatalogStore::new(data_dir).append_challenge(Challenge {
        title: title.to_string(),
        description: description.to_string(),
        difficulty: difficulty.to_string(),
        equipment: equipment.to_string(),
        body_part: body_part.to_string(),
    })?;
    println!("Workout added: {}", title);
    Ok(())
}

pub fn program(
    data_dir: &Path,
    email: &str,
    password: &str,
    body_part: Option<&str>,
    difficulty: Option<&str>,
    complete: bool,
) -> Result<()> {
    let mut session = super::sign_in(data_dir, email, password)?;
    if !session.account.is_client() {
        bail!("programs are generated for clients");
    }

    let challenges = CatalogStore::new(data_dir).load_challenges()?;
    let pool = program::filter(&challenges, body_part, difficulty);
    if pool.is_empty() {
        bail!("no exercises found for this selection");
    }

    let mut rng = rand::rng();
    let generated = program::generate(&pool, &mut rng);
    println!("Your workout program:");
    for (i, exercise) in generated.iter().enumerate() {
        println!("{}. {} - {}", i + 1, exercise.title, exercise.description);
        println!(
            "   Difficulty: {}; Equipment: {}; Body part: {}",
            exercise.difficulty, exercise.equipment, exercise.body_part_normalized()
        );
    }

    if complete {
        let store = AccountStore::in_dir(data_dir);
        let today = chrono::Local::now().date_naive();
        program::complete_program(&mut session.account, &generated, today);
        let earned = session.refresh_badges(&store)?;
        println!("Program marked as completed ({} total).", session.account.completed_count());
        for badge in earned {
            println!("NEW badge earned: {}", badge);
        }
    }
    Ok(())
}

pub fn plan(data_dir: &Path, email: &str, password: &str, name: &str, titles: Vec<String>) -> Result<()> {
    let session = super::sign_in(data_dir, email, password)?;
    if !session.account.is_coach() {
        bail!("only coaches can create workout plans");
    }
    if name.trim().is_empty() || titles.is_empty() {
        bail!("a plan needs a name and at least one workout");
    }

    PlanStore::in_dir(data_dir).create_plan(name, titles)?;
    println!("Workout plan created: {}", name);
    Ok(())
}

/// New catalog rows pick from the fixed difficulty menu; existing rows
/// stay free text.
fn check_difficulty(level: &str) -> Result<()> {
    if DIFFICULTIES.contains(&level) {
        Ok(())
    } else {
        bail!(
            "unknown difficulty '{}', expected one of: {}",
            level,
            DIFFICULTIES.join(", ")
        )
    }
}

pub fn quote(data_dir: &Path) -> Result<()> {
    let quotes = CatalogStore::new(data_dir).load_quotes()?;
    let mut rotation = QuoteRotation::new();
    let mut rng = rand::rng();
    match rotation.current(&quotes, &mut rng) {
        Some(q) => println!("\"{}\" - {}", q.text, q.author),
        None => println!("No motivational quotes available."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_must_come_from_the_menu() {
        assert!(check_difficulty("Beginner").is_ok());
        assert!(check_difficulty("Intermediate").is_ok());
        assert!(check_difficulty("Advanced").is_ok());
        assert!(check_difficulty("beginner").is_err());
        assert!(check_difficulty("Expert").is_err());
    }
}
