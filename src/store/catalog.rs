//! Challenge, quote and badge catalogs
//!
//! Challenges and quotes are CSV files with a header row; badges are a
//! JSON list. Catalogs are read and overwritten whole, never edited in
//! place.

use std::path::{Path, PathBuf};

use super::{read_optional, write_atomic, StoreError};
use crate::domain::{Badge, Challenge, Quote};

pub const CHALLENGES_FILE: &str = "exercises.csv";
pub const QUOTES_FILE: &str = "quotes.csv";
pub const BADGES_FILE: &str = "badges.json";

const CHALLENGE_COLUMNS: [&str; 5] = ["title", "description", "difficulty", "equipment", "body_part"];
const QUOTE_COLUMNS: [&str; 3] = ["text", "author", "category"];

/// Catalog files inside a data directory.
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn challenges_path(&self) -> PathBuf {
        self.dir.join(CHALLENGES_FILE)
    }

    pub fn quotes_path(&self) -> PathBuf {
        self.dir.join(QUOTES_FILE)
    }

    pub fn badges_path(&self) -> PathBuf {
        self.dir.join(BADGES_FILE)
    }

    /// Load the workout catalog. Missing file means an empty catalog.
    pub fn load_challenges(&self) -> Result<Vec<Challenge>, StoreError> {
        let path = self.challenges_path();
        let rows = load_csv(&path, &CHALLENGE_COLUMNS)?;
        Ok(rows
            .into_iter()
            .map(|mut r| Challenge {
                title: std::mem::take(&mut r[0]),
                description: std::mem::take(&mut r[1]),
                difficulty: std::mem::take(&mut r[2]),
                equipment: std::mem::take(&mut r[3]),
                body_part: std::mem::take(&mut r[4]),
            })
            .collect())
    }

    /// Overwrite the workout catalog.
    pub fn save_challenges(&self, challenges: &[Challenge]) -> Result<(), StoreError> {
        let rows: Vec<Vec<&str>> = challenges
            .iter()
            .map(|c| {
                vec![
                    c.title.as_str(),
                    c.description.as_str(),
                    c.difficulty.as_str(),
                    c.equipment.as_str(),
                    c.body_part.as_str(),
                ]
            })
            .collect();
        write_csv(&self.challenges_path(), &CHALLENGE_COLUMNS, &rows)
    }

    /// Coach "add workout" path: load, append, overwrite.
    pub fn append_challenge(&self, challenge: Challenge) -> Result<(), StoreError> {
        let mut challenges = self.load_challenges()?;
        challenges.push(challenge);
        self.save_challenges(&challenges)
    }

    /// Load the motivational quote catalog.
    pub fn load_quotes(&self) -> Result<Vec<Quote>, StoreError> {
        let path = self.quotes_path();
        let rows = load_csv(&path, &QUOTE_COLUMNS)?;
        Ok(rows
            .into_iter()
            .map(|mut r| Quote {
                text: std::mem::take(&mut r[0]),
                author: std::mem::take(&mut r[1]),
                category: std::mem::take(&mut r[2]),
            })
            .collect())
    }

    /// Overwrite the quote catalog.
    pub fn save_quotes(&self, quotes: &[Quote]) -> Result<(), StoreError> {
        let rows: Vec<Vec<&str>> = quotes
            .iter()
            .map(|q| vec![q.text.as_str(), q.author.as_str(), q.category.as_str()])
            .collect();
        write_csv(&self.quotes_path(), &QUOTE_COLUMNS, &rows)
    }

    /// Load the static badge catalog (JSON list).
    pub fn load_badges(&self) -> Result<Vec<Badge>, StoreError> {
        let path = self.badges_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&path, e))
    }
}

/// Read a CSV file and return its data rows, reordered to match
/// `expected` column order. Missing file means no rows; a header
/// lacking an expected column is corrupt.
fn load_csv(path: &Path, expected: &[&str]) -> Result<Vec<Vec<String>>, StoreError> {
    let Some(content) = read_optional(path)? else {
        return Ok(Vec::new());
    };

    let mut records = parse_csv(&content);
    if records.is_empty() {
        return Ok(Vec::new());
    }
    let header = records.remove(0);

    let mut indexes = Vec::with_capacity(expected.len());
    for column in expected {
        let idx = header
            .iter()
            .position(|h| h.trim() == *column)
            .ok_or_else(|| StoreError::corrupt(path, format!("missing column '{}'", column)))?;
        indexes.push(idx);
    }

    Ok(records
        .into_iter()
        .map(|record| {
            indexes
                .iter()
                .map(|&i| record.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect())
}

/// Write rows to a CSV file with a header, quoting where needed.
fn write_csv(path: &Path, columns: &[&str], rows: &[Vec<&str>]) -> Result<(), StoreError> {
    let mut out = String::new();
    push_record(&mut out, columns.iter().copied());
    for row in rows {
        push_record(&mut out, row.iter().copied());
    }
    write_atomic(path, &out)
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// Quote a field if it contains a comma, quote or newline; embedded
/// quotes double per RFC 4180.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Minimal RFC-4180 parser: quoted fields may contain commas, doubled
/// quotes and newlines.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                // Skip blank lines between records
                if record.len() > 1 || !record[0].is_empty() {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
