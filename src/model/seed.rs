//! Seed data: the built-in people plus optional TOML seed files
//!
//! A seed file holds one `[[people]]` table per record:
//!
//! ```toml
//! [[people]]
//! name = "Shawn"
//! age = 31
//! favorite_color = "Blue"
//! favorite_movie = "Dinner For Schmucks"
//! # id = "6f1c..."   # optional; fresh id when absent
//! ```

use super::{Record, RecordId};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

/// The three people the app ships with
pub fn default_people() -> Vec<Record> {
    vec![
        Record::new("Shawn", 31, "Blue", "Dinner For Schmucks"),
        Record::new("Bob", 54, "Red", "Saving Private Ryan"),
        Record::new("Susan", 23, "Teal", "The Lion King"),
    ]
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    people: Vec<SeedPerson>,
}

#[derive(Debug, Deserialize)]
struct SeedPerson {
    id: Option<Uuid>,
    name: String,
    age: u32,
    favorite_color: String,
    favorite_movie: String,
}

impl From<SeedPerson> for Record {
    fn from(p: SeedPerson) -> Self {
        let id = p.id.map(RecordId::from_uuid).unwrap_or_default();
        Record::with_id(id, p.name, p.age, p.favorite_color, p.favorite_movie)
    }
}

/// Parse seed records from TOML text
pub fn parse_people(contents: &str) -> Result<Vec<Record>> {
    let file: SeedFile = toml::from_str(contents).context("Invalid people seed file")?;
    Ok(file.people.into_iter().map(Record::from).collect())
}

/// Load seed records from a TOML file
pub fn load_people(path: &Path) -> Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read people file {}", path.display()))?;
    let people = parse_people(&contents)
        .with_context(|| format!("Failed to parse people file {}", path.display()))?;

    tracing::info!("Loaded {} people from {}", people.len(), path.display());
    Ok(people)
}
