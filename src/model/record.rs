//! Person records and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identity for a record, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person shown as one card in the list
///
/// Immutable once built. Two records are the same entity iff their ids match,
/// regardless of field contents.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    id: RecordId,
    name: String,
    age: u32,
    favorite_color: String,
    favorite_movie: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        favorite_color: impl Into<String>,
        favorite_movie: impl Into<String>,
    ) -> Self {
        Self::with_id(RecordId::new(), name, age, favorite_color, favorite_movie)
    }

    /// Build a record with a caller-supplied identity (seed files)
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        age: u32,
        favorite_color: impl Into<String>,
        favorite_movie: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            favorite_color: favorite_color.into(),
            favorite_movie: favorite_movie.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn favorite_color(&self) -> &str {
        &self.favorite_color
    }

    pub fn favorite_movie(&self) -> &str {
        &self.favorite_movie
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
