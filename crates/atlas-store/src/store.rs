use std::fmt;

use atlas_query::{Predicate, Query};

use crate::city::{City, CityPatch, NewCity};

/// Projected record shape returned by reads: a JSON object holding `id`
/// plus the selected fields.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Backend-agnostic persistence contract for city records.
pub trait Store: Send + Sync {
    /// Total records matching the predicate, ignoring pagination.
    fn count(&self, predicate: &Predicate) -> Result<u64, StoreError>;

    /// Execute a read: filter, sort, window, project. Ordering follows the
    /// query's sort when given, otherwise the backend's natural order —
    /// unspecified but stable within a single call. Returns fewer than
    /// `take` records at the end of the set, and an empty vec on no match.
    fn find(&self, query: &Query) -> Result<Vec<Document>, StoreError>;

    /// Insert a record, assigning its id. Fails with
    /// [`StoreError::Conflict`] when the name is already taken, leaving the
    /// store unchanged.
    fn insert(&self, city: NewCity) -> Result<City, StoreError>;

    /// Apply a partial update. `None` when the id does not exist; renaming
    /// onto a taken name is a [`StoreError::Conflict`].
    fn update(&self, id: &str, patch: CityPatch) -> Result<Option<City>, StoreError>;

    /// Hard delete. `None` when the id does not exist.
    fn delete(&self, id: &str) -> Result<Option<City>, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// Uniqueness violation; carries the contested name.
    Conflict(String),
    /// Backend failure. Always surfaced to the caller, never swallowed.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Conflict(name) => write!(f, "duplicate city name: {name}"),
            StoreError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
