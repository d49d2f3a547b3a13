use atlas_query::{Predicate, Query};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::city::{City, CityPatch, NewCity};
use crate::eval;
use crate::store::{Document, Store, StoreError};

/// In-memory backend. Insertion order is the natural order; every
/// operation runs under a single record lock, so single-record writes are
/// atomic and reads see a consistent snapshot within one call.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<City>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn count(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|city| eval::matches(predicate, city))
            .count() as u64)
    }

    fn find(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let records = self.records.read();
        let mut matched: Vec<&City> = records
            .iter()
            .filter(|city| eval::matches(&query.predicate, city))
            .collect();
        if let Some(sort) = &query.sort {
            matched.sort_by(|a, b| eval::compare(a, b, sort));
        }

        let skip = query
            .skip
            .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
        let take = query
            .take
            .map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));

        matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|city| eval::project(city, query.projection.as_deref()))
            .collect()
    }

    fn insert(&self, city: NewCity) -> Result<City, StoreError> {
        let mut records = self.records.write();
        if records.iter().any(|existing| existing.name == city.name) {
            return Err(StoreError::Conflict(city.name));
        }
        let city = City {
            id: Uuid::new_v4().to_string(),
            name: city.name,
            population: city.population,
            country: city.country,
            latitude: city.latitude,
            longitude: city.longitude,
        };
        records.push(city.clone());
        Ok(city)
    }

    fn update(&self, id: &str, patch: CityPatch) -> Result<Option<City>, StoreError> {
        let mut records = self.records.write();
        let Some(index) = records.iter().position(|city| city.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            let taken = records
                .iter()
                .any(|city| city.name == *name && city.id != id);
            if taken {
                return Err(StoreError::Conflict(name.clone()));
            }
        }
        patch.apply(&mut records[index]);
        Ok(Some(records[index].clone()))
    }

    fn delete(&self, id: &str) -> Result<Option<City>, StoreError> {
        let mut records = self.records.write();
        match records.iter().position(|city| city.id == id) {
            Some(index) => Ok(Some(records.remove(index))),
            None => Ok(None),
        }
    }
}
