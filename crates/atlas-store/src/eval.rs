use std::cmp::Ordering;

use atlas_query::{Condition, Field, Predicate, Sort, SortDirection};
use serde_json::Value;

use crate::city::City;
use crate::store::{Document, StoreError};

/// Evaluate whether a record matches every condition in the predicate.
pub(crate) fn matches(predicate: &Predicate, city: &City) -> bool {
    predicate
        .conditions
        .iter()
        .all(|condition| matches_condition(condition, city))
}

fn matches_condition(condition: &Condition, city: &City) -> bool {
    match condition {
        Condition::Eq(field, value) => value_eq(city, *field, value),
        Condition::Gt(field, value) => value_cmp(city, *field, value, |o| o == Ordering::Greater),
        Condition::Gte(field, value) => value_cmp(city, *field, value, |o| o != Ordering::Less),
        Condition::Lt(field, value) => value_cmp(city, *field, value, |o| o == Ordering::Less),
        Condition::Lte(field, value) => value_cmp(city, *field, value, |o| o != Ordering::Greater),
        Condition::IContains(field, re) => match text_field(city, *field) {
            Some(s) => re.is_match(s),
            None => false,
        },
    }
}

/// String-typed fields; numeric fields have no substring semantics.
fn text_field(city: &City, field: Field) -> Option<&str> {
    match field {
        Field::Id => Some(&city.id),
        Field::Name => Some(&city.name),
        Field::Country => Some(&city.country),
        Field::Population | Field::Latitude | Field::Longitude => None,
    }
}

fn number_field(city: &City, field: Field) -> Option<f64> {
    match field {
        Field::Population => Some(city.population as f64),
        Field::Latitude => Some(city.latitude),
        Field::Longitude => Some(city.longitude),
        Field::Id | Field::Name | Field::Country => None,
    }
}

/// Equality between a stored field and a query value. Incompatible types
/// are a silent non-match, not an error.
fn value_eq(city: &City, field: Field, value: &Value) -> bool {
    if let (Some(stored), Value::String(query)) = (text_field(city, field), value) {
        return stored == query;
    }
    match (number_field(city, field), value.as_f64()) {
        (Some(stored), Some(query)) => stored == query,
        _ => false,
    }
}

fn value_cmp(city: &City, field: Field, value: &Value, pred: fn(Ordering) -> bool) -> bool {
    let ordering = match (text_field(city, field), value) {
        (Some(stored), Value::String(query)) => Some(stored.cmp(query.as_str())),
        _ => match (number_field(city, field), value.as_f64()) {
            (Some(stored), Some(query)) => stored.partial_cmp(&query),
            _ => None,
        },
    };
    ordering.is_some_and(pred)
}

/// Order two records by the sort key. Unknown fields compare equal, which
/// preserves natural order under a stable sort.
pub(crate) fn compare(a: &City, b: &City, sort: &Sort) -> Ordering {
    let ordering = match Field::parse(&sort.field) {
        Some(Field::Id) => a.id.cmp(&b.id),
        Some(Field::Name) => a.name.cmp(&b.name),
        Some(Field::Country) => a.country.cmp(&b.country),
        Some(Field::Population) => a.population.cmp(&b.population),
        Some(Field::Latitude) => a.latitude.total_cmp(&b.latitude),
        Some(Field::Longitude) => a.longitude.total_cmp(&b.longitude),
        None => Ordering::Equal,
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Project a record to the selected fields. `id` always survives.
pub(crate) fn project(city: &City, projection: Option<&[Field]>) -> Result<Document, StoreError> {
    let value = serde_json::to_value(city).map_err(|e| StoreError::Storage(e.to_string()))?;
    let Value::Object(mut doc) = value else {
        return Err(StoreError::Storage(
            "city record did not serialize to an object".into(),
        ));
    };
    if let Some(fields) = projection {
        doc.retain(|key, _| key == "id" || fields.iter().any(|f| f.as_str() == key));
    }
    Ok(doc)
}
