use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted city record. `id` is assigned by the store on insert and
/// never changes; `name` is unique across all records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub population: u64,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Input for creating a city. Every field is required; a missing or
/// mistyped field fails at deserialization, before any store call.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCity {
    pub name: String,
    pub population: u64,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Partial update: present fields replace the stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityPatch {
    pub name: Option<String>,
    pub population: Option<u64>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyField(&'static str),
    LatitudeRange(f64),
    LongitudeRange(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{field} must not be empty"),
            ValidationError::LatitudeRange(v) => {
                write!(f, "latitude {v} out of range [-90, 90]")
            }
            ValidationError::LongitudeRange(v) => {
                write!(f, "longitude {v} out of range [-180, 180]")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn check_latitude(v: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&v) {
        Ok(())
    } else {
        Err(ValidationError::LatitudeRange(v))
    }
}

fn check_longitude(v: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&v) {
        Ok(())
    } else {
        Err(ValidationError::LongitudeRange(v))
    }
}

impl NewCity {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::EmptyField("country"));
        }
        check_latitude(self.latitude)?;
        check_longitude(self.longitude)
    }
}

impl CityPatch {
    /// Validate only the fields the patch actually carries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.country.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(ValidationError::EmptyField("country"));
        }
        if let Some(latitude) = self.latitude {
            check_latitude(latitude)?;
        }
        if let Some(longitude) = self.longitude {
            check_longitude(longitude)?;
        }
        Ok(())
    }

    /// Apply to an existing record; `id` is untouched.
    pub fn apply(&self, city: &mut City) {
        if let Some(name) = &self.name {
            city.name = name.clone();
        }
        if let Some(population) = self.population {
            city.population = population;
        }
        if let Some(country) = &self.country {
            city.country = country.clone();
        }
        if let Some(latitude) = self.latitude {
            city.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            city.longitude = longitude;
        }
    }
}
