mod city;
mod eval;
mod memory;
mod store;

pub use city::{City, CityPatch, NewCity, ValidationError};
pub use memory::MemoryStore;
pub use store::{Document, Store, StoreError};
