//! Key-value store repository.

mod model;
mod repository;

pub use model::StoreEntryDB;
pub use repository::StoreRepository;
