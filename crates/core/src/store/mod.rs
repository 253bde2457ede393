//! Key-value store module - the persistence seam for the application.

mod memory;
mod store_traits;

pub use memory::MemoryStoreRepository;
pub use store_traits::StoreRepositoryTrait;
