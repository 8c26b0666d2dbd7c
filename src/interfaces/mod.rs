mod memory;
pub mod mongo;
mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, IndexSpec, SortOrder, StoreError};
