use mongodb::bson::Document;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("collection {0} already exists")]
    NamespaceExists(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// A single-field index declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexSpec {
    pub field: &'static str,
    pub order: SortOrder,
}

impl IndexSpec {
    pub const fn ascending(field: &'static str) -> Self {
        IndexSpec {
            field,
            order: SortOrder::Ascending,
        }
    }

    pub const fn descending(field: &'static str) -> Self {
        IndexSpec {
            field,
            order: SortOrder::Descending,
        }
    }

    /// Name the server assigns by default, e.g. `noted_date_-1`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.order.direction())
    }
}

/// Destination for transformed readings.
pub trait DocumentStore {
    fn has_collection(&self, name: &str) -> Result<bool, StoreError>;

    fn create_collection(&self, name: &str) -> Result<(), StoreError>;

    /// Declaring an index that already exists must be a no-op.
    fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<String, StoreError>;

    /// Inserts all documents in order and returns how many were written.
    fn insert_many(&self, collection: &str, docs: &[Document]) -> Result<usize, StoreError>;
}
