//! In-process document store used for dry runs.

use std::cell::RefCell;
use std::collections::BTreeMap;

use mongodb::bson::Document;

use super::store::{DocumentStore, IndexSpec, StoreError};

#[derive(Debug, Default)]
struct MemoryCollection {
    indexes: Vec<IndexSpec>,
    documents: Vec<Document>,
    insert_calls: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<BTreeMap<String, MemoryCollection>>,
    insert_limit: Option<usize>,
    reject_indexes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every insert after the first `calls` ones.
    pub fn reject_inserts_after(mut self, calls: usize) -> Self {
        self.insert_limit = Some(calls);
        self
    }

    /// Fails every index declaration.
    pub fn reject_indexes(mut self) -> Self {
        self.reject_indexes = true;
        self
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.collections.borrow().keys().cloned().collect()
    }

    pub fn indexes(&self, collection: &str) -> Vec<IndexSpec> {
        self.collections
            .borrow()
            .get(collection)
            .map(|c| c.indexes.clone())
            .unwrap_or_default()
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .borrow()
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    /// Sizes of the insert calls made against `collection`, in order.
    pub fn insert_calls(&self, collection: &str) -> Vec<usize> {
        self.collections
            .borrow()
            .get(collection)
            .map(|c| c.insert_calls.clone())
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn has_collection(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.collections.borrow().contains_key(name))
    }

    fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.borrow_mut();
        if collections.contains_key(name) {
            return Err(StoreError::NamespaceExists(name.to_string()));
        }
        collections.insert(name.to_string(), MemoryCollection::default());
        Ok(())
    }

    fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<String, StoreError> {
        if self.reject_indexes {
            return Err(StoreError::Rejected(format!("index {}", index.name())));
        }
        let mut collections = self.collections.borrow_mut();
        let coll = collections.entry(collection.to_string()).or_default();
        if !coll.indexes.contains(index) {
            coll.indexes.push(*index);
        }
        Ok(index.name())
    }

    fn insert_many(&self, collection: &str, docs: &[Document]) -> Result<usize, StoreError> {
        let mut collections = self.collections.borrow_mut();
        let coll = collections.entry(collection.to_string()).or_default();
        if let Some(limit) = self.insert_limit {
            if coll.insert_calls.len() >= limit {
                return Err(StoreError::Rejected(format!(
                    "insert limit of {limit} calls reached"
                )));
            }
        }
        coll.documents.extend_from_slice(docs);
        coll.insert_calls.push(docs.len());
        Ok(docs.len())
    }
}
