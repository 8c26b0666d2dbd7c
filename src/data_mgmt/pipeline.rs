use thiserror::Error;

use crate::config::LoaderConfig;
use crate::interfaces::{DocumentStore, StoreError};
use crate::readers::{read_readings, ReadError};

use super::batch::insert_in_batches;
use super::models::LoadSummary;
use super::schema::ensure_schema;
use super::transform::transform;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] StoreError),
    #[error("failed to create database structure: {0}")]
    Schema(#[source] StoreError),
    #[error("failed to read input: {0}")]
    Input(#[from] ReadError),
    #[error("failed to load batch data: {0}")]
    Insert(#[source] StoreError),
}

/// Ensures the schema, then reads, renames and inserts every reading from
/// the configured CSV file. Nothing is inserted unless the whole file
/// parsed.
pub fn run(config: &LoaderConfig, store: &impl DocumentStore) -> Result<LoadSummary, LoadError> {
    let collection_created = ensure_schema(store, &config.collection).map_err(LoadError::Schema)?;

    let docs = transform(read_readings(&config.csv_path)?);
    let records_read = docs.len();
    log::info!("Found {} records to import", records_read);

    let batches = insert_in_batches(
        store,
        &config.collection,
        &docs,
        config.batch_size,
        config.batch_pause,
    )
    .map_err(LoadError::Insert)?;
    log::info!("Successfully loaded all {} records", batches.inserted);

    Ok(LoadSummary {
        collection_created,
        records_read,
        records_inserted: batches.inserted,
        batches: batches.batches,
    })
}
