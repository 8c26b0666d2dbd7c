use std::thread;
use std::time::Duration;

use mongodb::bson::Document;

use crate::interfaces::{DocumentStore, StoreError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub batches: usize,
    pub inserted: usize,
}

/// Inserts `docs` in order, at most `batch_size` per call, sleeping for
/// `pause` after every call. Stops at the first failed insert; batches
/// already written stay written.
pub fn insert_in_batches(
    store: &impl DocumentStore,
    collection: &str,
    docs: &[Document],
    batch_size: usize,
    pause: Duration,
) -> Result<BatchSummary, StoreError> {
    let mut summary = BatchSummary::default();

    // chunks() panics on zero
    for batch in docs.chunks(batch_size.max(1)) {
        let inserted = store.insert_many(collection, batch)?;
        summary.batches += 1;
        summary.inserted += inserted;
        log::info!("Inserted batch {}: {} records", summary.batches, inserted);
        thread::sleep(pause);
    }

    Ok(summary)
}
