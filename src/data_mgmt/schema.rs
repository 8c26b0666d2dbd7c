use crate::constants::fields;
use crate::interfaces::{DocumentStore, IndexSpec, StoreError};

pub const SENSOR_INDEXES: [IndexSpec; 3] = [
    IndexSpec::descending(fields::NOTED_DATE),
    IndexSpec::ascending(fields::ROOM_ID),
    IndexSpec::ascending(fields::OUT_IN),
];

/// Creates the collection if it is missing and declares the reading
/// indexes. Safe to run on every load. Returns whether the collection
/// had to be created.
pub fn ensure_schema(store: &impl DocumentStore, collection: &str) -> Result<bool, StoreError> {
    let created = if store.has_collection(collection)? {
        false
    } else {
        store.create_collection(collection)?;
        log::info!("Created {} collection", collection);
        true
    };

    for index in SENSOR_INDEXES.iter() {
        let name = store.create_index(collection, index)?;
        log::debug!("Index {} present on {}", name, collection);
    }
    log::info!("Created indexes for efficient querying");

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::interfaces::{MemoryStore, SortOrder};

    #[test]
    fn creates_collection_and_indexes() {
        let store = MemoryStore::new();
        assert!(ensure_schema(&store, "sensor_readings").unwrap());
        assert_eq!(store.collection_names(), vec!["sensor_readings".to_string()]);

        let indexes = store.indexes("sensor_readings");
        assert_eq!(indexes.len(), 3);
        assert!(indexes.contains(&IndexSpec {
            field: "noted_date",
            order: SortOrder::Descending
        }));
        assert!(indexes.contains(&IndexSpec::ascending("room_id/id")));
        assert!(indexes.contains(&IndexSpec::ascending("out/in")));
    }

    #[test]
    fn second_call_is_a_no_op() {
        let store = MemoryStore::new();
        ensure_schema(&store, "sensor_readings").unwrap();
        assert!(!ensure_schema(&store, "sensor_readings").unwrap());
        assert_eq!(store.collection_names().len(), 1);
        assert_eq!(store.indexes("sensor_readings").len(), 3);
    }
}
