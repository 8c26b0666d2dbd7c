use crate::config::LoaderConfig;
use crate::data_mgmt::{pipeline, LoadError, LoadSummary};
use crate::interfaces::{MemoryStore, MongoStore};

pub fn load(config: &LoaderConfig) -> Result<LoadSummary, LoadError> {
    let summary = if config.dry_run {
        log::info!("Dry run: readings are loaded into memory only");
        pipeline::run(config, &MemoryStore::new())?
    } else {
        let store = MongoStore::connect(config).map_err(LoadError::Connect)?;
        pipeline::run(config, &store)?
    };

    log::info!(
        "Data loading process completed successfully ({} records in {} batches)",
        summary.records_inserted,
        summary.batches
    );
    Ok(summary)
}
