use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data_mgmt::models::SensorReading;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("CSV file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads every row of the file into memory.
pub fn read_readings(path: &Path) -> Result<Vec<SensorReading>, ReadError> {
    log::info!("Reading data from {}", path.display());
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        _ => ReadError::Io(e),
    })?;
    parse_readings(file)
}

/// Parses CSV with a header row. Columns are matched by name; extra
/// columns are ignored and a missing one fails the whole read.
pub fn parse_readings<R: Read>(reader: R) -> Result<Vec<SensorReading>, ReadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let readings = rdr
        .deserialize::<SensorReading>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(readings)
}
