use mongodb::bson::Bson;
use serde::Deserialize;

use crate::constants::columns;

/// One row of the input CSV, cells kept as read.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SensorReading {
    pub id: String,
    pub room_id: String,
    pub noted_date: String,
    pub temp: String,
    pub out_in: String,
}

impl SensorReading {
    /// Values keyed by their source column name, in header order.
    pub fn into_columns(self) -> [(&'static str, Bson); 5] {
        [
            (columns::ID, integer_cell(self.id)),
            (columns::ROOM_ID, Bson::String(self.room_id)),
            (columns::NOTED_DATE, Bson::String(self.noted_date)),
            (columns::TEMP, float_cell(self.temp)),
            (columns::OUT_IN, Bson::String(self.out_in)),
        ]
    }
}

// Empty cells are null; cells that do not parse stay text.
fn integer_cell(cell: String) -> Bson {
    if cell.is_empty() {
        return Bson::Null;
    }
    match cell.parse::<i64>() {
        Ok(value) => Bson::Int64(value),
        Err(_) => Bson::String(cell),
    }
}

fn float_cell(cell: String) -> Bson {
    if cell.is_empty() {
        return Bson::Null;
    }
    match cell.parse::<f64>() {
        Ok(value) => Bson::Double(value),
        Err(_) => Bson::String(cell),
    }
}

/// Outcome of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub collection_created: bool,
    pub records_read: usize,
    pub records_inserted: usize,
    pub batches: usize,
}
