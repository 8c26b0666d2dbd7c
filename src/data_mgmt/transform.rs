use mongodb::bson::Document;

use crate::constants::{columns, fields};

use super::models::SensorReading;

/// Source column to document field, in header order. Total over the
/// input columns.
pub const FIELD_RENAMES: [(&str, &str); 5] = [
    (columns::ID, fields::ID),
    (columns::ROOM_ID, fields::ROOM_ID),
    (columns::NOTED_DATE, fields::NOTED_DATE),
    (columns::TEMP, fields::TEMP),
    (columns::OUT_IN, fields::OUT_IN),
];

pub fn to_document(reading: SensorReading) -> Document {
    let mut doc = Document::new();
    for ((source, field), (column, value)) in FIELD_RENAMES.iter().zip(reading.into_columns()) {
        debug_assert_eq!(*source, column);
        doc.insert(*field, value);
    }
    doc
}

pub fn transform(readings: Vec<SensorReading>) -> Vec<Document> {
    readings.into_iter().map(to_document).collect()
}
