//! Field names of the documents written to the readings collection.

pub const ID: &str = "id";
pub const ROOM_ID: &str = "room_id/id";
pub const NOTED_DATE: &str = "noted_date";
pub const TEMP: &str = "temp";
pub const OUT_IN: &str = "out/in";
