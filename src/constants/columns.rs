//! Header columns of the input CSV.

pub const ID: &str = "id";
pub const ROOM_ID: &str = "room_id";
pub const NOTED_DATE: &str = "noted_date";
pub const TEMP: &str = "temp";
pub const OUT_IN: &str = "out_in";
