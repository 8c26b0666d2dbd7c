pub mod sensor_csv;

pub use sensor_csv::{read_readings, ReadError};
