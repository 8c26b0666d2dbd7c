use std::time::Duration;

pub const LOG_LEVEL: &str = "info";

pub const HOST: &str = "localhost";
pub const PORT: u16 = 27017;
pub const USER: &str = "";
pub const PASSWORD: &str = "";
pub const DB_NAME: &str = "sensor_database";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub const COLLECTION: &str = "sensor_readings";
pub const CSV_PATH: &str = "sensor_data.csv";
pub const BATCH_SIZE: usize = 1000;
pub const BATCH_PAUSE: Duration = Duration::from_millis(100);
