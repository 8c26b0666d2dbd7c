use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

pub const HEADER: &str = "id,room_id,noted_date,temp,out_in";

pub fn row(i: usize) -> String {
    let flag = if i % 2 == 0 { "In" } else { "Out" };
    format!(
        "{},Room Admin,{:02}-12-2018 09:{:02},{},{}",
        i,
        i % 28 + 1,
        i % 60,
        20 + i % 25,
        flag
    )
}

/// Writes `sensor_data.csv` with `rows` readings into a fresh temp dir.
pub fn write_readings(rows: usize) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sensor_data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for i in 0..rows {
        writeln!(file, "{}", row(i)).unwrap();
    }
    (dir, path)
}
