//! Runs against a local MongoDB on the default port.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::sync::Client;

use sensor_loader::config::LoaderConfig;
use sensor_loader::data_mgmt::pipeline;
use sensor_loader::interfaces::MongoStore;

mod stubs;

const TEST_DB: &str = "sensor_loader_test";

#[test]
#[ignore = "needs a MongoDB server on localhost:27017"]
fn loads_into_live_database() {
    let (_dir, path) = stubs::readings::write_readings(2500);
    let config = LoaderConfig {
        db_name: TEST_DB.into(),
        ..Default::default()
    }
    .with_csv_path(&path)
    .with_batch_pause(Duration::ZERO);

    let client = Client::with_uri_str("mongodb://localhost:27017").unwrap();
    client.database(TEST_DB).drop(None).unwrap();

    let store = MongoStore::connect(&config).unwrap();
    let summary = pipeline::run(&config, &store).unwrap();
    assert_eq!(summary.batches, 3);

    // idempotent schema on a second pass
    pipeline::run(&config, &store).unwrap();

    let coll = client
        .database(TEST_DB)
        .collection::<mongodb::bson::Document>("sensor_readings");
    assert_eq!(coll.count_documents(None, None).unwrap(), 5000);
    assert!(coll.find_one(doc! { "room_id/id": "Room Admin" }, None).unwrap().is_some());

    let names = coll.list_index_names().unwrap();
    for name in ["_id_", "noted_date_-1", "room_id/id_1", "out/in_1"] {
        assert!(names.iter().any(|n| n == name), "missing index {name}");
    }
    assert_eq!(names.len(), 4);

    client.database(TEST_DB).drop(None).unwrap();
}
