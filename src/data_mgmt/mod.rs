pub mod batch;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod transform;

pub use models::{LoadSummary, SensorReading};
pub use pipeline::LoadError;
