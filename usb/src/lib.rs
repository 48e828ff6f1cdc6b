pub use hidtemp_types::{SensorReading, SensorReadings, CHANNEL_COUNT};
pub use rusb;

pub mod device;
pub mod devices;
pub mod error;
pub mod protocol;
pub mod session;
