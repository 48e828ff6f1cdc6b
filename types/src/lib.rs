#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Number of measurement slots reported by a single hub.
pub const CHANNEL_COUNT: usize = 7;

/// A single decoded channel from one hub response. Temperature and humidity
/// are zero, and carry no meaning, when `present` is false.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    pub channel: u8,
    pub temperature: f32,
    pub humidity: u8,
    pub present: bool,
}

impl SensorReading {
    pub fn present(channel: u8, temperature: f32, humidity: u8) -> Self {
        Self {
            channel,
            temperature,
            humidity,
            present: true,
        }
    }

    pub fn absent(channel: u8) -> Self {
        Self {
            channel,
            ..Default::default()
        }
    }
}

impl std::fmt::Display for SensorReading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.present {
            write!(
                f,
                "Channel {}: {:.1}°C  {}%",
                self.channel, self.temperature, self.humidity
            )
        } else {
            write!(f, "No sensor on Channel {}", self.channel)
        }
    }
}

pub type SensorReadings = [SensorReading; CHANNEL_COUNT];
