use crate::error::SensorError;
use byteorder::{BigEndian, ByteOrder};
use hidtemp_types::{SensorReading, SensorReadings, CHANNEL_COUNT};
use std::time::Duration;

/// Size of every report exchanged with the hub, in both directions.
pub const FRAME_SIZE: usize = 64;

/// Start marker, command, payload and end marker of the temperature request.
pub const REQUEST_MARKER: [u8; 4] = [0x7b, 0x03, 0x40, 0x7d];

/// Time the firmware needs to complete a measurement before the response can be read.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Status byte the hub reports in place of a temperature when no sensor is plugged in.
pub const ABSENT_SENTINEL: u8 = 0x7f;

const CHANNEL_OFFSET: usize = 1;
const CHANNEL_WIDTH: usize = 3;

/// Shortest response which still contains every channel slot.
pub const MIN_RESPONSE_LENGTH: usize = CHANNEL_OFFSET + CHANNEL_COUNT * CHANNEL_WIDTH;

pub fn request_frame() -> [u8; FRAME_SIZE] {
    let mut frame = [0; FRAME_SIZE];
    frame[..REQUEST_MARKER.len()].copy_from_slice(&REQUEST_MARKER);
    frame
}

/// Decodes a hub response into one reading per channel.
///
/// Each channel occupies a 3 byte slot starting at `1 + channel * 3`. The first two bytes
/// are a big endian, signed, temperature in tenths of a degree and the third is the
/// relative humidity in percent. A slot whose first byte is [`ABSENT_SENTINEL`] has no
/// sensor attached, the remaining bytes of that slot are ignored.
///
/// Note that a present sensor whose temperature high byte happens to be `0x7f` can't be
/// told apart from an empty channel, the hub gives us nothing else to go on.
pub fn decode_response(response: &[u8]) -> Result<SensorReadings, SensorError> {
    if response.len() < MIN_RESPONSE_LENGTH {
        return Err(SensorError::MalformedResponse {
            received: response.len(),
            required: MIN_RESPONSE_LENGTH,
        });
    }

    Ok(std::array::from_fn(|channel| {
        let start = CHANNEL_OFFSET + channel * CHANNEL_WIDTH;
        decode_slot(channel as u8, &response[start..start + CHANNEL_WIDTH])
    }))
}

fn decode_slot(channel: u8, slot: &[u8]) -> SensorReading {
    if slot[0] == ABSENT_SENTINEL {
        return SensorReading::absent(channel);
    }

    let temperature = BigEndian::read_i16(&slot[0..2]);
    SensorReading::present(channel, f32::from(temperature) / 10.0, slot[2])
}
