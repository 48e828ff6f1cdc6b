use crate::device::{HidHandle, HidOpener};
use crate::devices::HidTempDevice;
use crate::error::SensorError;
use crate::protocol::{self, FRAME_SIZE, SETTLE_DELAY};
use hidtemp_types::SensorReadings;
use log::{debug, error, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::sleep;

/// Serialises every exchange with every hub through a single lock. Only one
/// open -> write -> settle -> read -> close cycle runs at a time, and the handle is closed on
/// every path out of it.
///
/// These calls block for at least [`SETTLE_DELAY`], so keep them off any thread which needs
/// to stay responsive.
pub struct DeviceSession<O: HidOpener> {
    opener: O,
    lock: Mutex<()>,
}

#[derive(Debug)]
#[must_use]
pub struct QueryOutcome {
    pub result: Result<SensorReadings, SensorError>,

    // Set when the device couldn't be released afterwards, this doesn't affect the result.
    pub close_error: Option<SensorError>,
}

impl QueryOutcome {
    pub fn into_result(self) -> Result<SensorReadings, SensorError> {
        self.result
    }
}

impl<O: HidOpener> DeviceSession<O> {
    pub fn new(opener: O) -> Self {
        Self {
            opener,
            lock: Mutex::new(()),
        }
    }

    /// Opens and immediately closes the device, without talking to it.
    pub fn check_reachable(&self, device: &HidTempDevice) -> bool {
        let _guard = self.acquire();

        match self.opener.open(device) {
            Ok(handle) => {
                if let Err(error) = handle.close() {
                    error!("Closing {} failed: {}", device, error);
                }
                true
            }
            Err(error) => {
                debug!("{} is not reachable: {}", device, error);
                false
            }
        }
    }

    pub fn query_once(&self, device: &HidTempDevice) -> QueryOutcome {
        let _guard = self.acquire();

        debug!("Opening device {}..", device);
        let mut handle = match self.opener.open(device) {
            Ok(handle) => handle,
            Err(error) => {
                warn!("Opening {} failed: {}", device, error);
                return QueryOutcome {
                    result: Err(SensorError::OpenFailure(error)),
                    close_error: None,
                };
            }
        };

        let result = exchange(&mut handle);
        if let Err(error) = &result {
            warn!("Querying {} failed: {}", device, error);
        }

        debug!("Closing device {}..", device);
        let close_error = handle.close().err().map(|error| {
            error!("Closing {} failed: {}", device, error);
            SensorError::CloseFailure(error)
        });

        QueryOutcome {
            result,
            close_error,
        }
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // Nothing lives behind the lock, so a panic elsewhere can't have left it inconsistent.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn exchange<H: HidHandle>(handle: &mut H) -> Result<SensorReadings, SensorError> {
    let request = protocol::request_frame();
    debug!("Writing to device: {:x?}", request);

    let written = handle.write(&request).map_err(SensorError::WriteFailure)?;
    if written != request.len() {
        return Err(SensorError::IncompleteWrite {
            written,
            expected: request.len(),
        });
    }
    debug!("Wrote {} bytes", written);

    sleep(SETTLE_DELAY);

    let mut response = [0; FRAME_SIZE];
    let read = handle.read(&mut response).map_err(SensorError::ReadFailure)?;
    let response = &response[..read.min(FRAME_SIZE)];
    debug!("Read result ({} bytes): {:x?}", response.len(), response);

    protocol::decode_response(response)
}
