use crate::devices::HidTempDevice;
use std::time::Duration;

// Anything able to hand out exclusive handles to a hub. The libusb backend is the real one,
// anything else is expected to behave the same way from the session's point of view.
pub trait HidOpener {
    type Handle: HidHandle;

    fn open(&self, device: &HidTempDevice) -> Result<Self::Handle, rusb::Error>;
}

pub trait HidHandle {
    /// Sends a single output report, returning the number of bytes accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, rusb::Error>;

    /// Reads a single input report into `buffer`, returning the number of bytes received.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, rusb::Error>;

    /// Releases the device. Consumes the handle, so it can only ever be attempted once.
    fn close(self) -> Result<(), rusb::Error>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UsbSettings {
    pub interface: u8,
    pub timeout: Duration,
}

impl Default for UsbSettings {
    fn default() -> Self {
        Self {
            interface: 0,
            timeout: Duration::from_secs(1),
        }
    }
}
