pub mod base;

mod libusb;

pub use base::{HidHandle, HidOpener, UsbSettings};
pub use libusb::device::{LibUsbHandle, LibUsbOpener};
