use crate::device::base::{HidHandle, HidOpener, UsbSettings};
use crate::devices::HidTempDevice;
use log::{debug, warn};
use rusb::{Device, DeviceHandle, Direction, GlobalContext, Recipient, RequestType, TransferType};
use std::time::Duration;

// HID class request and report type used when the interface has no interrupt OUT endpoint
const HID_SET_REPORT: u8 = 0x09;
const HID_OUTPUT_REPORT: u16 = 0x0200;

pub struct LibUsbOpener {
    settings: UsbSettings,
}

impl LibUsbOpener {
    pub fn new(settings: UsbSettings) -> Self {
        Self { settings }
    }

    fn find_device(device: &HidTempDevice) -> Result<Device<GlobalContext>, rusb::Error> {
        for usb_device in rusb::devices()?.iter() {
            if usb_device.bus_number() == device.bus_number()
                && usb_device.address() == device.address()
            {
                return Ok(usb_device);
            }
        }
        Err(rusb::Error::NoDevice)
    }

    fn find_endpoints(
        device: &Device<GlobalContext>,
        interface: u8,
    ) -> Result<(u8, Option<u8>), rusb::Error> {
        let config = device.active_config_descriptor()?;

        let mut endpoint_in = None;
        let mut endpoint_out = None;
        for usb_interface in config.interfaces() {
            if usb_interface.number() != interface {
                continue;
            }
            for descriptor in usb_interface.descriptors() {
                for endpoint in descriptor.endpoint_descriptors() {
                    if endpoint.transfer_type() != TransferType::Interrupt {
                        continue;
                    }
                    let address = Some(endpoint.address());
                    match endpoint.direction() {
                        Direction::In => endpoint_in = endpoint_in.or(address),
                        Direction::Out => endpoint_out = endpoint_out.or(address),
                    }
                }
            }
        }

        match endpoint_in {
            Some(endpoint_in) => Ok((endpoint_in, endpoint_out)),
            None => {
                warn!(
                    "Interface {} has no interrupt IN endpoint, is this a sensor hub?",
                    interface
                );
                Err(rusb::Error::NotFound)
            }
        }
    }
}

impl HidOpener for LibUsbOpener {
    type Handle = LibUsbHandle;

    fn open(&self, device: &HidTempDevice) -> Result<LibUsbHandle, rusb::Error> {
        let usb_device = Self::find_device(device)?;
        let interface = self.settings.interface;
        let (endpoint_in, endpoint_out) = Self::find_endpoints(&usb_device, interface)?;

        let mut handle = usb_device.open()?;

        // The kernel's hid driver normally owns the interface, it's handed back on release.
        match handle.set_auto_detach_kernel_driver(true) {
            Ok(()) | Err(rusb::Error::NotSupported) => {}
            Err(error) => return Err(error),
        }

        // Fails with Busy if someone else already holds the hub.
        handle.claim_interface(interface)?;

        debug!(
            "Opened {} (interface {}, in: {:#04x}, out: {:?})",
            device, interface, endpoint_in, endpoint_out
        );

        Ok(LibUsbHandle {
            handle,
            interface,
            endpoint_in,
            endpoint_out,
            timeout: self.settings.timeout,
        })
    }
}

pub struct LibUsbHandle {
    handle: DeviceHandle<GlobalContext>,
    interface: u8,
    endpoint_in: u8,
    endpoint_out: Option<u8>,
    timeout: Duration,
}

impl HidHandle for LibUsbHandle {
    fn write(&mut self, data: &[u8]) -> Result<usize, rusb::Error> {
        match self.endpoint_out {
            Some(endpoint) => self.handle.write_interrupt(endpoint, data, self.timeout),
            None => self.handle.write_control(
                rusb::request_type(Direction::Out, RequestType::Class, Recipient::Interface),
                HID_SET_REPORT,
                HID_OUTPUT_REPORT,
                u16::from(self.interface),
                data,
                self.timeout,
            ),
        }
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, rusb::Error> {
        self.handle.read_interrupt(self.endpoint_in, buffer, self.timeout)
    }

    fn close(mut self) -> Result<(), rusb::Error> {
        // The underlying libusb handle is closed when this is dropped.
        self.handle.release_interface(self.interface)
    }
}
