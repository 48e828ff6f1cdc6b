use std::fmt::Formatter;

// A device is located by where it sits on the bus, finding it is left to the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HidTempDevice {
    pub(crate) bus_number: u8,
    pub(crate) address: u8,
}

impl HidTempDevice {
    pub fn new(bus_number: u8, address: u8) -> Self {
        Self {
            bus_number,
            address,
        }
    }

    pub fn bus_number(&self) -> u8 {
        self.bus_number
    }
    pub fn address(&self) -> u8 {
        self.address
    }
}

impl std::fmt::Display for HidTempDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bus {:03} Device {:03}", self.bus_number, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_matches_lsusb() {
        let device = HidTempDevice::new(3, 12);
        assert_eq!((device.bus_number(), device.address()), (3, 12));
        assert_eq!(device.to_string(), "Bus 003 Device 012");
    }
}
