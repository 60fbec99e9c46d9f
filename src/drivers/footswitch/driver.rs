use std::{error::Error, ffi::CString};

use hidapi::HidDevice;
use packed_struct::PackedStruct;

use crate::udev::device::UdevDevice;

use super::{
    event::{BinaryInput, Event},
    hid_report::KeyboardDataReport,
    remap::{self, ReportClass},
    DEVICE_IDS, KEYBOARD_PACKET_SIZE,
};

// HID buffer read timeout
const HID_TIMEOUT: i32 = 10;

/// What [Driver::poll] does with press reports before parsing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Rewrite every press report in place into the fixed replacement.
    Remap,
    /// Leave the report bytes exactly as the firmware sent them. Used when
    /// the remap happens in the descriptor instead.
    Passthrough,
}

pub struct Driver {
    /// HIDRAW device instance
    device: HidDevice,
    /// Whether press reports are rewritten before parsing
    mode: ReportMode,
    /// Whether or not the pedal is currently pressed.
    is_pressed: bool,
}

impl Driver {
    pub fn new(
        udevice: UdevDevice,
        mode: ReportMode,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let path = udevice.devnode();
        let cs_path = CString::new(path.clone())?;
        let api = hidapi::HidApi::new()?;
        let device = api.open_path(&cs_path)?;
        let info = device.get_device_info()?;
        if !DEVICE_IDS.contains(&(info.vendor_id(), info.product_id())) {
            return Err(format!("Device '{path}' is not a PCsensor/QinHeng FootSwitch").into());
        }

        Ok(Self {
            device,
            mode,
            is_pressed: false,
        })
    }

    /// Poll the device and read input reports
    pub fn poll(&mut self) -> Result<Vec<Event>, Box<dyn Error + Send + Sync>> {
        // Read data from the device into a buffer
        let mut buf = [0; KEYBOARD_PACKET_SIZE];
        let bytes_read = self.device.read_timeout(&mut buf[..], HID_TIMEOUT)?;
        if bytes_read == 0 {
            // Timed out with no report; nothing to do
            return Ok(vec![]);
        }

        let slice = &mut buf[..bytes_read];
        let class = match self.mode {
            ReportMode::Remap => remap::transform(slice),
            ReportMode::Passthrough => remap::classify(slice),
        };

        match class {
            ReportClass::Unhandled => {
                log::trace!("Ignoring report with ID {}", slice[0]);
                Ok(vec![])
            }
            // Either class guarantees a full keyboard packet was read
            ReportClass::Release | ReportClass::Press => self.handle_keyboard_report(buf, class),
        }
    }

    /// Unpacks the buffer into a [KeyboardDataReport] and updates the
    /// internal pedal state
    fn handle_keyboard_report(
        &mut self,
        buf: [u8; KEYBOARD_PACKET_SIZE],
        class: ReportClass,
    ) -> Result<Vec<Event>, Box<dyn Error + Send + Sync>> {
        let input_report = KeyboardDataReport::unpack(&buf)?;
        log::trace!("Got keyboard report: {input_report:?}");

        // Forward the (possibly rewritten) report downstream
        let mut events = vec![Event::Report(input_report)];

        // Emit a pedal transition when the state changed
        let pressed = class == ReportClass::Press;
        if pressed != self.is_pressed {
            log::trace!("Pedal state changed: pressed={pressed}");
            self.is_pressed = pressed;
            events.push(Event::Pedal(BinaryInput { pressed }));
        }

        Ok(events)
    }
}
