#![allow(warnings)]
use packed_struct::prelude::*;

use super::remap::{REMAP_KEYCODE, REMAP_MODIFIERS};
use super::KEYBOARD_DATA;

/// Different report types
pub enum ReportType {
    KeyboardData = 0x01,
    MouseData = 0x02,
    ConsumerData = 0x03,
    GamepadData = 0x04,
}

impl ReportType {
    pub const fn to_u8(&self) -> u8 {
        match self {
            ReportType::KeyboardData => ReportType::KeyboardData as u8,
            ReportType::MouseData => ReportType::MouseData as u8,
            ReportType::ConsumerData => ReportType::ConsumerData as u8,
            ReportType::GamepadData => ReportType::GamepadData as u8,
        }
    }
}

// KeyboardData
//
// Press (factory firmware, 'b')
// # ReportID: 1 / LeftControl: 0 | ... | Keyboard B: 5
// E: 000000.000024 9 01 00 00 05 00 00 00 00 00
// Release
// E: 000000.121440 9 01 00 00 00 00 00 00 00 00
#[derive(PackedStruct, Debug, Copy, Clone, PartialEq)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "9")]
pub struct KeyboardDataReport {
    // BYTE 0
    #[packed_field(bytes = "0")]
    pub report_id: u8,
    // BYTE 1
    #[packed_field(bytes = "1")]
    pub modifiers: u8,
    // BYTE 2
    #[packed_field(bytes = "2")]
    pub reserved: u8,
    // BYTE 3-8
    #[packed_field(bytes = "3..=8")]
    pub keycodes: [u8; 6],
}

impl KeyboardDataReport {
    /// The report written for every press once the remap has been applied.
    pub fn remapped_press() -> Self {
        Self {
            modifiers: REMAP_MODIFIERS,
            keycodes: [REMAP_KEYCODE, 0, 0, 0, 0, 0],
            ..Default::default()
        }
    }

    /// Returns true if the given keycode is held in this report.
    pub fn has_key(&self, code: u8) -> bool {
        self.keycodes.contains(&code)
    }

    /// Returns true if no modifier and no key is held.
    pub fn is_idle(&self) -> bool {
        self.modifiers == 0 && self.keycodes == [0; 6]
    }
}

impl Default for KeyboardDataReport {
    fn default() -> Self {
        Self {
            report_id: KEYBOARD_DATA,
            modifiers: Default::default(),
            reserved: Default::default(),
            keycodes: Default::default(),
        }
    }
}
