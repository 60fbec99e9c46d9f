//! In-place rewriting of pedal input reports.
//!
//! The pedal's factory firmware sends exactly one keyboard report while the
//! pedal is held ('b', keycode 5) and an all-zero report on release. Every
//! non-release report on the keyboard report ID is collapsed into a single
//! fixed replacement, so the rewrite keeps working even if vendor tooling
//! was used to change which key the firmware sends.

use super::{KEYBOARD_DATA, KEYBOARD_PACKET_SIZE};

/// Modifier byte written into rewritten press reports (LeftControl).
pub const REMAP_MODIFIERS: u8 = 0x01;
/// Keycode written into rewritten press reports ('c' on the keyboard usage
/// page); together with the modifier the host sees Ctrl+C.
pub const REMAP_KEYCODE: u8 = 0x06;
/// Keycode the factory firmware reports while the pedal is down ('b').
pub const PEDAL_KEYCODE: u8 = 0x05;

/// Report the pedal sends on release.
pub const RELEASE_REPORT: [u8; KEYBOARD_PACKET_SIZE] =
    [KEYBOARD_DATA, 0, 0, 0, 0, 0, 0, 0, 0];

/// Report substituted for every press.
pub const REMAPPED_REPORT: [u8; KEYBOARD_PACKET_SIZE] = [
    KEYBOARD_DATA,
    REMAP_MODIFIERS,
    0,
    REMAP_KEYCODE,
    0,
    0,
    0,
    0,
    0,
];

/// Classification of a raw input report against the remap rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportClass {
    /// Not a keyboard report (wrong report ID or truncated buffer); the
    /// bytes must be left alone.
    Unhandled,
    /// The all-zero release report; passed through so key-up stays
    /// detectable.
    Release,
    /// Any other keyboard report; subject to the rewrite.
    Press,
}

/// Classify a raw report without touching it. The release pattern is
/// matched before the catch-all press rule; swapping that order would turn
/// every idle report into a key-down.
pub fn classify(data: &[u8]) -> ReportClass {
    if data.len() < KEYBOARD_PACKET_SIZE {
        return ReportClass::Unhandled;
    }
    if data[0] != KEYBOARD_DATA {
        return ReportClass::Unhandled;
    }
    if data[..KEYBOARD_PACKET_SIZE] == RELEASE_REPORT {
        return ReportClass::Release;
    }
    ReportClass::Press
}

/// Run the remap rules over the report, rewriting press reports in place.
/// Release and unhandled reports come back byte-for-byte untouched, and
/// bytes past the keyboard report length are never written.
pub fn transform(data: &mut [u8]) -> ReportClass {
    let class = classify(data);
    if class == ReportClass::Press {
        data[..KEYBOARD_PACKET_SIZE].copy_from_slice(&REMAPPED_REPORT);
    }
    class
}
