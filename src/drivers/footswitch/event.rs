use super::hid_report::KeyboardDataReport;

/// Events that can be emitted by the foot switch driver
#[derive(Clone, Debug)]
pub enum Event {
    /// A keyboard report, already run through the remap rules, to forward
    /// downstream as-is.
    Report(KeyboardDataReport),
    /// The pedal changed state.
    Pedal(BinaryInput),
}

/// Binary input contain either pressed or unpressed
#[derive(Clone, Debug)]
pub struct BinaryInput {
    pub pressed: bool,
}
