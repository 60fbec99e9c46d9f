use std::error::Error;

use packed_struct::PackedStruct;

use crate::drivers::footswitch::hid_report::KeyboardDataReport;
use crate::drivers::footswitch::remap::{PEDAL_KEYCODE, RELEASE_REPORT, REMAPPED_REPORT};

#[tokio::test]
async fn test_unpack_factory_press() -> Result<(), Box<dyn Error>> {
    // E: 000000.000024 9 01 00 00 05 00 00 00 00 00
    let buf = [0x01, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00];
    let report = KeyboardDataReport::unpack(&buf)?;
    println!("Report: {report:?}");

    assert_eq!(report.report_id, 0x01);
    assert_eq!(report.modifiers, 0x00);
    assert!(report.has_key(PEDAL_KEYCODE));
    assert!(!report.is_idle());

    Ok(())
}

#[tokio::test]
async fn test_unpack_release() -> Result<(), Box<dyn Error>> {
    let report = KeyboardDataReport::unpack(&RELEASE_REPORT)?;

    assert_eq!(report.report_id, 0x01);
    assert!(report.is_idle());
    assert!(!report.has_key(PEDAL_KEYCODE));

    Ok(())
}

#[tokio::test]
async fn test_default_packs_to_release() -> Result<(), Box<dyn Error>> {
    let report = KeyboardDataReport::default();
    assert_eq!(report.pack()?, RELEASE_REPORT);

    Ok(())
}

#[tokio::test]
async fn test_remapped_press_packs_to_replacement() -> Result<(), Box<dyn Error>> {
    let report = KeyboardDataReport::remapped_press();
    assert_eq!(report.pack()?, REMAPPED_REPORT);
    assert!(!report.is_idle());

    Ok(())
}
