use std::error::Error;

use crate::drivers::footswitch::remap::{
    classify, transform, ReportClass, RELEASE_REPORT, REMAPPED_REPORT,
};
use crate::drivers::footswitch::{CONSUMER_DATA, GAMEPAD_DATA, MOUSE_DATA};

#[tokio::test]
async fn test_release_is_preserved() -> Result<(), Box<dyn Error>> {
    // ReportID 1 with an all-zero payload is the pedal letting go
    let mut report = [0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    let before = report;

    let class = transform(&mut report);
    assert_eq!(class, ReportClass::Release);
    assert_eq!(report, before);

    Ok(())
}

#[tokio::test]
async fn test_press_is_rewritten() -> Result<(), Box<dyn Error>> {
    // Factory firmware press: 'b' (keycode 5) in the first key slot
    let mut report = [0x01, 0, 0, 0x05, 0, 0, 0, 0, 0, 0];

    let class = transform(&mut report);
    assert_eq!(class, ReportClass::Press);
    assert_eq!(report[..9], REMAPPED_REPORT);
    assert_eq!(report, [0x01, 0x01, 0, 0x06, 0, 0, 0, 0, 0, 0]);

    Ok(())
}

#[tokio::test]
async fn test_press_rewrite_is_idempotent() -> Result<(), Box<dyn Error>> {
    let mut report = [0x01, 0, 0, 0x05, 0, 0, 0, 0, 0];
    transform(&mut report);
    let once = report;

    let class = transform(&mut report);
    assert_eq!(class, ReportClass::Press);
    assert_eq!(report, once);

    Ok(())
}

#[tokio::test]
async fn test_modifier_only_press_is_rewritten() -> Result<(), Box<dyn Error>> {
    // Any non-release keyboard report counts as a press, whatever the
    // firmware was configured to send
    let mut report = [0x01, 0x02, 0, 0, 0, 0, 0, 0, 0];

    let class = transform(&mut report);
    assert_eq!(class, ReportClass::Press);
    assert_eq!(report, REMAPPED_REPORT);

    Ok(())
}

#[tokio::test]
async fn test_other_report_ids_are_identity() -> Result<(), Box<dyn Error>> {
    for report_id in [MOUSE_DATA, CONSUMER_DATA, GAMEPAD_DATA, 0x00, 0xFF] {
        let mut report = [report_id, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
        let before = report;

        let class = transform(&mut report);
        assert_eq!(class, ReportClass::Unhandled);
        assert_eq!(report, before);
    }

    Ok(())
}

#[tokio::test]
async fn test_truncated_buffer_is_identity() -> Result<(), Box<dyn Error>> {
    // Shorter than a keyboard packet; must not read or write out of bounds
    let mut report = [0x01, 0, 0, 0x05, 0];
    let before = report;

    let class = transform(&mut report);
    assert_eq!(class, ReportClass::Unhandled);
    assert_eq!(report, before);

    let mut empty: [u8; 0] = [];
    assert_eq!(transform(&mut empty), ReportClass::Unhandled);

    Ok(())
}

#[tokio::test]
async fn test_classify_matches_transform() -> Result<(), Box<dyn Error>> {
    let cases: [&[u8]; 6] = [
        &RELEASE_REPORT,
        &REMAPPED_REPORT,
        &[0x01, 0, 0, 0x05, 0, 0, 0, 0, 0],
        &[0x02, 0, 0, 0x05, 0, 0, 0, 0, 0],
        &[0x01, 0, 0],
        &[],
    ];
    for case in cases {
        let mut buf = case.to_vec();
        assert_eq!(classify(case), transform(&mut buf));
    }

    Ok(())
}
