use std::error::Error;

use crate::drivers::footswitch::{
    accept, DeviceCandidate, BUS_USB, PCSENSOR_PID, PCSENSOR_VID, QINHENG_PID, QINHENG_VID,
};

fn candidate(vendor_id: u16, product_id: u16, rdesc_size: usize) -> DeviceCandidate {
    DeviceCandidate {
        bustype: BUS_USB,
        vendor_id,
        product_id,
        rdesc_size,
    }
}

#[tokio::test]
async fn test_accepts_known_pedals() -> Result<(), Box<dyn Error>> {
    assert!(accept(&candidate(QINHENG_VID, QINHENG_PID, 212)));
    assert!(accept(&candidate(PCSENSOR_VID, PCSENSOR_PID, 212)));

    Ok(())
}

#[tokio::test]
async fn test_rejects_bogus_interface() -> Result<(), Box<dyn Error>> {
    // The second interface never sends anything; its 23 byte descriptor is
    // the tell
    assert!(!accept(&candidate(QINHENG_VID, QINHENG_PID, 23)));
    assert!(!accept(&candidate(PCSENSOR_VID, PCSENSOR_PID, 23)));

    Ok(())
}

#[tokio::test]
async fn test_rejects_unknown_hardware() -> Result<(), Box<dyn Error>> {
    assert!(!accept(&candidate(0x28de, 0x1205, 212)));
    assert!(!accept(&candidate(0x0000, 0x0000, 212)));
    assert!(!accept(&candidate(QINHENG_VID, 0xe027, 212)));

    Ok(())
}

#[tokio::test]
async fn test_rejects_non_usb_bus() -> Result<(), Box<dyn Error>> {
    let mut bluetooth = candidate(QINHENG_VID, QINHENG_PID, 212);
    bluetooth.bustype = 0x05;
    assert!(!accept(&bluetooth));

    Ok(())
}
