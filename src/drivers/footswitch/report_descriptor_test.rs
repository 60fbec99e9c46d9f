use std::error::Error;

use crate::drivers::footswitch::report_descriptor::{
    fixup, BOGUS_DESCRIPTOR_SIZE, FIXED_DESCRIPTOR, FIXED_USAGE_MINIMUM, FOOTSWITCH_DESCRIPTOR,
    FOOTSWITCH_DESCRIPTOR_SIZE,
};

/// Walk the short-item prefixes of a descriptor, returning the running
/// collection depth after each item. Panics if an item runs past the end.
fn collection_depths(desc: &[u8]) -> Vec<i32> {
    let mut depths = Vec::new();
    let mut depth = 0;
    let mut i = 0;
    while i < desc.len() {
        let prefix = desc[i];
        match prefix & 0xFC {
            0xA0 => depth += 1,
            0xC0 => depth -= 1,
            _ => (),
        }
        depths.push(depth);
        let size = match prefix & 0x03 {
            3 => 4,
            n => n as usize,
        };
        i += 1 + size;
        assert!(i <= desc.len(), "item at {} runs past the descriptor end", i);
    }
    depths
}

#[tokio::test]
async fn test_descriptor_fingerprints() -> Result<(), Box<dyn Error>> {
    assert_eq!(FOOTSWITCH_DESCRIPTOR.len(), FOOTSWITCH_DESCRIPTOR_SIZE);
    assert_eq!(FOOTSWITCH_DESCRIPTOR.len(), 212);
    assert_eq!(FIXED_DESCRIPTOR.len(), 162);
    assert_ne!(FIXED_DESCRIPTOR.len(), BOGUS_DESCRIPTOR_SIZE);

    Ok(())
}

#[tokio::test]
async fn test_fixup_swaps_only_the_fingerprinted_layout() -> Result<(), Box<dyn Error>> {
    assert_eq!(fixup(&FOOTSWITCH_DESCRIPTOR), &FIXED_DESCRIPTOR[..]);

    // Anything that doesn't match the fingerprint round-trips untouched
    let bogus = [0u8; BOGUS_DESCRIPTOR_SIZE];
    assert_eq!(fixup(&bogus), &bogus[..]);

    let other = [0x05u8, 0x01, 0x09, 0x06];
    assert_eq!(fixup(&other), &other[..]);

    let empty: [u8; 0] = [];
    assert_eq!(fixup(&empty), &empty[..]);

    // Applying the fixup to its own output is also a no-op
    assert_eq!(fixup(&FIXED_DESCRIPTOR), &FIXED_DESCRIPTOR[..]);

    Ok(())
}

#[tokio::test]
async fn test_fixed_descriptor_keeps_keyboard_layout() -> Result<(), Box<dyn Error>> {
    // Byte-identical up to the ordinary-key Usage Minimum data byte...
    assert_eq!(FOOTSWITCH_DESCRIPTOR[..59], FIXED_DESCRIPTOR[..59]);
    // ...which is the single shifted byte in the keyboard collection
    assert_eq!(FOOTSWITCH_DESCRIPTOR[59], 0x00);
    assert_eq!(FIXED_DESCRIPTOR[59], FIXED_USAGE_MINIMUM);
    // ...and identical again through the End Collection at offset 64
    assert_eq!(FOOTSWITCH_DESCRIPTOR[60..=64], FIXED_DESCRIPTOR[60..=64]);

    Ok(())
}

#[tokio::test]
async fn test_descriptors_have_balanced_collections() -> Result<(), Box<dyn Error>> {
    for desc in [&FOOTSWITCH_DESCRIPTOR[..], &FIXED_DESCRIPTOR[..]] {
        let depths = collection_depths(desc);
        assert!(depths.iter().all(|d| *d >= 0));
        assert_eq!(depths.last(), Some(&0));
    }

    Ok(())
}
