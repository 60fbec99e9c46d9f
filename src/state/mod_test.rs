use std::{error::Error, fs, path::PathBuf, process};

use crate::state::{PedalState, StateFile};

fn temp_state_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("footswitchd-{tag}-{}", process::id()))
}

#[tokio::test]
async fn test_publish_writes_whole_value() -> Result<(), Box<dyn Error>> {
    let path = temp_state_path("publish");
    let state_file = StateFile::new(path.clone());

    state_file.publish(PedalState::Pressed)?;
    assert_eq!(fs::read_to_string(&path)?, "1");

    state_file.publish(PedalState::Released)?;
    assert_eq!(fs::read_to_string(&path)?, "0");

    fs::remove_file(&path)?;
    Ok(())
}

#[tokio::test]
async fn test_republishing_is_stable() -> Result<(), Box<dyn Error>> {
    let path = temp_state_path("stable");
    let state_file = StateFile::new(path.clone());

    for _ in 0..3 {
        state_file.publish(PedalState::Pressed)?;
        assert_eq!(fs::read_to_string(&path)?, "1");
    }

    fs::remove_file(&path)?;
    Ok(())
}

#[tokio::test]
async fn test_state_from_pressed_bool() -> Result<(), Box<dyn Error>> {
    assert_eq!(PedalState::from(true), PedalState::Pressed);
    assert_eq!(PedalState::from(false), PedalState::Released);
    assert_eq!(PedalState::Pressed.as_str(), "1");
    assert_eq!(PedalState::Released.as_str(), "0");

    Ok(())
}
