pub mod device;

use std::{error::Error, fs, path::Path};

use tokio::process::Command;
use udev::Enumerator;

use self::device::UdevDevice;

const RULES_PREFIX: &str = "/run/udev/rules.d";

/// Hide the given source device from regular users so other HID consumers
/// leave it alone while the daemon owns it.
pub async fn hide_device(device: &UdevDevice) -> Result<(), Box<dyn Error + Send + Sync>> {
    let name = device.sysname();
    let path = device.devnode();
    let subsystem = device.subsystem();
    if name.is_empty() || subsystem.is_empty() {
        return Err(format!("Unable to create match rule for device '{path}'").into());
    }

    // Find the chmod command to use for hiding
    let chmod_cmd = if Path::new("/bin/chmod").exists() {
        "/bin/chmod"
    } else {
        "/usr/bin/chmod"
    };

    // Create a udev rule to hide the device
    let rule = format!(
        r#"# Hides {path} while it is remapped
# Managed by footswitchd, this file is removed when the daemon lets go of the device.
KERNEL=="{name}", SUBSYSTEM=="{subsystem}", MODE="000", GROUP="root", TAG-="uaccess", RUN+="{chmod_cmd} 000 {path}"
"#
    );

    // Write the udev rule
    fs::create_dir_all(RULES_PREFIX)?;
    let rule_path = format!("{RULES_PREFIX}/96-footswitchd-hide-{name}.rules");
    fs::write(rule_path, rule)?;

    // Reload udev
    reload_device(device).await?;

    Ok(())
}

/// Unhide the given source device
pub async fn unhide_device(device: &UdevDevice) -> Result<(), Box<dyn Error + Send + Sync>> {
    let name = device.sysname();
    let rule_path = format!("{RULES_PREFIX}/96-footswitchd-hide-{name}.rules");
    fs::remove_file(rule_path)?;

    // Reload udev
    reload_device(device).await?;

    Ok(())
}

/// Unhide all devices hidden by footswitchd
pub async fn unhide_all() -> Result<(), Box<dyn Error + Send + Sync>> {
    let entries = fs::read_dir(RULES_PREFIX)?;
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let filename = entry.file_name().to_string_lossy().to_string();
        if !filename.starts_with("96-footswitchd-hide") {
            continue;
        }
        let path = entry.path().to_string_lossy().to_string();
        fs::remove_file(path)?;
    }

    // Reload udev rules
    reload_all().await?;

    Ok(())
}

/// Trigger udev to re-evaluate rules on the given device
async fn reload_device(device: &UdevDevice) -> Result<(), Box<dyn Error + Send + Sync>> {
    let syspath = device
        .get_device()?
        .syspath()
        .to_string_lossy()
        .to_string();

    let _ = Command::new("udevadm")
        .args(["control", "--reload-rules"])
        .output()
        .await?;

    for action in ["remove", "add"] {
        let _ = Command::new("udevadm")
            .args(["trigger", "--action", action, syspath.as_str()])
            .output()
            .await?;
    }

    Ok(())
}

/// Trigger udev to re-evaluate rules on every device
async fn reload_all() -> Result<(), Box<dyn Error + Send + Sync>> {
    let _ = Command::new("udevadm")
        .args(["control", "--reload-rules"])
        .output()
        .await?;

    let _ = Command::new("udevadm").arg("trigger").output().await?;

    Ok(())
}

/// Returns a list of devices in the given subsystem.
pub fn discover_devices(
    subsystem: &str,
) -> Result<Vec<udev::Device>, Box<dyn Error + Send + Sync>> {
    let mut enumerator = Enumerator::new()?;
    enumerator.match_subsystem(subsystem)?;

    log::debug!("Started udev {subsystem} enumerator.");

    Ok(enumerator.scan_devices()?.into_iter().collect())
}
