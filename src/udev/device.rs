use std::{error::Error, ffi::OsStr, fs, path::Path};

/// [UdevDevice] is a lightweight, cloneable handle to a device node. The
/// sysfs-backed attributes are looked up on demand through the udev device
/// tree.
#[derive(Debug, Clone, Default)]
pub struct UdevDevice {
    devnode: String,
    subsystem: String,
    syspath: String,
    sysname: String,
}

impl UdevDevice {
    /// Returns a UdevDevice object from the given base path and name.
    /// e.g. UdevDevice::from_devnode("/dev", "hidraw0");
    pub fn from_devnode(base_path: &str, name: &str) -> Self {
        let devnode = format!("{base_path}/{name}");
        let subsystem = {
            match base_path {
                "/dev" => {
                    if name.starts_with("hidraw") {
                        Some("hidraw")
                    } else {
                        None
                    }
                }
                "/dev/input" => Some("input"),
                _ => None,
            }
        }
        .unwrap_or_default()
        .to_string();

        Self {
            devnode,
            subsystem,
            syspath: "".to_string(),
            sysname: name.to_string(),
        }
    }

    /// returns a udev::Device from the stored syspath, falling back to a
    /// subsystem/sysname lookup for handles built from a bare devnode.
    pub fn get_device(&self) -> Result<::udev::Device, Box<dyn Error + Send + Sync>> {
        if self.syspath.is_empty() {
            let device = ::udev::Device::from_subsystem_sysname(
                self.subsystem.clone(),
                self.sysname.clone(),
            )?;
            return Ok(device);
        }
        match ::udev::Device::from_syspath(Path::new(self.syspath.as_str())) {
            Ok(device) => Ok(device),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns true if this device is virtual. The daemon's own uhid
    /// keyboard enumerates like any other hidraw node; this is how it is
    /// kept out of discovery.
    pub fn is_virtual(&self) -> bool {
        let Ok(device) = self.get_device() else {
            return true;
        };
        device
            .syspath()
            .to_string_lossy()
            .to_string()
            .contains("/devices/virtual")
    }

    pub fn devnode(&self) -> String {
        self.devnode.clone()
    }

    pub fn subsystem(&self) -> String {
        self.subsystem.clone()
    }

    pub fn sysname(&self) -> String {
        self.sysname.clone()
    }

    pub fn syspath(&self) -> String {
        self.syspath.clone()
    }

    pub fn id_bustype(&self) -> u16 {
        let Ok(device) = self.get_device() else {
            return 0;
        };
        let orig = get_attribute_from_tree(&device, "id/bustype");
        let stripped = orig.strip_prefix("0x").unwrap_or(orig.as_str());
        let attr = u16::from_str_radix(stripped, 16).unwrap_or(0);
        if attr != 0 {
            return attr;
        }
        let Some(attr) = get_attribute_from_sysfs(&device, "input", "id/bustype") else {
            return 0;
        };
        u16::from_str_radix(attr.as_str(), 16).unwrap_or(0)
    }

    pub fn id_vendor(&self) -> u16 {
        let Ok(device) = self.get_device() else {
            return 0;
        };
        let orig = get_attribute_from_tree(&device, "idVendor");
        let stripped = orig.strip_prefix("0x").unwrap_or(orig.as_str());
        let attr = u16::from_str_radix(stripped, 16).unwrap_or(0);
        if attr != 0 {
            return attr;
        }
        let Some(attr) = get_attribute_from_sysfs(&device, "input", "id/vendor") else {
            return 0;
        };
        u16::from_str_radix(attr.as_str(), 16).unwrap_or(0)
    }

    pub fn id_product(&self) -> u16 {
        let Ok(device) = self.get_device() else {
            return 0;
        };
        let orig = get_attribute_from_tree(&device, "idProduct");
        let stripped = orig.strip_prefix("0x").unwrap_or(orig.as_str());
        let attr = u16::from_str_radix(stripped, 16).unwrap_or(0);
        if attr != 0 {
            return attr;
        }
        let Some(attr) = get_attribute_from_sysfs(&device, "input", "id/product") else {
            return 0;
        };
        u16::from_str_radix(attr.as_str(), 16).unwrap_or(0)
    }

    /// Friendly device name, e.g. "PCsensor FootSwitch".
    pub fn name(&self) -> String {
        let Ok(device) = self.get_device() else {
            return "".to_string();
        };
        let attr = get_attribute_from_tree(&device, "name");
        if !attr.is_empty() {
            return attr;
        }
        let Some(attr) = get_attribute_from_sysfs(&device, "input", "name") else {
            return "".to_string();
        };
        attr
    }

    /// The raw report descriptor bytes the interface advertises, read from
    /// the parent HID device in sysfs.
    pub fn report_descriptor(&self) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        let device = self.get_device()?;
        let Some(parent) = device.parent() else {
            return Err(format!("Unable to find HID parent for '{}'", self.devnode).into());
        };
        let path = format!(
            "{}/report_descriptor",
            parent.syspath().to_string_lossy()
        );
        Ok(fs::read(path)?)
    }
}

/// Looks for the given attribute at the given path using sysfs.
pub fn get_attribute_from_sysfs(
    device: &::udev::Device,
    path: &str,
    attribute: &str,
) -> Option<String> {
    let parent = device.parent()?;

    let input_path_string = format!("{}/{path}", parent.syspath().to_str()?);
    let input_path = Path::new(input_path_string.as_str());
    if !input_path.exists() {
        return None;
    }

    let paths = fs::read_dir(input_path).ok()?;

    for path in paths {
        let p = path.ok()?;
        let path = p.path();
        let attr_path_string = format!("{}/{attribute}", path.display());
        let attr_path = Path::new(attr_path_string.as_str());
        if attr_path.exists() {
            let attr = fs::read_to_string(attr_path)
                .ok()
                .map(|s| s.trim().to_string());
            if let Some(ref str) = attr {
                if str.is_empty() {
                    return None;
                }
            }
            return attr;
        }
    }

    None
}

/// Gets an attribute from the first device in the device tree to match the attribute.
pub fn get_attribute_from_tree(device: &::udev::Device, attribute: &str) -> String {
    // Check if the current device has this attribute
    let attr = match device.attribute_value(attribute) {
        Some(attr) => attr,
        None => {
            if let Some(parent) = device.parent() {
                return get_attribute_from_tree(&parent, attribute);
            } else {
                return "".to_string();
            };
        }
    };
    attr.to_string_lossy().to_string()
}

impl From<::udev::Device> for UdevDevice {
    fn from(device: ::udev::Device) -> Self {
        let devnode = device
            .devnode()
            .unwrap_or(Path::new(""))
            .to_string_lossy()
            .to_string();
        let subsystem = device
            .subsystem()
            .unwrap_or(OsStr::new(""))
            .to_string_lossy()
            .to_string();
        let sysname = device.sysname().to_string_lossy().to_string();
        let syspath = device.syspath().to_string_lossy().to_string();

        Self {
            devnode,
            subsystem,
            sysname,
            syspath,
        }
    }
}
