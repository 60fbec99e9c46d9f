use std::{error::Error, fmt};

use clap::ValueEnum;
use tokio::sync::{mpsc, watch};

use crate::{
    drivers::footswitch::{
        self,
        driver::ReportMode,
        event::Event,
        report_descriptor, DeviceCandidate, DEVICE_NAMES,
    },
    input::{source::hidraw::footswitch::FootSwitch, target::keyboard::VirtualKeyboard},
    state::{PedalState, StateFile},
    udev::{self, device::UdevDevice},
};

/// Size of the source event channel
const BUFFER_SIZE: usize = 2048;

/// Which remap engine a deployment runs with. Both produce the same
/// logical key; they differ in where the meaning of the report bytes is
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RemapEngine {
    /// Rewrite each press report in place and advertise the device's own
    /// descriptor.
    Report,
    /// Advertise the fixed descriptor and pass reports through untouched.
    Descriptor,
}

impl fmt::Display for RemapEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapEngine::Report => write!(f, "report"),
            RemapEngine::Descriptor => write!(f, "descriptor"),
        }
    }
}

/// Manages the lifecycle of a single remapped pedal: discovery, gating,
/// hiding, the source poll loop, the virtual keyboard target, and state
/// publication.
pub struct Manager {
    engine: RemapEngine,
    state_file: StateFile,
    devnode_override: Option<String>,
    hide: bool,
    shutdown: watch::Receiver<bool>,
}

impl Manager {
    pub fn new(
        engine: RemapEngine,
        state_file: StateFile,
        devnode_override: Option<String>,
        hide: bool,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            engine,
            state_file,
            devnode_override,
            hide,
            shutdown,
        }
    }

    /// Run the remap pipeline until shutdown is signaled or the device
    /// goes away.
    pub async fn run(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let Some((device, rdesc)) = self.select_device()? else {
            log::info!("No supported foot switch found; nothing to do");
            return Ok(());
        };
        log::info!(
            "Using foot switch '{}' at {}",
            device.name(),
            device.devnode()
        );

        // Hide the source device while the daemon owns it
        let mut hidden = false;
        if self.hide {
            match udev::hide_device(&device).await {
                Ok(_) => hidden = true,
                Err(e) => log::warn!("Unable to hide {}: {e:?}", device.devnode()),
            }
        }

        let result = self.run_pipeline(&device, rdesc).await;

        if hidden {
            if let Err(e) = udev::unhide_device(&device).await {
                log::warn!("Unable to un-hide {}: {e:?}", device.devnode());
            }
        }

        result
    }

    /// Returns the accepted pedal interface and its report descriptor, or
    /// None if nothing matched.
    fn select_device(
        &self,
    ) -> Result<Option<(UdevDevice, Vec<u8>)>, Box<dyn Error + Send + Sync>> {
        for device in self.discover()? {
            let devnode = device.devnode();
            let rdesc = match device.report_descriptor() {
                Ok(rdesc) => rdesc,
                Err(e) => {
                    log::debug!("Unable to read report descriptor for {devnode}: {e:?}");
                    continue;
                }
            };
            let candidate = DeviceCandidate {
                bustype: device.id_bustype(),
                vendor_id: device.id_vendor(),
                product_id: device.id_product(),
                rdesc_size: rdesc.len(),
            };
            if footswitch::accept(&candidate) {
                return Ok(Some((device, rdesc)));
            }
            // Not an error; the interface keeps going through the generic
            // HID path
            log::debug!("Skipping {devnode}: {candidate:?}");
        }

        Ok(None)
    }

    /// Returns candidate hidraw devices, smallest devnode first so the
    /// pick among several matching interfaces is deterministic.
    fn discover(&self) -> Result<Vec<UdevDevice>, Box<dyn Error + Send + Sync>> {
        if let Some(devnode) = self.devnode_override.as_deref() {
            let Some(name) = devnode.split('/').next_back() else {
                return Err(format!("Invalid device node '{devnode}'").into());
            };
            return Ok(vec![UdevDevice::from_devnode("/dev", name)]);
        }

        let mut devices: Vec<UdevDevice> = udev::discover_devices("hidraw")?
            .into_iter()
            .map(UdevDevice::from)
            .filter(|device| !device.is_virtual())
            .filter(|device| {
                let name = device.name();
                DEVICE_NAMES.iter().any(|expected| name.contains(expected))
            })
            .collect();
        devices.sort_by_key(|device| device.devnode());

        Ok(devices)
    }

    /// Run the source and target devices, routing reports to the virtual
    /// keyboard and pedal transitions to the state file.
    async fn run_pipeline(
        &mut self,
        device: &UdevDevice,
        rdesc: Vec<u8>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        // The engine decides which descriptor the virtual device
        // advertises and whether reports are rewritten on the way through.
        let (mode, target_rdesc) = match self.engine {
            RemapEngine::Report => (ReportMode::Remap, rdesc),
            RemapEngine::Descriptor => (
                ReportMode::Passthrough,
                report_descriptor::fixup(&rdesc).to_vec(),
            ),
        };
        log::info!("Running with the {} engine", self.engine);

        let keyboard = VirtualKeyboard::new(
            format!("{} (remapped)", device.name()),
            device.id_vendor(),
            device.id_product(),
            target_rdesc,
        );
        let report_tx = keyboard.transmitter();
        let target_task = tokio::spawn(async move {
            if let Err(e) = keyboard.run().await {
                log::error!("Virtual keyboard failed: {e:?}");
            }
        });

        // The pedal is taken to be idle when the daemon starts
        self.state_file.publish(PedalState::Released)?;
        log::debug!("Publishing pedal state to {:?}", self.state_file.path());

        let (tx, mut rx) = mpsc::channel(BUFFER_SIZE);
        let source = FootSwitch::new(device.clone(), mode);
        let shutdown = self.shutdown.clone();
        let source_task =
            tokio::spawn(async move { source.run(tx, shutdown).await });

        // Route events until the source stops
        while let Some(event) = rx.recv().await {
            match event {
                Event::Report(report) => {
                    if report_tx.send(report).await.is_err() {
                        log::error!("Virtual keyboard stopped accepting reports");
                        break;
                    }
                }
                Event::Pedal(input) => {
                    let state = PedalState::from(input.pressed);
                    log::debug!("Pedal state: {state:?}");
                    if let Err(e) = self.state_file.publish(state) {
                        log::error!("Failed to publish pedal state: {e}");
                    }
                }
            }
        }

        // Closing the last transmitter winds down the virtual keyboard
        drop(report_tx);

        if let Err(e) = source_task.await? {
            log::warn!("FootSwitch source stopped with error: {e:?}");
        }
        target_task.await?;

        Ok(())
    }
}
