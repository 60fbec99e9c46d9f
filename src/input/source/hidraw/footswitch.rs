use std::{error::Error, thread, time::Duration};

use tokio::sync::{mpsc, watch};

use crate::{
    drivers::footswitch::{
        driver::{Driver, ReportMode},
        event::Event,
    },
    udev::device::UdevDevice,
};

/// How long to sleep before polling for events.
const POLL_RATE: Duration = Duration::from_micros(250);

/// FootSwitch source device implementation
pub struct FootSwitch {
    device_info: UdevDevice,
    mode: ReportMode,
}

impl FootSwitch {
    /// Create a new foot switch source device with the given udev device
    /// information
    pub fn new(device_info: UdevDevice, mode: ReportMode) -> Self {
        Self { device_info, mode }
    }

    /// Run the poll loop, forwarding driver events over the given channel,
    /// until the device goes away or shutdown is signaled. The shutdown
    /// channel is checked between poll iterations.
    pub async fn run(
        &self,
        tx: mpsc::Sender<Event>,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        log::debug!("Starting FootSwitch driver");
        let device_info = self.device_info.clone();
        let mode = self.mode;

        // Spawn a blocking task to read the events
        let task =
            tokio::task::spawn_blocking(move || -> Result<(), Box<dyn Error + Send + Sync>> {
                let mut driver = Driver::new(device_info, mode)?;
                loop {
                    if *shutdown.borrow() {
                        log::debug!("Shutdown signaled; stopping poll loop");
                        break;
                    }

                    let events = driver.poll()?;
                    for event in events {
                        tx.blocking_send(event)?;
                    }

                    thread::sleep(POLL_RATE);
                }

                Ok(())
            });

        // Wait for the task to finish
        task.await??;

        log::debug!("FootSwitch driver stopped");

        Ok(())
    }
}
