use std::{error::Error, fs::File, thread, time};

use packed_struct::PackedStruct;
use tokio::sync::mpsc::{self, error::TryRecvError};
use uhid_virt::{Bus, CreateParams, OutputEvent, StreamError, UHIDDevice};

use crate::drivers::footswitch::hid_report::KeyboardDataReport;

const POLL_INTERVAL_MS: u64 = 10;
const BUFFER_SIZE: usize = 2048;

/// Virtual keyboard that the host parses in place of the pedal. The
/// descriptor it advertises is decided by the caller: the device's own
/// descriptor when reports are rewritten on the way through, or the fixed
/// descriptor when the remap lives in the descriptor itself.
pub struct VirtualKeyboard {
    name: String,
    vendor: u16,
    product: u16,
    rdesc: Vec<u8>,
    tx: mpsc::Sender<KeyboardDataReport>,
    rx: mpsc::Receiver<KeyboardDataReport>,
}

impl VirtualKeyboard {
    pub fn new(name: String, vendor: u16, product: u16, rdesc: Vec<u8>) -> Self {
        let (tx, rx) = mpsc::channel(BUFFER_SIZE);
        Self {
            name,
            vendor,
            product,
            rdesc,
            tx,
            rx,
        }
    }

    /// Returns a transmitter channel used to feed reports to the virtual
    /// device
    pub fn transmitter(&self) -> mpsc::Sender<KeyboardDataReport> {
        self.tx.clone()
    }

    /// Creates and runs the virtual device until every transmitter has been
    /// dropped
    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        log::debug!("Creating virtual keyboard: {}", self.name);
        let mut device = self.create_virtual_device()?;
        // Dropping our own transmitter here lets the loop below end when
        // the last outside transmitter goes away.
        let Self { mut rx, .. } = self;

        // Spawn the device in its own blocking thread
        let task = tokio::task::spawn_blocking(move || {
            let mut state = KeyboardDataReport::default();
            'main: loop {
                // Handle reading from the device
                // https://www.kernel.org/doc/html/latest/hid/uhid.html#read
                let result = device.read();
                match result {
                    Ok(event) => {
                        match event {
                            OutputEvent::Start { dev_flags: _ } => {
                                log::debug!("Start event received");
                            }
                            OutputEvent::Stop => {
                                log::debug!("Stop event received");
                            }
                            OutputEvent::Open => {
                                log::debug!("Open event received");
                            }
                            OutputEvent::Close => {
                                log::debug!("Close event received");
                            }
                            OutputEvent::Output { data } => {
                                // LED output reports; nothing to drive
                                log::trace!("Got output data: {:?}", data);
                            }
                            OutputEvent::GetReport {
                                id,
                                report_number,
                                report_type,
                            } => {
                                log::debug!("Received GetReport event: id: {id}, num: {report_number}, type: {:?}", report_type);
                                if let Ok(data) = state.pack() {
                                    let _ = device.write_get_report_reply(id, 0, data.to_vec());
                                }
                            }
                            OutputEvent::SetReport {
                                id,
                                report_number,
                                report_type,
                                data,
                            } => {
                                log::debug!("Received SetReport event: id: {id}, num: {report_number}, type: {:?}, data: {:?}", report_type, data);
                                let _ = device.write_set_report_reply(id, 0);
                            }
                        };
                    }
                    Err(err) => match err {
                        StreamError::Io(_e) => (),
                        StreamError::UnknownEventType(e) => {
                            log::debug!("Unknown event type: {:?}", e);
                        }
                    },
                };

                // Drain reports received from the source device
                loop {
                    match rx.try_recv() {
                        Ok(report) => {
                            state = report;
                            let data = match state.pack() {
                                Ok(data) => data,
                                Err(e) => {
                                    log::debug!("Failed to pack input report: {:?}", e);
                                    continue;
                                }
                            };

                            // Write the report to the virtual HID
                            if let Err(e) = device.write(&data) {
                                log::error!("Failed to write input data report: {:?}", e);
                                break 'main;
                            }
                        }
                        Err(e) => match e {
                            TryRecvError::Empty => break,
                            TryRecvError::Disconnected => break 'main,
                        },
                    };
                }

                let duration = time::Duration::from_millis(POLL_INTERVAL_MS);
                thread::sleep(duration);
            }

            log::debug!("Destroying virtual keyboard");
            if let Err(e) = device.destroy() {
                log::error!("Failed to destroy device: {:?}", e);
            }
        });

        task.await?;

        Ok(())
    }

    /// Create the virtual device to emulate
    fn create_virtual_device(&self) -> Result<UHIDDevice<File>, Box<dyn Error + Send + Sync>> {
        let device = UHIDDevice::create(CreateParams {
            name: self.name.clone(),
            phys: String::from(""),
            uniq: String::from(""),
            bus: Bus::USB,
            vendor: self.vendor as u32,
            product: self.product as u32,
            version: 0,
            country: 0,
            rd_data: self.rdesc.clone(),
        })?;
        Ok(device)
    }
}
