//! Sensor subsystem — the DS18B20 driver and the periodic poller.
//!
//! The poller runs on its own thread at a fixed interval. Each cycle
//! it enumerates the one-wire bus, reads the first available probe and
//! enqueues a `ReadingUpdated` event. Any driver failure logs and
//! skips the cycle; the next interval tick is the retry. Nothing here
//! blocks the dispatcher loop.

pub mod ds18b20;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::events::{Event, EventTx, SensorKind};
use ds18b20::Ds18b20;

/// How often the poller re-checks its stop flag while waiting out the
/// interval, so shutdown is not delayed by a full poll period.
const STOP_POLL_SLICE: Duration = Duration::from_millis(50);

/// Handle on the running poller thread.
pub struct Poller {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

/// Spawn the poller thread.
pub fn spawn_poller(config: &AppConfig, tx: EventTx) -> Result<Poller> {
    let interval = Duration::from_millis(config.poll_interval_ms);
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);

    let handle = thread::Builder::new()
        .name("sensor-poller".into())
        .spawn(move || {
            let bus = Ds18b20::new();
            info!("sensor poller started ({} ms interval)", interval.as_millis());

            while flag.load(Ordering::Relaxed) {
                match poll_once(&bus) {
                    Ok(value) => {
                        tx.push(Event::ReadingUpdated {
                            sensor: SensorKind::WaterTemperature,
                            value,
                        });
                    }
                    // Skip the cycle; never dispatch a partial reading.
                    Err(e) => warn!("poll cycle skipped: {e}"),
                }

                sleep_until_stopped(&flag, interval);
            }
        })
        .map_err(|_| Error::Init("spawn sensor poller"))?;

    Ok(Poller {
        running,
        handle: Some(handle),
    })
}

/// One complete poll cycle: enumerate, then read the first probe.
fn poll_once(bus: &Ds18b20) -> Result<f64> {
    let id = bus.first_device_id()?;
    bus.read_temperature(&id)
}

fn sleep_until_stopped(flag: &AtomicBool, interval: Duration) {
    let deadline = Instant::now() + interval;
    while flag.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(STOP_POLL_SLICE.min(deadline - now));
    }
}

impl Poller {
    /// Stop the polling loop and wait for the thread to exit.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        info!("sensor poller stopped");
    }
}
