//! DS18B20 one-wire temperature probe via the kernel w1 sysfs driver.
//!
//! The `w1_therm` module exposes each probe as a directory named
//! `28-xxxxxxxxxxxx` under `/sys/bus/w1/devices`; reading its
//! `w1_slave` file triggers a conversion and returns two lines:
//!
//! ```text
//! 4b 01 4b 46 7f ff 0c 10 d8 : crc=d8 YES
//! 4b 01 4b 46 7f ff 0c 10 d8 t=20687
//! ```
//!
//! The first line carries the driver's CRC verdict; the second the
//! temperature in millidegrees Celsius.

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SensorError};
use crate::pins;

/// Family code prefix of DS18B20 devices on the w1 bus.
const FAMILY_PREFIX: &str = "28-";

/// Handle on the one-wire bus directory.
pub struct Ds18b20 {
    devices_dir: PathBuf,
}

impl Ds18b20 {
    /// Bus at the standard sysfs location.
    pub fn new() -> Self {
        Self::with_devices_dir(pins::W1_DEVICES_DIR)
    }

    /// Bus rooted at an arbitrary directory (tests).
    pub fn with_devices_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            devices_dir: dir.into(),
        }
    }

    /// First available probe id on the bus, in name order.
    pub fn first_device_id(&self) -> Result<String> {
        let entries = fs::read_dir(&self.devices_dir).map_err(|_| SensorError::BusEnumerate)?;

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(FAMILY_PREFIX))
            .collect();
        ids.sort();

        ids.into_iter().next().ok_or(SensorError::NoDevices.into())
    }

    /// Read the temperature of the probe with the given id, in Celsius.
    pub fn read_temperature(&self, id: &str) -> Result<f64> {
        let path = self.devices_dir.join(id).join("w1_slave");
        let raw = fs::read_to_string(path).map_err(|_| SensorError::ReadFailed)?;
        parse_w1_payload(&raw)
    }
}

impl Default for Ds18b20 {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `w1_slave` payload into degrees Celsius.
pub fn parse_w1_payload(raw: &str) -> Result<f64> {
    let mut lines = raw.lines();

    let crc_line = lines.next().ok_or(SensorError::Malformed)?;
    if !crc_line.trim_end().ends_with("YES") {
        return Err(SensorError::CrcMismatch.into());
    }

    let temp_line = lines.next().ok_or(SensorError::Malformed)?;
    let millideg = temp_line
        .rsplit_once("t=")
        .and_then(|(_, t)| t.trim().parse::<i32>().ok())
        .ok_or(SensorError::Malformed)?;

    Ok(f64::from(millideg) / 1000.0)
}
