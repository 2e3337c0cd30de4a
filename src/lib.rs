//! Platform-agnostic driver for the Sensirion SHT31 (SHT3x) temperature and
//! humidity sensor, built on the blocking `embedded-hal` traits.
//!
//! ```ignore
//! use rppal::{hal::Delay, i2c::I2c};
//! use sht31::{Address, Sht31};
//!
//! let mut sht31 = Sht31::new(I2c::new()?, Delay::new());
//! sht31.begin(Address::Default)?;
//! let measurement = sht31.measure()?;
//! ```
#![cfg_attr(not(test), no_std)]

use embedded_hal::blocking::{delay, i2c};
use log::{debug, warn};

mod command;
mod config;
mod status;

pub use command::{ClockStretch, Command, Repeatability};
pub use config::{Address, Config, DecodePrecision};
pub use status::Status;

/// Time the sensor needs to come back after a soft reset.
const RESET_DELAY_MS: u16 = 10;

/// Length of a measurement frame: two words, each followed by its CRC.
const FRAME_LEN: usize = 6;

const CRC8_POLYNOMIAL: u8 = 0x31;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Sending a command failed
    Write(E),
    /// The sensor did not deliver the full response
    Read(E),
    /// A received word did not match its checksum
    Crc,
    /// The status register read back as 0xFFFF
    NoDevice,
    /// `begin` has not been called yet
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Degrees Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
}

impl Measurement {
    const UNKNOWN: Measurement = Measurement {
        temperature: f32::NAN,
        humidity: f32::NAN,
    };
}

/// Checksum-validated sensor output before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawMeasurement {
    pub temperature: u16,
    pub humidity: u16,
}

impl RawMeasurement {
    /// Validate both CRCs of a `[t_hi, t_lo, t_crc, rh_hi, rh_lo, rh_crc]`
    /// frame and extract the two words.
    pub fn from_frame<E>(frame: &[u8; FRAME_LEN]) -> Result<Self, Error<E>> {
        if crc8(&frame[0..2]) != frame[2] || crc8(&frame[3..5]) != frame[5] {
            return Err(Error::Crc);
        }
        Ok(RawMeasurement {
            temperature: combine_bytes(frame[0], frame[1]),
            humidity: combine_bytes(frame[3], frame[4]),
        })
    }

    pub fn convert(&self, precision: DecodePrecision) -> Measurement {
        Measurement {
            temperature: convert_temperature(self.temperature, precision),
            humidity: convert_humidity(self.humidity, precision),
        }
    }
}

pub struct Sht31<I2C, Delay> {
    device: I2C,
    delay: Delay,
    config: Config,
    address: Option<u8>,
    last: Measurement,
}

impl<I2C, Delay, E> Sht31<I2C, Delay>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
    Delay: delay::DelayMs<u16>,
{
    pub fn new(device: I2C, delay: Delay) -> Self {
        Self::with_config(device, delay, Config::default())
    }

    pub fn with_config(device: I2C, delay: Delay, config: Config) -> Self {
        Self {
            device,
            delay,
            config,
            address: None,
            last: Measurement::UNKNOWN,
        }
    }

    /// Give back the bus and the delay provider.
    pub fn release(self) -> (I2C, Delay) {
        (self.device, self.delay)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Select the sensor address, reset the sensor and check that something
    /// answers on the bus.
    pub fn begin(&mut self, address: Address) -> Result<(), Error<E>> {
        self.address = Some(address.value());
        self.reset();
        match self.read_status() {
            Status::ABSENT => {
                warn!("no SHT31 at {:#04x}", address.value());
                Err(Error::NoDevice)
            }
            status => {
                debug!("SHT31 at {:#04x}, status {:#06x}", address.value(), status);
                Ok(())
            }
        }
    }

    /// Soft reset. The sensor does not acknowledge it, so bus errors are
    /// dropped.
    pub fn reset(&mut self) {
        if self.write_command(Command::SoftReset).is_err() {
            warn!("soft reset not acknowledged");
        }
        self.delay.delay_ms(RESET_DELAY_MS);
    }

    /// Raw status register. A failed transfer reads as 0xFFFF, just like an
    /// empty bus does.
    pub fn read_status(&mut self) -> u16 {
        let address = match self.address {
            Some(address) => address,
            None => return Status::ABSENT,
        };
        if self.write_command(Command::ReadStatus).is_err() {
            return Status::ABSENT;
        }
        let mut data = [0xFF; 2];
        match self.device.read(address, &mut data) {
            Ok(()) => combine_bytes(data[0], data[1]),
            Err(_) => Status::ABSENT,
        }
    }

    pub fn status(&mut self) -> Status {
        Status(self.read_status())
    }

    pub fn clear_status(&mut self) {
        if self.write_command(Command::ClearStatus).is_err() {
            warn!("clear status failed");
        }
    }

    pub fn heater(&mut self, enable: bool) {
        let command = if enable {
            Command::HeaterEnable
        } else {
            Command::HeaterDisable
        };
        if self.write_command(command).is_err() {
            warn!("heater command {:#06x} failed", command.code());
        }
    }

    /// Run a measurement and return the temperature in °C, NaN on failure.
    pub fn read_temperature(&mut self) -> f32 {
        match self.measure() {
            Ok(measurement) => measurement.temperature,
            Err(_) => f32::NAN,
        }
    }

    /// Run a measurement and return the relative humidity in %, NaN on failure.
    pub fn read_humidity(&mut self) -> f32 {
        match self.measure() {
            Ok(measurement) => measurement.humidity,
            Err(_) => f32::NAN,
        }
    }

    /// One full measurement cycle: command, wait, read, validate, convert.
    /// The result is cached; a failed cycle leaves the cache alone.
    pub fn measure(&mut self) -> Result<Measurement, Error<E>> {
        let raw = self.measure_raw()?;
        Ok(self.store(raw))
    }

    /// Like `measure`, without conversion and without touching the cache.
    pub fn measure_raw(&mut self) -> Result<RawMeasurement, Error<E>> {
        self.request_measurement()?;
        self.delay.delay_ms(self.config.measurement_delay_ms);
        self.read_frame()
    }

    /// Start a measurement without waiting for it. Collect the result with
    /// `read_measurement` once the conversion time has passed.
    pub fn request_measurement(&mut self) -> Result<(), Error<E>> {
        self.write_command(Command::Measure(
            self.config.repeatability,
            ClockStretch::Disabled,
        ))
    }

    pub fn read_measurement(&mut self) -> Result<Measurement, Error<E>> {
        let raw = self.read_frame()?;
        Ok(self.store(raw))
    }

    /// Last successful measurement, NaN before the first one.
    pub fn last_measurement(&self) -> Measurement {
        self.last
    }

    fn store(&mut self, raw: RawMeasurement) -> Measurement {
        self.last = raw.convert(self.config.precision);
        debug!(
            "raw {:#06x}/{:#06x} -> {}°C {}%",
            raw.temperature, raw.humidity, self.last.temperature, self.last.humidity
        );
        self.last
    }

    fn read_frame(&mut self) -> Result<RawMeasurement, Error<E>> {
        let address = self.address.ok_or(Error::NotStarted)?;
        let mut frame = [0; FRAME_LEN];
        self.device
            .read(address, &mut frame)
            .map_err(Error::Read)?;
        RawMeasurement::from_frame(&frame).map_err(|e| {
            warn!("checksum mismatch in frame {:02x?}", frame);
            e
        })
    }

    fn write_command(&mut self, command: Command) -> Result<(), Error<E>> {
        let address = self.address.ok_or(Error::NotStarted)?;
        debug!("command {:#06x}", command.code());
        self.device
            .write(address, &command.to_bytes())
            .map_err(Error::Write)
    }
}

/// CRC-8 as used by Sensirion: polynomial 0x31, init 0xFF, no final XOR.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for byte in data {
        crc ^= *byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ CRC8_POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

fn combine_bytes(msb: u8, lsb: u8) -> u16 {
    ((msb as u16) << 8) | lsb as u16
}

fn convert_temperature(raw: u16, precision: DecodePrecision) -> f32 {
    match precision {
        DecodePrecision::FloatingPoint => raw as f32 * 175.0 / 65535.0 - 45.0,
        DecodePrecision::FixedPoint => {
            // hundredths of a degree, 175 * 100 / 65536 == 4375 / 16384
            let centi = ((4375 * raw as i32) >> 14) - 4500;
            centi as f32 / 100.0
        }
    }
}

fn convert_humidity(raw: u16, precision: DecodePrecision) -> f32 {
    match precision {
        DecodePrecision::FloatingPoint => raw as f32 * 100.0 / 65535.0,
        DecodePrecision::FixedPoint => {
            // 100 * 100 / 65536 == 625 / 4096
            let centi = (625 * raw as u32) >> 12;
            centi as f32 / 100.0
        }
    }
}
