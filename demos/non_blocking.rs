use std::{thread, time::Duration};

use embedded_hal::blocking::delay::DelayMs;
use rppal::{hal::Delay, i2c::I2c};
use sht31::{Address, Config, Error, Sht31};

fn main() -> Result<(), Error<rppal::i2c::Error>> {
    let device = I2c::new()
        .expect("could not initialize I2c on your RPi, is the interface enabled in raspi-config?");

    let mut sht31 = Sht31::new(device, Delay::new());
    sht31.begin(Address::Default)?;

    let mut other_work = Delay::new();
    loop {
        // the caller owns the wait between request and collect
        sht31.request_measurement()?;
        other_work.delay_ms(Config::CONSERVATIVE_DELAY_MS);

        match sht31.read_measurement() {
            Ok(m) => println!("{:.2} °C, {:.2} %RH", m.temperature, m.humidity),
            Err(e) => println!("failed to read sensor: {:?}", e),
        }
        thread::sleep(Duration::from_secs(1));
    }
}
