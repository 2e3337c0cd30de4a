use rppal::{hal::Delay, i2c::I2c};
use sht31::{Address, Error, Sht31};

fn main() -> Result<(), Error<rppal::i2c::Error>> {
    // get device impl. from rppal
    let device = I2c::new()
        .expect("could not initialize I2c on your RPi, is the interface enabled in raspi-config?");
    let delay = Delay::new();

    let mut sht31 = Sht31::new(device, delay);
    // Address::Alternate if ADDR is pulled high
    sht31.begin(Address::Default)?;

    let measurement = sht31.measure()?;
    println!(
        "{:.2} °C, {:.2} %RH",
        measurement.temperature, measurement.humidity
    );
    Ok(())
}
