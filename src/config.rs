use crate::command::Repeatability;

/// I2C address of the sensor, selected by the level of the ADDR pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// ADDR pulled low, 0x44
    Default,
    /// ADDR pulled high, 0x45
    Alternate,
    Custom(u8),
}

impl Address {
    pub fn value(self) -> u8 {
        match self {
            Address::Default => 0x44,
            Address::Alternate => 0x45,
            Address::Custom(addr) => addr,
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Address::Default
    }
}

/// How raw readings are turned into physical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodePrecision {
    /// Datasheet formulas evaluated in `f32`.
    FloatingPoint,
    /// Integer shifts dividing by 65536 instead of 65535. Stays within 0.02 of
    /// the floating point result and is cheaper on cores without an FPU.
    FixedPoint,
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Wait between the measurement command and reading the frame.
    pub measurement_delay_ms: u16,
    pub precision: DecodePrecision,
    pub repeatability: Repeatability,
}

impl Config {
    pub const CONSERVATIVE_DELAY_MS: u16 = 500;
    pub const FAST_DELAY_MS: u16 = 20;

    /// Short wait and integer decoding, for parts known to finish a high
    /// repeatability measurement within 20ms.
    pub fn fast() -> Self {
        Config {
            measurement_delay_ms: Self::FAST_DELAY_MS,
            precision: DecodePrecision::FixedPoint,
            repeatability: Repeatability::High,
        }
    }

    pub fn with_measurement_delay_ms(mut self, ms: u16) -> Self {
        self.measurement_delay_ms = ms;
        self
    }

    pub fn with_precision(mut self, precision: DecodePrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_repeatability(mut self, repeatability: Repeatability) -> Self {
        self.repeatability = repeatability;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            measurement_delay_ms: Self::CONSERVATIVE_DELAY_MS,
            precision: DecodePrecision::FloatingPoint,
            repeatability: Repeatability::High,
        }
    }
}
