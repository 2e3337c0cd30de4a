/// Measurement repeatability, trading conversion time for noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeatability {
    High,
    Medium,
    Low,
}

/// Whether the sensor may hold SCL low until the measurement is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStretch {
    Enabled,
    Disabled,
}

/// Commands understood by the SHT3x, see table 9 onwards of the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Single shot measurement
    Measure(Repeatability, ClockStretch),
    ReadStatus,
    ClearStatus,
    SoftReset,
    HeaterEnable,
    HeaterDisable,
}

impl Command {
    pub fn code(self) -> u16 {
        use ClockStretch::*;
        use Repeatability::*;
        match self {
            Command::Measure(High, Enabled) => 0x2C06,
            Command::Measure(Medium, Enabled) => 0x2C0D,
            Command::Measure(Low, Enabled) => 0x2C10,
            Command::Measure(High, Disabled) => 0x2400,
            Command::Measure(Medium, Disabled) => 0x240B,
            Command::Measure(Low, Disabled) => 0x2416,
            Command::ReadStatus => 0xF32D,
            Command::ClearStatus => 0x3041,
            Command::SoftReset => 0x30A2,
            Command::HeaterEnable => 0x306D,
            Command::HeaterDisable => 0x3066,
        }
    }

    /// Wire representation, most significant byte first.
    pub fn to_bytes(self) -> [u8; 2] {
        self.code().to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_codes() {
        use ClockStretch::*;
        use Repeatability::*;
        assert_eq!(Command::Measure(High, Enabled).code(), 0x2C06);
        assert_eq!(Command::Measure(Medium, Enabled).code(), 0x2C0D);
        assert_eq!(Command::Measure(Low, Enabled).code(), 0x2C10);
        assert_eq!(Command::Measure(High, Disabled).code(), 0x2400);
        assert_eq!(Command::Measure(Medium, Disabled).code(), 0x240B);
        assert_eq!(Command::Measure(Low, Disabled).code(), 0x2416);
    }

    #[test]
    fn housekeeping_codes() {
        assert_eq!(Command::ReadStatus.code(), 0xF32D);
        assert_eq!(Command::ClearStatus.code(), 0x3041);
        assert_eq!(Command::SoftReset.code(), 0x30A2);
        assert_eq!(Command::HeaterEnable.code(), 0x306D);
        assert_eq!(Command::HeaterDisable.code(), 0x3066);
    }

    #[test]
    fn bytes_are_big_endian() {
        assert_eq!(Command::ReadStatus.to_bytes(), [0xF3, 0x2D]);
        assert_eq!(Command::SoftReset.to_bytes(), [0x30, 0xA2]);
    }
}
