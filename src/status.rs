/// Contents of the 16-bit status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u16);

impl Status {
    /// Value read when nothing answers on the bus.
    pub const ABSENT: u16 = 0xFFFF;

    pub fn bits(&self) -> u16 {
        self.0
    }

    fn bit(&self, n: u8) -> bool {
        self.0 & (1 << n) != 0
    }

    pub fn alert_pending(&self) -> bool {
        self.bit(15)
    }

    pub fn heater_on(&self) -> bool {
        self.bit(13)
    }

    pub fn humidity_alert(&self) -> bool {
        self.bit(11)
    }

    pub fn temperature_alert(&self) -> bool {
        self.bit(10)
    }

    /// Set after power-up, soft reset or a reset via the nRESET pin.
    pub fn reset_detected(&self) -> bool {
        self.bit(4)
    }

    /// The last command was not processed (invalid or failed its checksum).
    pub fn command_failed(&self) -> bool {
        self.bit(1)
    }

    pub fn write_checksum_failed(&self) -> bool {
        self.bit(0)
    }
}
