use super::{
    bit_fields::{Config, Feature, FifoStatus, RfSetup, SetupRetry},
    registers,
};
use crate::StatusFlags;

/// Host-side copies of the registers the driver manipulates.
///
/// None of these are authoritative. Registers the radio may change on its
/// own (CONFIG, FIFO_STATUS, SETUP_RETR, RF_SETUP) are re-read before they
/// are modified or reported. The remaining registers are only ever changed
/// by this driver, so their copies are trusted after [`RegisterShadow::store()`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegisterShadow {
    /// Updated by every SPI transaction.
    pub status: StatusFlags,
    pub config: Config,
    pub rf_setup: RfSetup,
    pub setup_retr: SetupRetry,
    pub fifo: FifoStatus,
    pub feature: Feature,
    pub en_aa: u8,
    pub dynpd: u8,
    /// EN_RXADDR
    pub open_pipes: u8,
    pub channel: u8,
    /// SETUP_AW (the address length minus 2)
    pub setup_aw: u8,
}

impl Default for RegisterShadow {
    /// The radio's power-on reset values.
    fn default() -> Self {
        Self {
            status: StatusFlags::from_bits(0x0E),
            config: Config::from_bits(0x08),
            rf_setup: RfSetup::from_bits(0x0E),
            setup_retr: SetupRetry::from_bits(0x03),
            fifo: FifoStatus::from_bits(0x11),
            feature: Feature::from_bits(0),
            en_aa: 0x3F,
            dynpd: 0,
            open_pipes: 0x03,
            channel: 0x02,
            setup_aw: 0x03,
        }
    }
}

impl RegisterShadow {
    /// Record a value read from (or written to) `register`.
    ///
    /// Registers without a shadow copy are ignored.
    pub fn store(&mut self, register: u8, value: u8) {
        match register {
            registers::CONFIG => self.config = Config::from_bits(value),
            registers::EN_AA => self.en_aa = value,
            registers::EN_RXADDR => self.open_pipes = value,
            registers::SETUP_AW => self.setup_aw = value,
            registers::SETUP_RETR => self.setup_retr = SetupRetry::from_bits(value),
            registers::RF_CH => self.channel = value,
            registers::RF_SETUP => self.rf_setup = RfSetup::from_bits(value),
            registers::STATUS => self.status = StatusFlags::from_bits(value),
            registers::FIFO_STATUS => self.fifo = FifoStatus::from_bits(value),
            registers::DYNPD => self.dynpd = value,
            registers::FEATURE => self.feature = Feature::from_bits(value),
            _ => (),
        }
    }

    /// The last known value of `register`, if it has a shadow copy.
    pub fn load(&self, register: u8) -> Option<u8> {
        match register {
            registers::CONFIG => Some(self.config.into_bits()),
            registers::EN_AA => Some(self.en_aa),
            registers::EN_RXADDR => Some(self.open_pipes),
            registers::SETUP_AW => Some(self.setup_aw),
            registers::SETUP_RETR => Some(self.setup_retr.into_bits()),
            registers::RF_CH => Some(self.channel),
            registers::RF_SETUP => Some(self.rf_setup.into_bits()),
            registers::STATUS => Some(self.status.into_bits()),
            registers::FIFO_STATUS => Some(self.fifo.into_bits()),
            registers::DYNPD => Some(self.dynpd),
            registers::FEATURE => Some(self.feature.into_bits()),
            _ => None,
        }
    }

    /// The address length in bytes (3 to 5).
    ///
    /// The illegal SETUP_AW value 0 reads as 3 bytes.
    pub const fn address_length(&self) -> u8 {
        match self.setup_aw & 3 {
            0 => 3,
            aw => aw + 2,
        }
    }

    pub const fn auto_ack(&self) -> bool {
        self.en_aa != 0
    }
}
