use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, FifoState, PaLevel};

use super::mnemonics;

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Configure the radio's "RX Data Ready" IRQ event.
    #[bits(1, access = None)]
    pub rx_dr: bool,

    /// Configure the radio's "TX Data Sent" IRQ event.
    #[bits(1, access = None)]
    pub tx_ds: bool,

    /// Configure the radio's "Max Retries" IRQ event.
    #[bits(1, access = None)]
    pub max_rt: bool,

    #[bits(2, access = None, default = 3)]
    pub crc_length: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_val = self.into_bits() & !CrcLength::MASK | length.into_bits();
        Self::from_bits(new_val)
    }

    // The IRQ bits are masks, so an enabled event reads as a cleared bit.

    pub const fn rx_dr(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_RX_DR) == 0
    }

    pub fn with_rx_dr(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_RX_DR | ((!enable as u8) * mnemonics::MASK_RX_DR),
        )
    }

    pub const fn tx_ds(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_TX_DS) == 0
    }

    pub fn with_tx_ds(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_TX_DS | ((!enable as u8) * mnemonics::MASK_TX_DS),
        )
    }

    pub const fn max_rt(&self) -> bool {
        (self.into_bits() & mnemonics::MASK_MAX_RT) == 0
    }

    pub fn with_max_rt(self, enable: bool) -> Self {
        Self::from_bits(
            self.into_bits() & !mnemonics::MASK_MAX_RT
                | ((!enable as u8) * mnemonics::MASK_MAX_RT),
        )
    }

    pub fn as_rx(self) -> Self {
        Self::from_bits(self.into_bits() | 1)
    }

    pub fn as_tx(self) -> Self {
        Self::from_bits(self.into_bits() & !1)
    }

    /// Both `PWR_UP` and `PRIM_RX` are set.
    pub const fn is_listening(&self) -> bool {
        self.power() && self.is_rx()
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay` (in steps of 250 us, offset by 250 us).
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 3)]
    pub arc: u8,
}

impl SetupRetry {
    pub const fn delay_us(&self) -> u16 {
        self.ard() as u16 * 250 + 250
    }

    /// `delay` must already be validated as a multiple of 250 in [250, 4000].
    pub fn with_delay_us(self, delay: u16) -> Self {
        self.with_ard(((delay - 250) / 250) as u8)
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    #[bits(1)]
    _cont_wave: u8,

    #[bits(1)]
    _reserved: u8,

    #[bits(3, access = None)]
    data_rate: u8,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    #[bits(1)]
    _obsolete: u8,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_val = self.into_bits() & !DataRate::MASK;
        Self::from_bits(new_val | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _padding: u8,

    #[bits(1, default = true)]
    pub dynamic_payloads: bool,

    pub ack_payloads: bool,

    #[bits(1, default = true)]
    pub ask_no_ack: bool,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    #[bits(1, default = true)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,

    #[bits(1, default = true)]
    pub rx_empty: bool,
}

impl FifoStatus {
    pub const fn state(&self, about_tx: bool) -> FifoState {
        let (full, empty) = if about_tx {
            (self.tx_full(), self.tx_empty())
        } else {
            (self.rx_full(), self.rx_empty())
        };
        if full {
            FifoState::Full
        } else if empty {
            FifoState::Empty
        } else {
            FifoState::Occupied
        }
    }
}
