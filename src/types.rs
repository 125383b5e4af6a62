//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=i8} dBm", self.dbm())
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    /// The output power in dBm.
    pub const fn dbm(self) -> i8 {
        match self {
            PaLevel::Min => -18,
            PaLevel::Low => -12,
            PaLevel::High => -6,
            PaLevel::Max => 0,
        }
    }
}

impl TryFrom<i8> for PaLevel {
    type Error = InvalidSetting;

    /// Convert a power level in dBm. Only -18, -12, -6 and 0 are supported.
    fn try_from(value: i8) -> core::result::Result<Self, Self::Error> {
        match value {
            -18 => Ok(PaLevel::Min),
            -12 => Ok(PaLevel::Low),
            -6 => Ok(PaLevel::High),
            0 => Ok(PaLevel::Max),
            _ => Err(InvalidSetting::PaLevel),
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} dBm", self.dbm())
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }

    /// The air rate in kbps.
    pub const fn kbps(self) -> u16 {
        match self {
            DataRate::Mbps1 => 1000,
            DataRate::Mbps2 => 2000,
            DataRate::Kbps250 => 250,
        }
    }
}

impl TryFrom<u16> for DataRate {
    type Error = InvalidSetting;

    /// Convert an air rate in kbps. Only 250, 1000 and 2000 are supported.
    fn try_from(value: u16) -> core::result::Result<Self, Self::Error> {
        match value {
            1000 => Ok(DataRate::Mbps1),
            2000 => Ok(DataRate::Mbps2),
            250 => Ok(DataRate::Kbps250),
            _ => Err(InvalidSetting::DataRate),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    pub(crate) const MASK: u8 = 0x0C;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }

    /// EN_CRC (bit 3) gates the scheme; CRCO (bit 2) alone means nothing.
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            8 => CrcLength::Bit8,
            12 => CrcLength::Bit16,
            _ => CrcLength::Disabled,
        }
    }

    /// The checksum size in bytes.
    pub const fn bytes(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 1,
            CrcLength::Bit16 => 2,
        }
    }
}

impl TryFrom<u8> for CrcLength {
    type Error = InvalidSetting;

    /// Convert a checksum size in bytes (0, 1 or 2).
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(CrcLength::Disabled),
            1 => Ok(CrcLength::Bit8),
            2 => Ok(CrcLength::Bit16),
            _ => Err(InvalidSetting::CrcLength),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The operating state of the radio.
///
/// This is never stored by the driver. It is derived on demand from the
/// CONFIG register's `PWR_UP` and `PRIM_RX` bits, the level of the CE pin,
/// and (while in the TX role) whether the TX FIFO holds anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceMode {
    /// `PWR_UP` is cleared.
    PowerDown,
    /// Powered up with the CE pin held low.
    StandbyI,
    /// Powered up in the TX role with CE high but nothing left to send.
    StandbyII,
    /// Powered up in the RX role with CE high (listening).
    Rx,
    /// Powered up in the TX role with CE high and payloads pending.
    Tx,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DeviceMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DeviceMode::PowerDown => defmt::write!(fmt, "Power Down"),
            DeviceMode::StandbyI => defmt::write!(fmt, "Standby-I"),
            DeviceMode::StandbyII => defmt::write!(fmt, "Standby-II"),
            DeviceMode::Rx => defmt::write!(fmt, "RX"),
            DeviceMode::Tx => defmt::write!(fmt, "TX"),
        }
    }
}

impl Display for DeviceMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DeviceMode::PowerDown => write!(f, "Power Down"),
            DeviceMode::StandbyI => write!(f, "Standby-I"),
            DeviceMode::StandbyII => write!(f, "Standby-II"),
            DeviceMode::Rx => write!(f, "RX"),
            DeviceMode::Tx => write!(f, "TX"),
        }
    }
}

/// The result of a blocking transmission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransmissionOutcome {
    /// Neither `tx_ds` nor `max_rt` was asserted before the deadline.
    ///
    /// This usually means the radio is not responding (check the wiring).
    TimedOut,
    /// The payload was sent (and acknowledged if auto-ack is in use).
    Sent,
    /// The maximum number of automatic retries was reached without an ACK.
    Failed,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for TransmissionOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TransmissionOutcome::TimedOut => defmt::write!(fmt, "timed out"),
            TransmissionOutcome::Sent => defmt::write!(fmt, "sent"),
            TransmissionOutcome::Failed => defmt::write!(fmt, "failed"),
        }
    }
}

impl Display for TransmissionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TransmissionOutcome::TimedOut => write!(f, "timed out"),
            TransmissionOutcome::Sent => write!(f, "sent"),
            TransmissionOutcome::Failed => write!(f, "failed"),
        }
    }
}

/// Names the setting that was given an unsupported value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidSetting {
    /// Channel must be in range [0, 125].
    Channel,
    /// A pipe address must not be empty.
    Address,
    /// Address length must be in range [3, 5].
    AddressLength,
    /// A payload is too long, or empty while dynamic payloads are enabled.
    Payload,
    /// Payload length must be in range [0, 32].
    PayloadLength,
    /// Pipe number must be in range [0, 5].
    Pipe,
    /// Retry count must be in range [0, 15].
    RetryCount,
    /// Retry delay must be a multiple of 250 in range [250, 4000] microseconds.
    RetryDelay,
    /// Data rate must be 250, 1000 or 2000 kbps.
    DataRate,
    /// PA level must be -18, -12, -6 or 0 dBm.
    PaLevel,
    /// CRC length must be 0, 1 or 2 bytes.
    CrcLength,
    /// A re-send was requested but the TX FIFO holds no reusable payload.
    ReuseTx,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for InvalidSetting {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", defmt::Debug2Format(self))
    }
}

impl Display for InvalidSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InvalidSetting::Channel => write!(f, "channel out of range [0, 125]"),
            InvalidSetting::Address => write!(f, "address is empty"),
            InvalidSetting::AddressLength => write!(f, "address length out of range [3, 5]"),
            InvalidSetting::Payload => write!(f, "payload length is unsupported"),
            InvalidSetting::PayloadLength => write!(f, "payload length out of range [0, 32]"),
            InvalidSetting::Pipe => write!(f, "pipe number out of range [0, 5]"),
            InvalidSetting::RetryCount => write!(f, "retry count out of range [0, 15]"),
            InvalidSetting::RetryDelay => {
                write!(f, "retry delay is not a multiple of 250 in [250, 4000]")
            }
            InvalidSetting::DataRate => write!(f, "data rate is not 250, 1000 or 2000 kbps"),
            InvalidSetting::PaLevel => write!(f, "PA level is not -18, -12, -6 or 0 dBm"),
            InvalidSetting::CrcLength => write!(f, "CRC length is not 0, 1 or 2 bytes"),
            InvalidSetting::ReuseTx => write!(f, "no reusable payload in the TX FIFO"),
        }
    }
}

/// A struct used to describe the different interrupt events.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24_radio::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retries was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    #[bits(3, access = RO)]
    pub(crate) rx_pipe: u8,

    #[bits(1, access = RO)]
    pub(crate) tx_full: bool,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// RX_P_NO reads this when the RX FIFO is empty.
    pub(crate) const RX_EMPTY: u8 = 7;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all fields are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        self.with_flag(Self::RX_DR_OFFSET, flag)
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        self.with_flag(Self::TX_DS_OFFSET, flag)
    }

    /// A flag to describe if the maximum number of retries was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        self.with_flag(Self::MAX_RT_OFFSET, flag)
    }

    fn with_flag(self, offset: usize, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << offset);
        if flag {
            Self::from_bits(new_val | (1 << offset))
        } else {
            Self::from_bits(new_val)
        }
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}
