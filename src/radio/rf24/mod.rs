use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_ack;
mod auto_retry;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod features;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod shadow;
mod status;
pub(crate) use constants::MAX_CHANNEL;
pub use constants::{commands, mnemonics, registers, timing};
pub use details::Details;
use shadow::RegisterShadow;

use super::prelude::RadioErrorType;
use crate::{InvalidSetting, Payload, StatusFlags};

/// An collection of error types to describe hardware malfunctions
/// and rejected settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// The radio did not report an idle STATUS after its FIFOs were flushed.
    ///
    /// This is only checked during
    /// [`RadioInit::init()`](fn@crate::radio::prelude::RadioInit::init)
    /// and usually means the radio is not wired correctly.
    DeviceNotResponding,
    /// A setting was given an unsupported value. No SPI transaction was made.
    InvalidArgument(InvalidSetting),
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI error"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "CE pin error"),
            Nrf24Error::DeviceNotResponding => defmt::write!(fmt, "device not responding"),
            Nrf24Error::InvalidArgument(setting) => {
                defmt::write!(fmt, "invalid argument: {}", setting)
            }
        }
    }
}

impl<SPI, DO> From<InvalidSetting> for Nrf24Error<SPI, DO> {
    fn from(value: InvalidSetting) -> Self {
        Nrf24Error::InvalidArgument(value)
    }
}

/// This struct implements the [`Radio*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The radio's configuration registers are mirrored in host memory so that
/// setters only write to the radio when a value actually changes.
pub struct RadioDevice<SPI, DO, DELAY> {
    /// The time (in microseconds) to let the CSN line settle before every
    /// SPI transaction.
    ///
    /// Defaults to 5000. Many boards work with much less (or none at all).
    /// Lowering this also shortens each poll of a blocking
    /// [`RadioLink::send()`](fn@crate::radio::prelude::RadioLink::send).
    pub spi_settle_us: u32,
    _spi: SPI,
    _ce_pin: DO,
    /// The level last driven on the CE pin.
    _ce_high: bool,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _shadow: RegisterShadow,
    /// The bytes last written to pipe 0's RX address.
    _pipe0_rx_addr: Option<heapless::Vec<u8, 5>>,
    _payload_length: u8,
    _ack: Option<Payload>,
}

impl<SPI, DO, DELAY> RadioErrorType for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type Error = Nrf24Error<SPI::Error, DO::Error>;
}

impl<SPI, DO, DELAY> RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`RadioDevice`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// The `ce_pin` is assumed to be low. Nothing is sent to the radio until
    /// [`RadioInit::init()`](fn@crate::radio::prelude::RadioInit::init) is called.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> RadioDevice<SPI, DO, DELAY> {
        RadioDevice {
            spi_settle_us: timing::CSN_SETTLE_US,
            _spi: spi,
            _ce_pin: ce_pin,
            _ce_high: false,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _shadow: RegisterShadow::default(),
            _pipe0_rx_addr: None,
            _payload_length: 32,
            _ack: None,
        }
    }

    fn spi_transfer(&mut self, len: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if self.spi_settle_us > 0 {
            self._delay_impl.delay_us(self.spi_settle_us);
        }
        self._spi
            .transfer_in_place(&mut self._buf[..len as usize])
            .map_err(Nrf24Error::Spi)?;
        self._shadow.status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._shadow.status
    /// ```
    fn spi_read(&mut self, len: u8, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..=len as usize].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        command: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command | commands::W_REGISTER;
        let buf_len = buf.len().min(32);
        self._buf[1..(buf_len + 1)].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len as u8 + 1)
    }

    /// Read a register, updating its shadow copy (if it has one).
    fn refresh(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, register)?;
        let value = self._buf[1];
        self._shadow.store(register, value);
        Ok(value)
    }

    /// Write a register and its shadow copy.
    fn write_through(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_byte(register, value)?;
        self._shadow.store(register, value);
        Ok(())
    }

    /// Write a register only if `value` differs from its shadow copy.
    ///
    /// Returns `true` if a write occurred.
    fn commit(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        if self._shadow.load(register) == Some(value) {
            return Ok(false);
        }
        self.write_through(register, value)?;
        Ok(true)
    }

    fn ce_set(&mut self, high: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if high {
            self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        } else {
            self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        }
        self._ce_high = high;
        Ok(())
    }

    /// Assert then release CSN without clocking any bytes.
    ///
    /// The radio treats this as a trigger to re-send a reused TX payload.
    fn cycle_csn(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if self.spi_settle_us > 0 {
            self._delay_impl.delay_us(self.spi_settle_us);
        }
        self._spi.transaction(&mut []).map_err(Nrf24Error::Spi)
    }

    /// Is the CE pin currently driven high?
    pub fn is_ce_high(&self) -> bool {
        self._ce_high
    }

    /// Was a signal stronger than -64 dBm detected on the current channel?
    ///
    /// This is only meaningful while listening (after at least 170 microseconds in RX mode).
    pub fn rpd(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::RPD)?;
        Ok(self._buf[1] & 1 == 1)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error};
    use crate::radio::prelude::*;
    use crate::{spi_test_expects, test::mk_radio, InvalidSetting};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn test_rpd() {
        let spi_expectations = spi_test_expects![
            // get the RPD register value
            (vec![registers::RPD, 0u8], vec![0xEu8, 0xFFu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.rpd().unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn read_fills_with_zeros() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 0x55u8]),
            // the previous response is not echoed back
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 0x55u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.refresh(registers::RF_CH).unwrap(), 0x55);
        assert_eq!(radio.refresh(registers::RF_CH).unwrap(), 0x55);
        assert_eq!(radio._shadow.channel, 0x55);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn commit_skips_unchanged() {
        let spi_expectations = spi_test_expects![(
            vec![registers::EN_AA | commands::W_REGISTER, 0u8],
            vec![0xEu8, 0u8],
        ),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // EN_AA already holds its reset value
        assert!(!radio.commit(registers::EN_AA, 0x3F).unwrap());
        assert!(radio.commit(registers::EN_AA, 0).unwrap());
        assert!(!radio.commit(registers::EN_AA, 0).unwrap());
        assert_eq!(radio._shadow.en_aa, 0);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn status_tracked_from_every_transaction() {
        let spi_expectations = spi_test_expects![(vec![commands::FLUSH_RX], vec![0x4Eu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        assert!(radio.get_status_flags().rx_dr());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn ce_level_tracked() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mocks = mk_radio(&ce_expectations, &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(!radio.is_ce_high());
        radio.ce_set(true).unwrap();
        assert!(radio.is_ce_high());
        radio.ce_set(false).unwrap();
        assert!(!radio.is_ce_high());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn invalid_setting_converts() {
        let err: Nrf24Error<(), ()> = InvalidSetting::Pipe.into();
        assert_eq!(err, Nrf24Error::InvalidArgument(InvalidSetting::Pipe));
    }
}
