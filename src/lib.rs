#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RadioDevice::new()`](fn@crate::radio::RadioDevice::new)
//! - [`RadioDevice::init()`](radio/struct.RadioDevice.html#method.init)
//! - [`RadioDevice::as_rx()`](radio/struct.RadioDevice.html#method.as_rx)
//! - [`RadioDevice::as_tx()`](radio/struct.RadioDevice.html#method.as_tx)
//! - [`RadioDevice::is_listening()`](radio/struct.RadioDevice.html#method.is_listening)
//! - [`RadioDevice::open_tx_pipe()`](radio/struct.RadioDevice.html#method.open_tx_pipe)
//! - [`RadioDevice::open_rx_pipe()`](radio/struct.RadioDevice.html#method.open_rx_pipe)
//! - [`RadioDevice::close_rx_pipe()`](radio/struct.RadioDevice.html#method.close_rx_pipe)
//! - [`RadioDevice::any()`](radio/struct.RadioDevice.html#method.any)
//! - [`RadioDevice::recv()`](radio/struct.RadioDevice.html#method.recv)
//! - [`RadioDevice::send()`](radio/struct.RadioDevice.html#method.send)
//!
//! ## Advanced API
//!
//! - [`RadioDevice::send_fast()`](radio/struct.RadioDevice.html#method.send_fast)
//! - [`RadioDevice::set_ack_payload()`](radio/struct.RadioDevice.html#method.set_ack_payload)
//! - [`RadioDevice::read_ack()`](radio/struct.RadioDevice.html#method.read_ack)
//! - [`RadioDevice::pipe()`](radio/struct.RadioDevice.html#method.pipe)
//! - [`RadioDevice::get_fifo_state()`](radio/struct.RadioDevice.html#method.get_fifo_state)
//! - [`RadioDevice::clear_status_flags()`](radio/struct.RadioDevice.html#method.clear_status_flags)
//! - [`RadioDevice::update()`](radio/struct.RadioDevice.html#method.update)
//! - [`RadioDevice::get_status_flags()`](radio/struct.RadioDevice.html#method.get_status_flags)
//! - [`RadioDevice::flush_rx()`](radio/struct.RadioDevice.html#method.flush_rx)
//! - [`RadioDevice::flush_tx()`](radio/struct.RadioDevice.html#method.flush_tx)
//! - [`RadioDevice::get_mode()`](radio/struct.RadioDevice.html#method.get_mode)
//! - [`RadioDevice::get_details()`](radio/struct.RadioDevice.html#method.get_details)
//!
//! ## Configuration API
//!
//! - [`RadioDevice::set_auto_ack()`](radio/struct.RadioDevice.html#method.set_auto_ack)
//! - [`RadioDevice::set_dynamic_payloads()`](radio/struct.RadioDevice.html#method.set_dynamic_payloads)
//! - [`RadioDevice::set_auto_retry_count()`](radio/struct.RadioDevice.html#method.set_auto_retry_count)
//! - [`RadioDevice::set_auto_retry_delay()`](radio/struct.RadioDevice.html#method.set_auto_retry_delay)
//! - [`RadioDevice::set_address_length()`](radio/struct.RadioDevice.html#method.set_address_length)
//! - [`RadioDevice::set_payload_length()`](radio/struct.RadioDevice.html#method.set_payload_length)
//! - [`RadioDevice::set_data_rate()`](radio/struct.RadioDevice.html#method.set_data_rate)
//! - [`RadioDevice::set_pa_level()`](radio/struct.RadioDevice.html#method.set_pa_level)
//! - [`RadioDevice::set_crc_length()`](radio/struct.RadioDevice.html#method.set_crc_length)
//! - [`RadioDevice::set_channel()`](radio/struct.RadioDevice.html#method.set_channel)
//! - [`RadioDevice::set_irq_config()`](radio/struct.RadioDevice.html#method.set_irq_config)
//! - [`RadioDevice::set_power()`](radio/struct.RadioDevice.html#method.set_power)
//! - [`RadioDevice::spi_settle_us`](crate::radio::RadioDevice::spi_settle_us)
//!
#![no_std]

#[macro_use]
mod fmt;

mod types;
pub use types::{
    CrcLength, DataRate, DeviceMode, FifoState, InvalidSetting, PaLevel, StatusFlags,
    TransmissionOutcome,
};
pub mod radio;

/// The largest payload (in bytes) the radio's FIFOs can hold.
pub const MAX_PAYLOAD_LENGTH: u8 = 32;

/// A received (or ACK) payload.
pub type Payload = heapless::Vec<u8, 32>;

#[cfg(test)]
mod test {
    use crate::radio::RadioDevice;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };

    /// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
    /// and generates an array of `SpiTransaction`s.
    ///
    /// NOTE: This macro is only used to generate code in unit tests (for this crate only).
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transaction_start(),
                    SpiTransaction::transfer_in_place($expected, $response),
                    SpiTransaction::transaction_end(),
                )*
            ]
        }
    }

    /// A tuple struct to encapsulate objects used to mock [`RadioDevice`],
    pub struct MockRadio(
        pub RadioDevice<SpiMock<u8>, PinMock, NoopDelay>,
        pub SpiMock<u8>,
        pub PinMock,
    );

    /// Create a mock radio using the given expectations.
    ///
    /// The CSN settle delay is zeroed so that poll loops are counted in
    /// units of the status poll interval only.
    pub fn mk_radio(
        ce_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockRadio {
        let spi = SpiMock::new(spi_expectations);
        let ce_pin = PinMock::new(ce_expectations);
        let mut radio = RadioDevice::new(ce_pin.clone(), spi.clone(), NoopDelay);
        radio.spi_settle_us = 0;
        MockRadio(radio, spi, ce_pin)
    }
}
