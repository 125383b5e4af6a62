//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24_radio::radio::prelude::*;
//! ```

use crate::types::{
    CrcLength, DataRate, DeviceMode, FifoState, PaLevel, StatusFlags, TransmissionOutcome,
};
use crate::Payload;

use super::{Details, RadioConfig};

/// The error type shared by every radio trait.
///
/// This mirrors [`embedded_hal::spi::ErrorType`] so that generic code only
/// needs to name one associated type.
pub trait RadioErrorType {
    type Error;
}

/// A trait to bring the radio into a known state.
pub trait RadioInit: RadioErrorType {
    /// Initialize the radio's hardware using the given `config`.
    ///
    /// The `config` is validated before any SPI transaction occurs.
    /// Fails if the radio does not answer with the expected STATUS byte
    /// after both FIFOs are flushed (usually a wiring problem).
    fn init(&mut self, config: &RadioConfig) -> Result<(), Self::Error>;
}

/// A trait to represent manipulation of data pipes.
pub trait RadioPipe: RadioErrorType {
    /// Open a specified `pipe` for receiving data when radio is in RX mode.
    ///
    /// Up to 6 pipes can be open for reading at once.  Open all the required
    /// reading pipes, and then call [`RadioMode::as_rx()`].
    ///
    /// ### About pipe addresses
    /// Pipes 0 and 1 will store a full address (truncated to
    /// [`RadioPipe::get_address_length()`]). Pipes 2-5 only store the first
    /// (least significant) byte of `address`, borrowing the remaining bytes
    /// from pipe 1.
    /// ```ignore
    /// let a = [b"Prime", b"2Node", b"3xxxx", b"4xxxx"];
    /// radio.open_rx_pipe(0, a[0])?; // address used is "Prime"
    /// radio.open_rx_pipe(1, a[1])?; // address used is "2Node"
    /// radio.open_rx_pipe(2, a[2])?; // address used is "3Node"
    /// radio.open_rx_pipe(3, a[3])?; // address used is "4Node"
    /// ```
    ///
    /// <div class="warning">
    ///
    /// The address given for pipe 0 is cached and restored at every call to
    /// [`RadioMode::as_rx()`], because [`RadioPipe::open_tx_pipe()`] borrows
    /// pipe 0 to receive auto-ack packets.
    ///
    /// </div>
    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::Error>;

    /// Set the address used for transmitting.
    ///
    /// If auto-ack is enabled, pipe 0 is also bound to `address` so that
    /// ACK packets can be received.
    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::Error>;

    /// Close a specified pipe from receiving data when radio is in RX mode.
    ///
    /// The pipe's address is reset to its factory default.
    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::Error>;

    /// Set the address length (applies to all pipes), in range [3, 5].
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::Error>;

    /// Get the currently configured address length (applied to all pipes).
    fn get_address_length(&mut self) -> Result<u8, Self::Error>;

    /// The pipe number that received the payload at the top of the RX FIFO.
    ///
    /// Returns `None` if the RX FIFO is empty.
    fn pipe(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// A trait to represent manipulation of a channel (aka frequency).
pub trait RadioChannel: RadioErrorType {
    /// Set the radio's currently selected channel, in range [0, 125].
    ///
    /// The frequency used is `2400 + channel` MHz.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::Error>;
}

/// A trait to represent manipulation of payload lengths (static or dynamic).
pub trait RadioPayloadLength: RadioErrorType {
    /// Set the length used for statically sized payloads, in range [0, 32].
    ///
    /// This is applied to the RX pipes the next time they are opened
    /// (or when entering RX mode for pipe 0).
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::Error>;

    /// Get the length used for statically sized payloads.
    fn get_payload_length(&self) -> u8;

    /// Enable or disable dynamically sized payloads.
    ///
    /// Enabling this also enables auto-ack.
    /// Disabling this also disables custom ACK payloads.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Are dynamically sized payloads enabled?
    fn get_dynamic_payloads(&self) -> bool;

    /// The length of the payload at the top of the RX FIFO.
    ///
    /// A corrupt width (greater than 32) flushes the RX FIFO and yields `0`.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::Error>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature.
pub trait RadioAutoAck: RadioErrorType {
    /// Enable or disable auto-ack (for all pipes).
    ///
    /// Disabling this also disables dynamic payloads and custom ACK payloads.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Is auto-ack enabled?
    fn get_auto_ack(&self) -> bool;

    /// Load (or stop using) a custom ACK payload for the given `pipe`.
    ///
    /// Passing `Some(payload)` enables custom ACK payloads (and with it
    /// dynamic payloads and auto-ack), then loads `payload` (1 to 32 bytes)
    /// into the TX FIFO. Passing `None` disables the custom ACK payload
    /// feature; payloads already in the TX FIFO are left alone.
    ///
    /// Returns `false` if the TX FIFO was full (the payload was not loaded).
    fn set_ack_payload(&mut self, payload: Option<&[u8]>, pipe: u8) -> Result<bool, Self::Error>;

    /// Are custom ACK payloads enabled?
    fn get_ack_payloads(&self) -> bool;
}

/// A trait to represent manipulation of the automatic retry feature.
pub trait RadioAutoRetry: RadioErrorType {
    /// Set the number of automatic retries, in range [0, 15].
    fn set_auto_retry_count(&mut self, count: u8) -> Result<(), Self::Error>;

    fn get_auto_retry_count(&mut self) -> Result<u8, Self::Error>;

    /// Set the delay between automatic retries (in microseconds).
    ///
    /// Must be a multiple of 250 in range [250, 4000].
    fn set_auto_retry_delay(&mut self, delay: u16) -> Result<(), Self::Error>;

    fn get_auto_retry_delay(&mut self) -> Result<u16, Self::Error>;

    /// The number of retries made for the last transmission.
    fn get_last_arc(&mut self) -> Result<u8, Self::Error>;

    /// The number of lost packets (saturating at 15) since the channel was last set.
    fn get_lost_packets(&mut self) -> Result<u8, Self::Error>;
}

/// A trait to represent manipulation of the power amplitude level.
pub trait RadioPaLevel: RadioErrorType {
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::Error>;
}

/// A trait to represent manipulation of the air data rate.
pub trait RadioDataRate: RadioErrorType {
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::Error>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums.
pub trait RadioCrcLength: RadioErrorType {
    /// Set the CRC length.
    ///
    /// The radio forces CRC on while auto-ack is enabled, so the value read
    /// back may differ from the value set.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::Error>;

    fn get_crc_length(&mut self) -> Result<CrcLength, Self::Error>;
}

/// A trait to represent manipulation of the power state.
pub trait RadioPower: RadioErrorType {
    /// Power the radio up (waiting for the oscillator to settle) or down.
    fn set_power(&mut self, enable: bool) -> Result<(), Self::Error>;

    fn is_powered(&mut self) -> Result<bool, Self::Error>;
}

/// A trait to represent manipulation of the status flags and IRQ pin.
pub trait RadioStatus: RadioErrorType {
    /// Configure which events trigger the radio's IRQ pin.
    fn set_irq_config(&mut self, rx_dr: bool, tx_ds: bool, max_rt: bool)
        -> Result<(), Self::Error>;

    /// Clear the flags asserted in `flags`.
    ///
    /// Use [`StatusFlags::new()`] to clear all flags.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::Error>;

    /// Refresh the cached STATUS byte with a no-op command.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// The STATUS byte cached from the last SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;
}

/// A trait to represent manipulation of the TX and RX FIFOs.
pub trait RadioFifo: RadioErrorType {
    fn flush_rx(&mut self) -> Result<(), Self::Error>;

    fn flush_tx(&mut self) -> Result<(), Self::Error>;

    /// Get the state of the TX FIFO (`about_tx` is `true`) or the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::Error>;

    /// Is the payload at the top of the TX FIFO marked for reuse?
    fn is_reuse_tx(&mut self) -> Result<bool, Self::Error>;
}

/// A trait to represent the radio's mode transitions.
pub trait RadioMode: RadioErrorType {
    /// Enter active RX mode.
    ///
    /// Flushes the RX FIFO, restores pipe 0's RX address (if one was set with
    /// [`RadioPipe::open_rx_pipe()`]) and powers up as a receiver.
    /// Returns once the radio is listening.
    fn as_rx(&mut self) -> Result<(), Self::Error>;

    /// Leave RX mode and enter Standby-I in the TX role.
    fn as_tx(&mut self) -> Result<(), Self::Error>;

    /// Is the radio powered up in the RX role?
    fn is_listening(&mut self) -> Result<bool, Self::Error>;

    /// Derive the radio's current [`DeviceMode`].
    fn get_mode(&mut self) -> Result<DeviceMode, Self::Error>;
}

/// A trait to represent sending and receiving payloads.
pub trait RadioLink: RadioErrorType {
    /// Start a transmission without waiting for it to finish.
    ///
    /// - `payload` is padded or truncated to the static payload length
    ///   unless dynamic payloads are enabled. Passing `None` re-sends the
    ///   payload marked for reuse by a previous call with `reuse_tx` set.
    /// - `ask_no_ack` requests that the receiver not acknowledge this payload.
    /// - `reuse_tx` keeps the payload in the TX FIFO after a successful transmission.
    ///
    /// This leaves the CE pin high. Keep it high for at least 10 microseconds,
    /// and no longer than 4 milliseconds.
    fn send_fast(
        &mut self,
        payload: Option<&[u8]>,
        ask_no_ack: bool,
        reuse_tx: bool,
    ) -> Result<(), Self::Error>;

    /// Transmit a payload and wait (up to `timeout_us` microseconds) for the result.
    ///
    /// If `read_ack` is set and the transmission succeeds, any ACK payload
    /// is stored for [`RadioLink::last_ack()`]. Otherwise all status flags
    /// are cleared.
    ///
    /// [`SEND_TIMEOUT_US`](crate::radio::SEND_TIMEOUT_US) is a sensible `timeout_us`.
    fn send(
        &mut self,
        payload: Option<&[u8]>,
        ask_no_ack: bool,
        reuse_tx: bool,
        read_ack: bool,
        timeout_us: u32,
    ) -> Result<TransmissionOutcome, Self::Error>;

    /// The size of the payload at the top of the RX FIFO, or `0` if it is empty.
    ///
    /// With dynamic payloads enabled, the size is queried from the radio.
    /// A corrupt size (over 32 bytes) flushes the RX FIFO and reports `0`.
    fn any(&mut self) -> Result<u8, Self::Error>;

    /// Read (and pop) the payload at the top of the RX FIFO.
    ///
    /// All status flags are cleared afterward.
    fn recv(&mut self) -> Result<Payload, Self::Error>;

    /// Store a received ACK payload (if any) for [`RadioLink::last_ack()`].
    ///
    /// This must be called before the status flags are cleared.
    /// Returns `true` if a payload was stored.
    fn read_ack(&mut self) -> Result<bool, Self::Error>;

    /// The ACK payload stored by the last successful [`RadioLink::read_ack()`].
    fn last_ack(&self) -> Option<&[u8]>;
}

/// A trait to describe the radio's configuration.
pub trait RadioDetails: RadioErrorType {
    /// Take a snapshot of the radio's configuration and state.
    fn get_details(&mut self) -> Result<Details, Self::Error>;

    /// Print the snapshot from [`RadioDetails::get_details()`].
    ///
    /// This requires either the `std` or `defmt` feature. Otherwise it does nothing.
    fn print_details(&mut self) -> Result<(), Self::Error>;
}
