use super::{commands, registers, timing};
use crate::radio::prelude::*;
use crate::radio::RadioDevice;
use crate::{
    DeviceMode, InvalidSetting, Payload, StatusFlags, TransmissionOutcome, MAX_PAYLOAD_LENGTH,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> RadioMode for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn as_rx(&mut self) -> Result<(), Self::Error> {
        self.flush_rx()?;
        self.clear_status_flags(StatusFlags::default().with_rx_dr(true))?;
        if self._ce_high {
            // fall back to Standby-I
            self.ce_set(false)?;
        }
        self.spi_write_byte(registers::RX_PW_P0, self._payload_length)?;

        // open_tx_pipe() may have overwritten pipe 0's RX address
        if let Some(addr) = self._pipe0_rx_addr.clone() {
            let width = addr.len().min(self._shadow.address_length() as usize);
            self.spi_write_buf(registers::RX_ADDR_P0, &addr[..width])?;
        }

        self.refresh(registers::CONFIG)?;
        let value = self._shadow.config.with_power(true).as_rx().into_bits();
        self.commit(registers::CONFIG, value)?;
        self._delay_impl.delay_us(timing::POWER_UP_US);
        self.ce_set(true)?;
        // the radio needs 130 us to start listening
        self._delay_impl.delay_us(timing::RX_SETTLE_US);
        debug!("entered RX mode");
        Ok(())
    }

    /// The power state is left unchanged.
    fn as_tx(&mut self) -> Result<(), Self::Error> {
        if self._ce_high {
            self.ce_set(false)?;
        }
        self.refresh(registers::CONFIG)?;
        let value = self._shadow.config.as_tx().into_bits();
        self.commit(registers::CONFIG, value)?;
        debug!("entered TX role");
        Ok(())
    }

    fn is_listening(&mut self) -> Result<bool, Self::Error> {
        self.refresh(registers::CONFIG)?;
        Ok(self._shadow.config.is_listening())
    }

    /// The mode is derived from CONFIG, the CE pin's level, and (in the TX role)
    /// whether the TX FIFO has anything left to send.
    fn get_mode(&mut self) -> Result<DeviceMode, Self::Error> {
        self.refresh(registers::CONFIG)?;
        let config = self._shadow.config;
        if config.power() && self._ce_high && !config.is_rx() {
            self.refresh(registers::FIFO_STATUS)?;
        }
        Ok(self.derive_mode())
    }
}

impl<SPI, DO, DELAY> RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Derive the mode from the shadowed CONFIG and FIFO_STATUS registers.
    pub(super) fn derive_mode(&self) -> DeviceMode {
        let config = self._shadow.config;
        if !config.power() {
            DeviceMode::PowerDown
        } else if !self._ce_high {
            DeviceMode::StandbyI
        } else if config.is_rx() {
            DeviceMode::Rx
        } else if self._shadow.fifo.tx_empty() {
            DeviceMode::StandbyII
        } else {
            DeviceMode::Tx
        }
    }
}

impl<SPI, DO, DELAY> RadioLink for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Remember, the nRF24L01's active TX mode is activated by the nRF24L01's CE pin.
    ///
    /// <div class="warning">
    ///
    /// To transmit a payload the radio's CE pin must be active for at least 10 microseconds.
    /// The caller is required to ensure the CE pin has been active for at least 10
    /// microseconds when using this function, thus non-blocking behavior.
    ///
    /// </div>
    ///
    /// Passing `None` without a reusable payload in the TX FIFO fails with
    /// [`InvalidSetting::ReuseTx`].
    fn send_fast(
        &mut self,
        payload: Option<&[u8]>,
        ask_no_ack: bool,
        reuse_tx: bool,
    ) -> Result<(), Self::Error> {
        match payload {
            Some(buf) => {
                if buf.is_empty() || buf.len() > MAX_PAYLOAD_LENGTH as usize {
                    return Err(InvalidSetting::Payload.into());
                }
            }
            None => {
                self.refresh(registers::FIFO_STATUS)?;
                if !self._shadow.fifo.tx_reuse() {
                    return Err(InvalidSetting::ReuseTx.into());
                }
            }
        }

        // power up in the TX role (if not already)
        self.refresh(registers::CONFIG)?;
        let was_powered = self._shadow.config.power();
        let value = self._shadow.config.with_power(true).as_tx().into_bits();
        self.commit(registers::CONFIG, value)?;
        if !was_powered {
            self._delay_impl.delay_us(timing::POWER_UP_US);
        }

        match payload {
            // re-send the reused payload
            None => self.cycle_csn()?,
            // keep the next payload in the TX FIFO after it is sent
            Some(_) if reuse_tx => self.spi_read(0, commands::REUSE_TX_PL)?,
            Some(_) => self.flush_tx()?,
        }
        self.clear_status_flags(StatusFlags::default().with_tx_ds(true).with_max_rt(true))?;

        if let Some(buf) = payload {
            let len = if self._shadow.feature.dynamic_payloads() {
                buf.len()
            } else {
                self._payload_length as usize
            };
            // to avoid copying the given buf, we'll have to use self._buf directly
            self._buf[0] = if ask_no_ack || !self._shadow.auto_ack() {
                commands::W_TX_PAYLOAD_NO_ACK
            } else {
                commands::W_TX_PAYLOAD
            };
            let copied = buf.len().min(len);
            self._buf[1..=copied].copy_from_slice(&buf[..copied]);
            // pad to the static payload length
            self._buf[copied + 1..=len].fill(0);
            self.spi_transfer(len as u8 + 1)?;
            trace!("loaded {=usize} byte payload", len);
        }
        self.ce_set(true)
    }

    /// This drives the CE pin low upon exit, so only the payload at the top
    /// of the TX FIFO is transmitted.
    ///
    /// The `timeout_us` deadline counts the CSN settle time and poll interval
    /// of each STATUS poll.
    fn send(
        &mut self,
        payload: Option<&[u8]>,
        ask_no_ack: bool,
        reuse_tx: bool,
        read_ack: bool,
        timeout_us: u32,
    ) -> Result<TransmissionOutcome, Self::Error> {
        // PWR_UP and PRIM_RX are only safely changed in Standby-I
        self.ce_set(false)?;
        self.send_fast(payload, ask_no_ack, reuse_tx)?;
        self._delay_impl.delay_us(timing::TX_PULSE_US);
        self.ce_set(false)?;

        let mut outcome = TransmissionOutcome::TimedOut;
        let mut elapsed = 0u32;
        while elapsed < timeout_us {
            self.spi_read(0, commands::NOP)?;
            let status = self._shadow.status;
            if status.tx_ds() {
                outcome = TransmissionOutcome::Sent;
                break;
            }
            if status.max_rt() {
                outcome = TransmissionOutcome::Failed;
                break;
            }
            self._delay_impl.delay_us(timing::POLL_INTERVAL_US);
            elapsed = elapsed
                .saturating_add(self.spi_settle_us)
                .saturating_add(timing::POLL_INTERVAL_US);
        }
        if outcome == TransmissionOutcome::TimedOut {
            warn!("transmission timed out after {=u32} us", elapsed);
        } else {
            debug!("transmission {}", outcome);
        }

        // recv() already cleared the flags if an ACK payload was stored
        if !(read_ack && outcome == TransmissionOutcome::Sent && self.read_ack()?) {
            self.clear_status_flags(StatusFlags::new())?;
        }
        Ok(outcome)
    }

    /// With dynamic payloads enabled, the width is queried from the radio.
    fn any(&mut self) -> Result<u8, Self::Error> {
        self.spi_read(0, commands::NOP)?;
        if self._shadow.status.rx_pipe() == StatusFlags::RX_EMPTY {
            return Ok(0);
        }
        if self._shadow.feature.dynamic_payloads() {
            self.get_dynamic_payload_length()
        } else {
            Ok(self._payload_length)
        }
    }

    /// Reading a payload pops it from the RX FIFO.
    fn recv(&mut self) -> Result<Payload, Self::Error> {
        let length = if self._shadow.feature.dynamic_payloads() {
            self.get_dynamic_payload_length()?
        } else {
            self._payload_length
        };
        let mut payload = Payload::new();
        if length > 0 {
            self.spi_read(length, commands::R_RX_PAYLOAD)?;
            payload = Payload::from_slice(&self._buf[1..=length as usize]).unwrap_or_default();
        }
        self.clear_status_flags(StatusFlags::new())?;
        debug!("received {=u8} bytes", length);
        Ok(payload)
    }

    fn read_ack(&mut self) -> Result<bool, Self::Error> {
        if self.any()? == 0 {
            return Ok(false);
        }
        let ack = self.recv()?;
        self._ack = Some(ack);
        Ok(true)
    }

    fn last_ack(&self) -> Option<&[u8]> {
        self._ack.as_deref()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::radio::prelude::*;
    use crate::radio::rf24::{bit_fields::Feature, Nrf24Error};
    use crate::{
        spi_test_expects, test::mk_radio, DeviceMode, InvalidSetting, TransmissionOutcome,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;
    use std::vec::Vec;

    /// CE pin transitions made by a blocking send.
    fn send_ce() -> [PinTransaction; 3] {
        [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]
    }

    /// SPI transactions that load `b"Hi"` as a static 32 byte payload
    /// on a powered-down radio.
    fn send_preamble() -> Vec<SpiTransaction<u8>> {
        let mut payload = vec![commands::W_TX_PAYLOAD, b'H', b'i'];
        payload.resize(33, 0);
        spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
            // power up as TX
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            // clear TX_DS and MAX_RT
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x30u8],
                vec![0xEu8, 0u8],
            ),
            (payload, vec![0xEu8; 33]),
        ]
        .to_vec()
    }

    fn clear_all_flags() -> [SpiTransaction<u8>; 3] {
        spi_test_expects![(
            vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
            vec![0xEu8, 0u8],
        ),]
    }

    #[test]
    fn send_succeeds_on_third_poll() {
        let mut spi_expectations = send_preamble();
        spi_expectations.extend(spi_test_expects![
            (vec![commands::NOP], vec![0xEu8]),
            (vec![commands::NOP], vec![0xEu8]),
            (vec![commands::NOP], vec![0x2Eu8]),
        ]);
        spi_expectations.extend(clear_all_flags());
        let mocks = mk_radio(&send_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let outcome = radio.send(Some(b"Hi"), false, false, false, 200_000);
        assert_eq!(outcome, Ok(TransmissionOutcome::Sent));
        assert!(!radio.is_ce_high());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_fails() {
        let mut spi_expectations = send_preamble();
        spi_expectations.extend(spi_test_expects![(vec![commands::NOP], vec![0x1Eu8]),]);
        spi_expectations.extend(clear_all_flags());
        let mocks = mk_radio(&send_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let outcome = radio.send(Some(b"Hi"), false, false, true, 200_000);
        assert_eq!(outcome, Ok(TransmissionOutcome::Failed));
        assert_eq!(radio.last_ack(), None);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_times_out() {
        let mut spi_expectations = send_preamble();
        // 3 polls fit in 300 us
        spi_expectations.extend(spi_test_expects![
            (vec![commands::NOP], vec![0xEu8]),
            (vec![commands::NOP], vec![0xEu8]),
            (vec![commands::NOP], vec![0xEu8]),
        ]);
        spi_expectations.extend(clear_all_flags());
        let mocks = mk_radio(&send_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let outcome = radio.send(Some(b"Hi"), false, false, false, 300);
        assert_eq!(outcome, Ok(TransmissionOutcome::TimedOut));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_with_long_settle_time() {
        let mut spi_expectations = send_preamble();
        // the first poll already exceeds the deadline
        spi_expectations.extend(spi_test_expects![(vec![commands::NOP], vec![0xEu8]),]);
        spi_expectations.extend(clear_all_flags());
        let mocks = mk_radio(&send_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.spi_settle_us = u32::MAX;
        let outcome = radio.send(Some(b"Hi"), false, false, false, 300);
        assert_eq!(outcome, Ok(TransmissionOutcome::TimedOut));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_reads_ack_payload() {
        let spi_expectations = spi_test_expects![
            // already powered in TX role
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x30u8],
                vec![0xEu8, 0u8],
            ),
            // dynamic payloads are not padded
            (
                vec![commands::W_TX_PAYLOAD, b'H', b'i'],
                vec![0xEu8, 0u8, 0u8],
            ),
            (vec![commands::NOP], vec![0x60u8]),
            // any()
            (vec![commands::NOP], vec![0x60u8]),
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x60u8, 3u8]),
            // recv()
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x60u8, 3u8]),
            (
                vec![commands::R_RX_PAYLOAD, 0u8, 0u8, 0u8],
                vec![0x60u8, b'a', b'c', b'k'],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0x60u8, 0u8],
            ),
        ];
        let mocks = mk_radio(&send_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._shadow.feature = Feature::from_bits(6);
        let outcome = radio.send(Some(b"Hi"), false, false, true, 200_000);
        assert_eq!(outcome, Ok(TransmissionOutcome::Sent));
        assert_eq!(radio.last_ack(), Some(b"ack".as_slice()));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_fast_no_ack() {
        let mut payload = vec![commands::W_TX_PAYLOAD_NO_ACK];
        payload.extend_from_slice(&[0x55u8; 4]);
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            // keep the payload for reuse
            (vec![commands::REUSE_TX_PL], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x30u8],
                vec![0xEu8, 0u8],
            ),
            // truncated to the static payload length
            (payload, vec![0xEu8; 5]),
        ];
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_length(4).unwrap();
        radio.send_fast(Some(&[0x55u8; 8]), true, true).unwrap();
        assert!(radio.is_ce_high());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_fast_resend() {
        let spi_expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(
                vec![registers::FIFO_STATUS, 0u8],
                vec![0xEu8, 0x11u8],
            ),
            SpiTransaction::transaction_end(),
            // reusable payload is present
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(
                vec![registers::FIFO_STATUS, 0u8],
                vec![0xEu8, 0x41u8],
            ),
            SpiTransaction::transaction_end(),
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(
                vec![registers::CONFIG, 0u8],
                vec![0xEu8, 0xEu8],
            ),
            SpiTransaction::transaction_end(),
            // cycle CSN without a payload
            SpiTransaction::transaction_start(),
            SpiTransaction::transaction_end(),
            SpiTransaction::transaction_start(),
            SpiTransaction::transfer_in_place(
                vec![registers::STATUS | commands::W_REGISTER, 0x30u8],
                vec![0xEu8, 0u8],
            ),
            SpiTransaction::transaction_end(),
        ];
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(matches!(
            radio.send_fast(None, false, false),
            Err(Nrf24Error::InvalidArgument(InvalidSetting::ReuseTx))
        ));
        radio.send_fast(None, false, false).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_fast_invalid_payload() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        for buf in [&[][..], &[0u8; 33][..]] {
            assert!(matches!(
                radio.send_fast(Some(buf), false, false),
                Err(Nrf24Error::InvalidArgument(InvalidSetting::Payload))
            ));
        }
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn recv_static() {
        let mut response = vec![0x40u8];
        response.extend(1..=32u8);
        let mut read = vec![commands::R_RX_PAYLOAD];
        read.extend_from_slice(&[0u8; 32]);
        let spi_expectations = spi_test_expects![
            (read, response),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0x40u8, 0u8],
            ),
            (vec![commands::NOP], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let payload = radio.recv().unwrap();
        assert_eq!(payload.len(), 32);
        assert_eq!(payload.first(), Some(&1));
        assert_eq!(payload.last(), Some(&32));
        radio.update().unwrap();
        let flags = radio.get_status_flags();
        assert!(!flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(!flags.max_rt());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn any() {
        let spi_expectations = spi_test_expects![
            // RX FIFO empty
            (vec![commands::NOP], vec![0xEu8]),
            // payload on pipe 0
            (vec![commands::NOP], vec![0x40u8]),
            // dynamic payload on pipe 1
            (vec![commands::NOP], vec![0x42u8]),
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x42u8, 7u8]),
            // a corrupt width empties the RX FIFO
            (vec![commands::NOP], vec![0x42u8]),
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x42u8, 40u8]),
            (vec![commands::FLUSH_RX], vec![0x42u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.any().unwrap(), 0);
        assert_eq!(radio.any().unwrap(), 32);
        radio._shadow.feature = Feature::from_bits(4);
        assert_eq!(radio.any().unwrap(), 7);
        assert_eq!(radio.any().unwrap(), 0);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn as_rx_restores_short_pipe0_address() {
        let spi_expectations = spi_test_expects![
            // open_rx_pipe(0, &[1, 2]) only sets the 2 LSBs
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, 1u8, 2u8],
                vec![0xEu8, 0u8, 0u8],
            ),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            // as_rx()
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, 1u8, 2u8],
                vec![0xEu8, 0u8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.open_rx_pipe(0, &[1, 2]).unwrap();
        radio.as_rx().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn as_rx_restores_pipe0_address() {
        let addr_write = |reg: u8, addr: &[u8]| {
            let mut buf = vec![reg | commands::W_REGISTER];
            buf.extend_from_slice(addr);
            buf
        };
        let mut spi_expectations = Vec::new();
        spi_expectations.extend(spi_test_expects![
            // open_rx_pipe(0, b"1Node")
            (addr_write(registers::RX_ADDR_P0, b"1Node"), vec![0xEu8; 6]),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            // open_tx_pipe(b"2Node")
            (addr_write(registers::RX_ADDR_P0, b"2Node"), vec![0xEu8; 6]),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            (addr_write(registers::TX_ADDR, b"2Node"), vec![0xEu8; 6]),
            // as_rx()
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            (addr_write(registers::RX_ADDR_P0, b"1Node"), vec![0xEu8; 6]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            // is_listening()
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
        ]);
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.open_rx_pipe(0, b"1Node").unwrap();
        radio.open_tx_pipe(b"2Node").unwrap();
        radio.as_rx().unwrap();
        assert!(radio.is_listening().unwrap());
        assert!(radio.is_ce_high());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn as_tx() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
        ];
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.ce_set(true).unwrap();
        radio.as_tx().unwrap();
        assert!(!radio.is_ce_high());
        // still powered, but not listening
        assert!(!radio.is_listening().unwrap());
        assert!(radio._shadow.config.power());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn get_mode() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            // CE is high from here on
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (vec![registers::FIFO_STATUS, 0u8], vec![0xEu8, 0x11u8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (vec![registers::FIFO_STATUS, 0u8], vec![0xEu8, 0x01u8]),
        ];
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_mode(), Ok(DeviceMode::PowerDown));
        assert_eq!(radio.get_mode(), Ok(DeviceMode::StandbyI));
        radio.ce_set(true).unwrap();
        assert_eq!(radio.get_mode(), Ok(DeviceMode::Rx));
        assert_eq!(radio.get_mode(), Ok(DeviceMode::StandbyII));
        assert_eq!(radio.get_mode(), Ok(DeviceMode::Tx));
        spi.done();
        ce_pin.done();
    }
}
