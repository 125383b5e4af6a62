use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioPipe, RadioDevice};
use crate::InvalidSetting;

use super::constants::{PIPE0_DEFAULT_ADDRESS, PIPE1_DEFAULT_ADDRESS, PIPE_N_DEFAULT_BASE};
use super::{commands, registers};

impl<SPI, DO, DELAY> RadioPipe for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::Error> {
        if pipe > 5 {
            return Err(InvalidSetting::Pipe.into());
        }
        if address.is_empty() {
            return Err(InvalidSetting::Address.into());
        }

        if pipe < 2 {
            // only write the bytes that were passed (up to the configured width)
            let width = address
                .len()
                .min(self._shadow.address_length() as usize);

            // open_tx_pipe() overwrites pipe 0's address, so as_rx() must restore it
            if pipe == 0 {
                self._pipe0_rx_addr = heapless::Vec::from_slice(&address[..width]).ok();
            }
            self.spi_write_buf(registers::RX_ADDR_P0 + pipe, &address[..width])?;
        }
        // pipes 2-5 share all but the LSB with pipe 1
        else {
            self.spi_write_byte(registers::RX_ADDR_P0 + pipe, address[0])?;
        }

        if !self._shadow.feature.dynamic_payloads() {
            self.spi_write_byte(registers::RX_PW_P0 + pipe, self._payload_length)?;
        }
        let open_pipes = self._shadow.open_pipes | (1 << pipe);
        self.commit(registers::EN_RXADDR, open_pipes)?;
        debug!("opened RX pipe {=u8}", pipe);
        Ok(())
    }

    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::Error> {
        if address.is_empty() {
            return Err(InvalidSetting::Address.into());
        }
        let width = address
            .len()
            .min(self._shadow.address_length() as usize);
        if self._shadow.auto_ack() {
            // ACK packets are received on pipe 0
            self.spi_write_buf(registers::RX_ADDR_P0, &address[..width])?;
        }
        if !self._shadow.feature.dynamic_payloads() {
            self.spi_write_byte(registers::RX_PW_P0, self._payload_length)?;
        }
        self.spi_write_buf(registers::TX_ADDR, &address[..width])?;
        debug!("opened TX pipe");
        Ok(())
    }

    /// Restores the pipe's factory default address and disables the pipe.
    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::Error> {
        if pipe > 5 {
            return Err(InvalidSetting::Pipe.into());
        }
        let width = self._shadow.address_length() as usize;
        match pipe {
            0 => {
                self.spi_write_buf(registers::RX_ADDR_P0, &PIPE0_DEFAULT_ADDRESS[..width])?;
                self._pipe0_rx_addr =
                    heapless::Vec::from_slice(&PIPE0_DEFAULT_ADDRESS[..width]).ok();
            }
            1 => self.spi_write_buf(registers::RX_ADDR_P0 + 1, &PIPE1_DEFAULT_ADDRESS[..width])?,
            _ => self.spi_write_byte(registers::RX_ADDR_P0 + pipe, PIPE_N_DEFAULT_BASE + pipe)?,
        }
        let open_pipes = self._shadow.open_pipes & !(1 << pipe);
        self.commit(registers::EN_RXADDR, open_pipes)?;
        debug!("closed RX pipe {=u8}", pipe);
        Ok(())
    }

    fn set_address_length(&mut self, length: u8) -> Result<(), Self::Error> {
        if !(3..=5).contains(&length) {
            return Err(InvalidSetting::AddressLength.into());
        }
        self.refresh(registers::SETUP_AW)?;
        self.commit(registers::SETUP_AW, length - 2)?;
        Ok(())
    }

    fn get_address_length(&mut self) -> Result<u8, Self::Error> {
        self.refresh(registers::SETUP_AW)?;
        Ok(self._shadow.address_length())
    }

    fn pipe(&mut self) -> Result<Option<u8>, Self::Error> {
        self.spi_read(0, commands::NOP)?;
        let pipe = self._shadow.status.rx_pipe();
        // 7 means the RX FIFO is empty
        if pipe > 5 {
            return Ok(None);
        }
        Ok(Some(pipe))
    }
}
