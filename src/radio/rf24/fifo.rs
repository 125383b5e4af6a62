use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioFifo, RadioDevice};
use crate::FifoState;

use super::{commands, registers};

impl<SPI, DO, DELAY> RadioFifo for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::Error> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::Error> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::Error> {
        self.refresh(registers::FIFO_STATUS)?;
        Ok(self._shadow.fifo.state(about_tx))
    }

    fn is_reuse_tx(&mut self) -> Result<bool, Self::Error> {
        self.refresh(registers::FIFO_STATUS)?;
        Ok(self._shadow.fifo.tx_reuse())
    }
}
