use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::RadioCrcLength, RadioDevice};
use crate::CrcLength;

impl<SPI, DO, DELAY> RadioCrcLength for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::Error> {
        self.refresh(registers::CONFIG)?;
        Ok(self._shadow.config.crc_length())
    }

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::Error> {
        self.refresh(registers::CONFIG)?;
        let value = self._shadow.config.with_crc_length(crc_length).into_bits();
        self.commit(registers::CONFIG, value)?;
        Ok(())
    }
}
