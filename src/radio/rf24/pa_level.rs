use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::RadioPaLevel, RadioDevice};
use crate::PaLevel;

impl<SPI, DO, DELAY> RadioPaLevel for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::Error> {
        self.refresh(registers::RF_SETUP)?;
        Ok(self._shadow.rf_setup.pa_level())
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::Error> {
        self.refresh(registers::RF_SETUP)?;
        let value = self._shadow.rf_setup.with_pa_level(pa_level).into_bits();
        self.commit(registers::RF_SETUP, value)?;
        Ok(())
    }
}
