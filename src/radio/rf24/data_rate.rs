use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::RadioDataRate, RadioDevice};
use crate::DataRate;

impl<SPI, DO, DELAY> RadioDataRate for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn get_data_rate(&mut self) -> Result<DataRate, Self::Error> {
        self.refresh(registers::RF_SETUP)?;
        Ok(self._shadow.rf_setup.data_rate())
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::Error> {
        self.refresh(registers::RF_SETUP)?;
        let value = self._shadow.rf_setup.with_data_rate(data_rate).into_bits();
        self.commit(registers::RF_SETUP, value)?;
        Ok(())
    }
}
