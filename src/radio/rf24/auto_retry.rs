use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{config::is_valid_retry_delay, prelude::RadioAutoRetry, RadioDevice};
use crate::InvalidSetting;

use super::registers;

impl<SPI, DO, DELAY> RadioAutoRetry for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn set_auto_retry_count(&mut self, count: u8) -> Result<(), Self::Error> {
        if count > 15 {
            return Err(InvalidSetting::RetryCount.into());
        }
        self.refresh(registers::SETUP_RETR)?;
        let value = self._shadow.setup_retr.with_arc(count).into_bits();
        self.commit(registers::SETUP_RETR, value)?;
        Ok(())
    }

    fn get_auto_retry_count(&mut self) -> Result<u8, Self::Error> {
        self.refresh(registers::SETUP_RETR)?;
        Ok(self._shadow.setup_retr.arc())
    }

    fn set_auto_retry_delay(&mut self, delay: u16) -> Result<(), Self::Error> {
        if !is_valid_retry_delay(delay) {
            return Err(InvalidSetting::RetryDelay.into());
        }
        self.refresh(registers::SETUP_RETR)?;
        let value = self._shadow.setup_retr.with_delay_us(delay).into_bits();
        self.commit(registers::SETUP_RETR, value)?;
        Ok(())
    }

    fn get_auto_retry_delay(&mut self) -> Result<u16, Self::Error> {
        self.refresh(registers::SETUP_RETR)?;
        Ok(self._shadow.setup_retr.delay_us())
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::Error> {
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] & 0xF)
    }

    fn get_lost_packets(&mut self) -> Result<u8, Self::Error> {
        self.spi_read(1, registers::OBSERVE_TX)?;
        Ok(self._buf[1] >> 4)
    }
}
