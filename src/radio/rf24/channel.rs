use super::{registers, MAX_CHANNEL};
use crate::radio::{prelude::RadioChannel, RadioDevice};
use crate::InvalidSetting;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> RadioChannel for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// The nRF24L01 support 126 channels. A `channel` greater than 125
    /// is rejected.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::Error> {
        if channel > MAX_CHANNEL {
            return Err(InvalidSetting::Channel.into());
        }
        self.refresh(registers::RF_CH)?;
        self.commit(registers::RF_CH, channel)?;
        Ok(())
    }

    /// See also [`RadioDevice::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::Error> {
        self.refresh(registers::RF_CH)
    }
}
