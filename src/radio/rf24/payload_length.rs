use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, features::FeatureRequest};
use crate::radio::prelude::{RadioFifo, RadioPayloadLength};
use crate::radio::RadioDevice;
use crate::{InvalidSetting, MAX_PAYLOAD_LENGTH};

impl<SPI, DO, DELAY> RadioPayloadLength for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::Error> {
        if length > MAX_PAYLOAD_LENGTH {
            return Err(InvalidSetting::PayloadLength.into());
        }
        self._payload_length = length;
        Ok(())
    }

    fn get_payload_length(&self) -> u8 {
        self._payload_length
    }

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::Error> {
        self.apply_features(FeatureRequest::DynamicPayloads(enable))
    }

    fn get_dynamic_payloads(&self) -> bool {
        self._shadow.feature.dynamic_payloads()
    }

    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::Error> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        let width = self._buf[1];
        if width > MAX_PAYLOAD_LENGTH {
            warn!("discarding RX payload with corrupt width {=u8}", width);
            self.flush_rx()?;
            return Ok(0);
        }
        Ok(width)
    }
}
