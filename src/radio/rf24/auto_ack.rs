use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioAutoAck, RadioDevice};
use crate::{InvalidSetting, MAX_PAYLOAD_LENGTH};

use super::{commands, features::FeatureRequest};

impl<SPI, DO, DELAY> RadioAutoAck for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::Error> {
        self.apply_features(FeatureRequest::AutoAck(enable))
    }

    fn get_auto_ack(&self) -> bool {
        self._shadow.auto_ack()
    }

    fn set_ack_payload(&mut self, payload: Option<&[u8]>, pipe: u8) -> Result<bool, Self::Error> {
        if pipe > 5 {
            return Err(InvalidSetting::Pipe.into());
        }
        let Some(buf) = payload else {
            self.apply_features(FeatureRequest::AckPayloads(false))?;
            return Ok(true);
        };
        if buf.is_empty() || buf.len() > MAX_PAYLOAD_LENGTH as usize {
            return Err(InvalidSetting::Payload.into());
        }
        self.apply_features(FeatureRequest::AckPayloads(true))?;
        self.spi_write_buf(commands::W_ACK_PAYLOAD | pipe, buf)?;
        // STATUS is clocked out before the payload is accepted
        let loaded = !self._shadow.status.tx_full();
        debug!("ACK payload for pipe {=u8} loaded: {=bool}", pipe, loaded);
        Ok(loaded)
    }

    fn get_ack_payloads(&self) -> bool {
        self._shadow.feature.ack_payloads()
    }
}
