use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::bit_fields::{Feature, SetupRetry};
use super::{features::FeatureRequest, mnemonics, registers, Nrf24Error};
use crate::radio::prelude::{RadioFifo, RadioInit, RadioStatus};
use crate::radio::{RadioConfig, RadioDevice};
use crate::StatusFlags;

impl<SPI, DO, DELAY> RadioInit for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`RadioDevice::new()`].
    ///
    /// The radio is left powered down in the TX role with all RX pipes closed.
    fn init(&mut self, config: &RadioConfig) -> Result<(), Self::Error> {
        config.validate()?;
        self.ce_set(false)?;

        self.flush_rx()?;
        self.flush_tx()?;
        // there is no ID register; an idle STATUS is the best sign of life.
        // The flushes clock out STATUS from before they take effect.
        self.update()?;
        let status = self._shadow.status.into_bits();
        if status & mnemonics::STATUS_IDLE_MASK != mnemonics::STATUS_IDLE {
            warn!("radio not responding (STATUS = {=u8:#04x})", status);
            return Err(Nrf24Error::DeviceNotResponding);
        }
        // flags must be cleared before CONFIG is written
        self.clear_status_flags(StatusFlags::new())?;

        let config_reg = config.config_reg.with_power(false).as_tx();
        self.write_through(registers::CONFIG, config_reg.into_bits())?;
        self.write_through(registers::RF_CH, config.channel())?;
        self.write_through(registers::SETUP_AW, config.address_length() - 2)?;
        let setup_retr = SetupRetry::default()
            .with_arc(config.auto_retry_count())
            .with_delay_us(config.auto_retry_delay());
        self.write_through(registers::SETUP_RETR, setup_retr.into_bits())?;
        self.write_through(registers::RF_SETUP, config.rf_setup.into_bits())?;
        // dynamic payloads and ask-no-ack enabled; custom ACK payloads disabled
        self.write_through(registers::FEATURE, Feature::default().into_bits())?;
        self.write_through(registers::DYNPD, mnemonics::ALL_PIPES)?;
        let en_aa = if config.auto_ack() {
            mnemonics::ALL_PIPES
        } else {
            0
        };
        self.write_through(registers::EN_AA, en_aa)?;
        self.write_through(registers::EN_RXADDR, 0)?;

        self._payload_length = config.payload_length();
        self._pipe0_rx_addr = None;
        self._ack = None;

        // dynamic payloads depend on auto-ack, so this goes last
        self.apply_features(FeatureRequest::DynamicPayloads(config.dynamic_payloads()))?;
        debug!("radio initialized on channel {=u8}", config.channel());
        Ok(())
    }
}
