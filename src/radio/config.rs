use crate::radio::rf24::bit_fields::{Config, RfSetup};
use crate::radio::rf24::MAX_CHANNEL;
use crate::{CrcLength, DataRate, InvalidSetting, PaLevel, MAX_PAYLOAD_LENGTH};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24_radio::radio::RadioConfig;
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Values are stored as given. Out-of-range values are reported by
/// [`RadioConfig::validate()`], which
/// [`RadioInit::init()`](fn@crate::radio::prelude::RadioInit::init)
/// calls before touching the SPI bus.
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) config_reg: Config,
    pub(crate) rf_setup: RfSetup,
    channel: u8,
    payload_length: u8,
    address_length: u8,
    dynamic_payloads: bool,
    auto_ack: bool,
    auto_retry_count: u8,
    auto_retry_delay: u16,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::payload_length()`] | `32` |
    /// | [`RadioConfig::address_length()`] | `5` |
    /// | [`RadioConfig::dynamic_payloads()`] | `true` |
    /// | [`RadioConfig::auto_ack()`] | `true` |
    /// | [`RadioConfig::rx_dr()`] | `true` |
    /// | [`RadioConfig::tx_ds()`] | `true` |
    /// | [`RadioConfig::max_rt()`] | `true` |
    /// | [`RadioConfig::auto_retry_count()`] | `3` |
    /// | [`RadioConfig::auto_retry_delay()`] | `1500` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] (0 dBm) |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    fn default() -> Self {
        Self {
            /*
               - all events enabled for IRQ pin
               - 16 bit CRC
               - powered down
               - inactive TX (StandBy-I) mode
            */
            config_reg: Config::default(),
            /*
                - 1 Mbps data rate
                - Max PA level
            */
            rf_setup: RfSetup::default(),
            channel: 76,
            payload_length: 32,
            address_length: 5,
            dynamic_payloads: true,
            auto_ack: true,
            auto_retry_count: 3,
            auto_retry_delay: 1500,
        }
    }
}

impl RadioConfig {
    /// Check every setting, reporting the first one that is out of range.
    pub fn validate(&self) -> Result<(), InvalidSetting> {
        if self.channel > MAX_CHANNEL {
            return Err(InvalidSetting::Channel);
        }
        if self.payload_length > MAX_PAYLOAD_LENGTH {
            return Err(InvalidSetting::PayloadLength);
        }
        if !(3..=5).contains(&self.address_length) {
            return Err(InvalidSetting::AddressLength);
        }
        if self.auto_retry_count > 15 {
            return Err(InvalidSetting::RetryCount);
        }
        if !is_valid_retry_delay(self.auto_retry_delay) {
            return Err(InvalidSetting::RetryDelay);
        }
        Ok(())
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.config_reg.crc_length()
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`RadioCrcLength::set_crc_length()`](fn@crate::radio::prelude::RadioCrcLength::set_crc_length).
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        let new_config = self.config_reg.with_crc_length(length);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate()
    }

    /// The Data Rate (over the air).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_config = self.rf_setup.with_data_rate(data_rate);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.rf_setup.pa_level()
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_config = self.rf_setup.with_pa_level(level);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_address_length()`].
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// The address length, in range [3, 5].
    pub fn with_address_length(self, value: u8) -> Self {
        Self {
            address_length: value,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency), in range [0, 125].
    ///
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value,
            ..self
        }
    }

    /// The auto-retry feature's `delay` (in microseconds).
    pub const fn auto_retry_delay(&self) -> u16 {
        self.auto_retry_delay
    }

    /// The auto-retry feature's `count`.
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retry_count
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// `delay` must be a multiple of 250 in range [250, 4000] microseconds.
    /// `count` must be in range [0, 15].
    pub fn with_auto_retries(self, delay: u16, count: u8) -> Self {
        Self {
            auto_retry_delay: delay,
            auto_retry_count: count,
            ..self
        }
    }

    /// Get the value set by [`RadioConfig::with_rx_dr()`].
    pub const fn rx_dr(&self) -> bool {
        self.config_reg.rx_dr()
    }

    /// Enable or disable the "RX Data Ready" event triggering the radio's IRQ.
    ///
    /// See [`StatusFlags::rx_dr()`](fn@crate::StatusFlags::rx_dr).
    pub fn with_rx_dr(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_rx_dr(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Get the value set by [`RadioConfig::with_tx_ds()`].
    pub const fn tx_ds(&self) -> bool {
        self.config_reg.tx_ds()
    }

    /// Enable or disable the "TX Data Sent" event triggering the radio's IRQ.
    ///
    /// See [`StatusFlags::tx_ds()`](fn@crate::StatusFlags::tx_ds).
    pub fn with_tx_ds(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_tx_ds(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Get the value set by [`RadioConfig::with_max_rt()`].
    pub const fn max_rt(&self) -> bool {
        self.config_reg.max_rt()
    }

    /// Enable or disable the "Max Retries" event triggering the radio's IRQ.
    ///
    /// See [`StatusFlags::max_rt()`](fn@crate::StatusFlags::max_rt).
    pub fn with_max_rt(self, enable: bool) -> Self {
        let new_config = self.config_reg.with_max_rt(enable);
        Self {
            config_reg: new_config,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_dynamic_payloads()`].
    pub const fn dynamic_payloads(&self) -> bool {
        self.dynamic_payloads
    }

    /// Enable or disable dynamically sized payloads.
    ///
    /// This is applied last during initialization. Enabling it forces
    /// auto-ack on, regardless of [`RadioConfig::auto_ack()`].
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            dynamic_payloads: enable,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    /// Enable or disable auto-ack (for all pipes).
    pub fn with_auto_ack(self, enable: bool) -> Self {
        Self {
            auto_ack: enable,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The payload length for statically sized payloads, in range [0, 32].
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value,
            ..self
        }
    }
}

pub(crate) const fn is_valid_retry_delay(delay: u16) -> bool {
    delay >= 250 && delay <= 4000 && delay % 250 == 0
}
