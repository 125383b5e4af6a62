use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{mnemonics, registers, shadow::RegisterShadow, Nrf24Error, RadioDevice};

/// A change requested to one of the interdependent ESB features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum FeatureRequest {
    AutoAck(bool),
    DynamicPayloads(bool),
    AckPayloads(bool),
}

/// The three features that constrain each other:
///
/// - dynamic payloads require auto-ack
/// - custom ACK payloads require dynamic payloads (and so auto-ack)
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct FeatureSet {
    pub auto_ack: bool,
    pub dynamic_payloads: bool,
    pub ack_payloads: bool,
}

impl FeatureSet {
    pub fn from_shadow(shadow: &RegisterShadow) -> Self {
        Self {
            auto_ack: shadow.auto_ack(),
            dynamic_payloads: shadow.feature.dynamic_payloads(),
            ack_payloads: shadow.feature.ack_payloads(),
        }
    }

    /// Apply `request`, then whatever it forces on (or off) in the other features.
    pub fn resolve(self, request: FeatureRequest) -> Self {
        let mut next = self;
        match request {
            FeatureRequest::AutoAck(enable) => {
                next.auto_ack = enable;
                if !enable {
                    next.dynamic_payloads = false;
                    next.ack_payloads = false;
                }
            }
            FeatureRequest::DynamicPayloads(enable) => {
                next.dynamic_payloads = enable;
                if enable {
                    next.auto_ack = true;
                } else {
                    next.ack_payloads = false;
                }
            }
            FeatureRequest::AckPayloads(enable) => {
                next.ack_payloads = enable;
                if enable {
                    next.dynamic_payloads = true;
                    next.auto_ack = true;
                }
            }
        }
        next
    }
}

impl<SPI, DO, DELAY> RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Resolve `request` against the current features and write only the
    /// registers (EN_AA, FEATURE, DYNPD) whose value changes.
    pub(super) fn apply_features(
        &mut self,
        request: FeatureRequest,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let next = FeatureSet::from_shadow(&self._shadow).resolve(request);
        let en_aa = if next.auto_ack {
            mnemonics::ALL_PIPES
        } else {
            0
        };
        let feature = self
            ._shadow
            .feature
            .with_dynamic_payloads(next.dynamic_payloads)
            .with_ack_payloads(next.ack_payloads)
            .into_bits();
        let dynpd = if next.dynamic_payloads {
            mnemonics::ALL_PIPES
        } else {
            0
        };
        trace!(
            "features: auto_ack={=bool} dynamic_payloads={=bool} ack_payloads={=bool}",
            next.auto_ack,
            next.dynamic_payloads,
            next.ack_payloads
        );
        let auto_ack_changed = self.commit(registers::EN_AA, en_aa)?;
        self.commit(registers::FEATURE, feature)?;
        self.commit(registers::DYNPD, dynpd)?;
        if auto_ack_changed {
            // auto-ack forces CRC on
            self.refresh(registers::CONFIG)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{FeatureRequest, FeatureSet};

    const ALL_OFF: FeatureSet = FeatureSet {
        auto_ack: false,
        dynamic_payloads: false,
        ack_payloads: false,
    };

    const ALL_ON: FeatureSet = FeatureSet {
        auto_ack: true,
        dynamic_payloads: true,
        ack_payloads: true,
    };

    #[test]
    fn dynamic_payloads_enable_auto_ack() {
        let next = ALL_OFF.resolve(FeatureRequest::DynamicPayloads(true));
        assert!(next.auto_ack);
        assert!(next.dynamic_payloads);
        assert!(!next.ack_payloads);
    }

    #[test]
    fn disabling_auto_ack_disables_the_rest() {
        assert_eq!(ALL_ON.resolve(FeatureRequest::AutoAck(false)), ALL_OFF);
    }

    #[test]
    fn disabling_dynamic_payloads_keeps_auto_ack() {
        let next = ALL_ON.resolve(FeatureRequest::DynamicPayloads(false));
        assert!(next.auto_ack);
        assert!(!next.dynamic_payloads);
        assert!(!next.ack_payloads);
    }

    #[test]
    fn ack_payloads_enable_everything() {
        assert_eq!(ALL_OFF.resolve(FeatureRequest::AckPayloads(true)), ALL_ON);
        let next = ALL_ON.resolve(FeatureRequest::AckPayloads(false));
        assert!(next.auto_ack);
        assert!(next.dynamic_payloads);
        assert!(!next.ack_payloads);
    }

    #[test]
    fn enabling_auto_ack_changes_nothing_else() {
        let next = ALL_OFF.resolve(FeatureRequest::AutoAck(true));
        assert!(next.auto_ack);
        assert!(!next.dynamic_payloads);
        assert!(!next.ack_payloads);
    }
}
