use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioPower, RadioDevice};

use super::{registers, timing};

impl<SPI, DO, DELAY> RadioPower for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// In power standby mode (when not receiving nor transmitting), a non-PA/LNA radio
    /// will consume about 26uA (.026mA).
    /// In full power down mode (a sleep state), the radio will consume approximately
    /// 900nA (.0009mA).
    ///
    /// Powering down also drives the CE pin low. Powering up waits for the
    /// crystal oscillator to start, leaving the radio in Standby-I.
    fn set_power(&mut self, enable: bool) -> Result<(), Self::Error> {
        if !enable && self._ce_high {
            self.ce_set(false)?;
        }
        self.refresh(registers::CONFIG)?;
        let value = self._shadow.config.with_power(enable).into_bits();
        if self.commit(registers::CONFIG, value)? && enable {
            self._delay_impl.delay_us(timing::POWER_UP_US);
        }
        debug!("power {=bool}", enable);
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::Error> {
        self.refresh(registers::CONFIG)?;
        Ok(self._shadow.config.power())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, RadioPower};
    use crate::radio::rf24::commands;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    fn power_up_then_down() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
            // already powered
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xEu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xCu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xCu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_power(true).unwrap();
        radio.set_power(true).unwrap();
        assert!(radio.is_powered().unwrap());
        radio.set_power(false).unwrap();
        assert!(!radio.is_powered().unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn power_down_drops_ce() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xDu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.ce_set(true).unwrap();
        radio.set_power(false).unwrap();
        assert!(!radio.is_ce_high());
        spi.done();
        ce_pin.done();
    }
}
