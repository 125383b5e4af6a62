use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::RadioStatus, RadioDevice};
use crate::StatusFlags;

use super::{commands, registers};

impl<SPI, DO, DELAY> RadioStatus for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Configure which status flags trigger the radio's IRQ pin.
    ///
    /// The supported interrupt events correspond to the parameters:
    /// - `rx_dr` means "RX Data Ready"
    /// - `tx_ds` means "TX Data Sent"
    /// - `max_rt` means "TX Data Failed" to send
    ///
    /// Set any parameter to `false` to have the IRQ pin ignore the corresponding event.
    fn set_irq_config(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        max_rt: bool,
    ) -> Result<(), Self::Error> {
        self.refresh(registers::CONFIG)?;
        let value = self
            ._shadow
            .config
            .with_rx_dr(rx_dr)
            .with_tx_ds(tx_ds)
            .with_max_rt(max_rt)
            .into_bits();
        self.commit(registers::CONFIG, value)?;
        Ok(())
    }

    /// Clear the radio's IRQ status flags.
    ///
    /// Only the flags set in `flags` are cleared. The IRQ pin stays active (LOW)
    /// while any enabled event remains flagged.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::Error> {
        // flags are cleared by writing 1; the shadow is refreshed by the returned STATUS
        self.spi_write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        self.spi_read(0, commands::NOP)
    }

    fn get_status_flags(&self) -> StatusFlags {
        self._shadow.status
    }
}
