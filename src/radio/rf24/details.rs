use core::fmt::{Display, Formatter, Result as FmtResult};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::RadioDetails, RadioDevice};
use crate::{CrcLength, DataRate, DeviceMode, FifoState, PaLevel, StatusFlags};

#[cfg(feature = "std")]
extern crate std;

/// A snapshot of the radio's configuration and state.
///
/// Use [`RadioDetails::get_details()`] to take one.
/// Pipe addresses are stored in the order they are clocked over SPI (LSB first).
#[derive(Clone, Copy, Debug)]
pub struct Details {
    pub channel: u8,
    pub data_rate: DataRate,
    pub pa_level: PaLevel,
    pub crc_length: CrcLength,
    pub address_length: u8,
    /// The static payload length used by the driver.
    pub payload_length: u8,
    pub auto_retry_delay: u16,
    pub auto_retry_count: u8,
    /// The events that trigger the IRQ pin.
    pub irq_config: StatusFlags,
    pub status: StatusFlags,
    /// Retries made for the last transmission.
    pub last_arc: u8,
    /// Packets lost since the channel was last set (saturates at 15).
    pub lost_packets: u8,
    pub rpd: bool,
    pub tx_fifo: FifoState,
    pub rx_fifo: FifoState,
    pub reuse_tx: bool,
    pub ask_no_ack: bool,
    pub ack_payloads: bool,
    pub dynamic_payloads: bool,
    /// EN_AA, one bit per pipe.
    pub auto_ack_pipes: u8,
    /// DYNPD, one bit per pipe.
    pub dynamic_payload_pipes: u8,
    /// EN_RXADDR, one bit per pipe.
    pub open_pipes: u8,
    pub is_rx: bool,
    pub powered: bool,
    pub mode: DeviceMode,
    pub tx_address: [u8; 5],
    /// Pipes 2-5 share their upper bytes with pipe 1.
    pub rx_addresses: [[u8; 5]; 6],
}

impl Details {
    fn address<'a>(&self, address: &'a [u8; 5]) -> &'a [u8] {
        &address[..(self.address_length as usize).min(5)]
    }
}

/// Print an address MSB first.
fn write_address(f: &mut Formatter<'_>, address: &[u8]) -> FmtResult {
    write!(f, "0x")?;
    for byte in address.iter().rev() {
        write!(f, "{byte:02X}")?;
    }
    Ok(())
}

impl Display for Details {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "Channel___________________{} ~ {} MHz",
            self.channel,
            self.channel as u16 + 2400
        )?;
        writeln!(f, "RF Data Rate______________{}", self.data_rate)?;
        writeln!(f, "RF Power Amplifier________{}", self.pa_level)?;
        writeln!(f, "CRC Length________________{}", self.crc_length)?;
        writeln!(f, "Address length____________{} bytes", self.address_length)?;
        writeln!(f, "Payload length____________{} bytes", self.payload_length)?;
        writeln!(
            f,
            "Auto retry delay__________{} microseconds",
            self.auto_retry_delay
        )?;
        writeln!(f, "Auto retry attempts_______{} maximum", self.auto_retry_count)?;
        writeln!(f, "Packets lost______________{}", self.lost_packets)?;
        writeln!(f, "Retries for last TX_______{}", self.last_arc)?;
        writeln!(f, "Received power > -64 dBm__{}", self.rpd)?;
        writeln!(f, "IRQ on Data Ready_________{}", self.irq_config.rx_dr())?;
        writeln!(f, "    Data Ready triggered__{}", self.status.rx_dr())?;
        writeln!(f, "IRQ on Data Sent__________{}", self.irq_config.tx_ds())?;
        writeln!(f, "    Data Sent triggered___{}", self.status.tx_ds())?;
        writeln!(f, "IRQ on Data Fail__________{}", self.irq_config.max_rt())?;
        writeln!(f, "    Data Fail triggered___{}", self.status.max_rt())?;
        writeln!(f, "TX FIFO___________________{}", self.tx_fifo)?;
        writeln!(f, "RX FIFO___________________{}", self.rx_fifo)?;
        writeln!(f, "Re-use TX FIFO____________{}", self.reuse_tx)?;
        writeln!(f, "Ask no ACK allowed________{}", self.ask_no_ack)?;
        writeln!(f, "ACK Payload enabled_______{}", self.ack_payloads)?;
        writeln!(f, "Dynamic Payloads__________{}", self.dynamic_payloads)?;
        writeln!(f, "    per pipe______________{:#08b}", self.dynamic_payload_pipes)?;
        writeln!(f, "Auto Acknowledgment_______{:#08b}", self.auto_ack_pipes)?;
        writeln!(
            f,
            "Primary Mode______________{}X",
            if self.is_rx { "R" } else { "T" }
        )?;
        writeln!(f, "Powered Up________________{}", self.powered)?;
        writeln!(f, "Device Mode_______________{}", self.mode)?;
        write!(f, "TX address________________")?;
        write_address(f, self.address(&self.tx_address))?;
        for (pipe, address) in self.rx_addresses.iter().enumerate() {
            let state = if self.open_pipes & (1 << pipe) > 0 {
                " open "
            } else {
                "closed"
            };
            write!(f, "\nPipe {pipe} ({state}) bound to ")?;
            write_address(f, self.address(address))?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Details {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Channel___________________{=u8} ~ {=u16} MHz\n",
            self.channel,
            self.channel as u16 + 2400
        );
        defmt::write!(fmt, "RF Data Rate______________{}\n", self.data_rate);
        defmt::write!(fmt, "RF Power Amplifier________{}\n", self.pa_level);
        defmt::write!(fmt, "CRC Length________________{}\n", self.crc_length);
        defmt::write!(
            fmt,
            "Address length____________{=u8} bytes\n",
            self.address_length
        );
        defmt::write!(
            fmt,
            "Payload length____________{=u8} bytes\n",
            self.payload_length
        );
        defmt::write!(
            fmt,
            "Auto retry delay__________{=u16} microseconds\n",
            self.auto_retry_delay
        );
        defmt::write!(
            fmt,
            "Auto retry attempts_______{=u8} maximum\n",
            self.auto_retry_count
        );
        defmt::write!(fmt, "Packets lost______________{=u8}\n", self.lost_packets);
        defmt::write!(fmt, "Retries for last TX_______{=u8}\n", self.last_arc);
        defmt::write!(fmt, "Received power > -64 dBm__{=bool}\n", self.rpd);
        defmt::write!(fmt, "IRQ config________________{}\n", self.irq_config);
        defmt::write!(fmt, "Status____________________{}\n", self.status);
        defmt::write!(fmt, "TX FIFO___________________{}\n", self.tx_fifo);
        defmt::write!(fmt, "RX FIFO___________________{}\n", self.rx_fifo);
        defmt::write!(fmt, "Re-use TX FIFO____________{=bool}\n", self.reuse_tx);
        defmt::write!(fmt, "Ask no ACK allowed________{=bool}\n", self.ask_no_ack);
        defmt::write!(fmt, "ACK Payload enabled_______{=bool}\n", self.ack_payloads);
        defmt::write!(
            fmt,
            "Dynamic Payloads__________{=bool} (0b{=0..8})\n",
            self.dynamic_payloads,
            self.dynamic_payload_pipes
        );
        defmt::write!(
            fmt,
            "Auto Acknowledgment_______0b{=0..8}\n",
            self.auto_ack_pipes
        );
        defmt::write!(fmt, "Primary RX________________{=bool}\n", self.is_rx);
        defmt::write!(fmt, "Powered Up________________{=bool}\n", self.powered);
        defmt::write!(fmt, "Device Mode_______________{}\n", self.mode);
        defmt::write!(
            fmt,
            "TX address________________{=[u8]:02X}",
            self.address(&self.tx_address)
        );
        for (pipe, address) in self.rx_addresses.iter().enumerate() {
            defmt::write!(
                fmt,
                "\nPipe {=usize} (open: {=bool}) bound to {=[u8]:02X}",
                pipe,
                self.open_pipes & (1 << pipe) > 0,
                self.address(address)
            );
        }
    }
}

impl<SPI, DO, DELAY> RadioDetails for RadioDevice<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn get_details(&mut self) -> Result<Details, Self::Error> {
        for register in [
            registers::RF_CH,
            registers::RF_SETUP,
            registers::CONFIG,
            registers::SETUP_AW,
            registers::SETUP_RETR,
        ] {
            self.refresh(register)?;
        }
        self.spi_read(1, registers::OBSERVE_TX)?;
        let observe_tx = self._buf[1];
        self.spi_read(1, registers::RPD)?;
        let rpd = self._buf[1] & 1 == 1;
        for register in [
            registers::FIFO_STATUS,
            registers::FEATURE,
            registers::EN_AA,
            registers::DYNPD,
            registers::EN_RXADDR,
        ] {
            self.refresh(register)?;
        }

        let width = self._shadow.address_length();
        let mut tx_address = [0u8; 5];
        self.spi_read(width, registers::TX_ADDR)?;
        tx_address[..width as usize].copy_from_slice(&self._buf[1..=width as usize]);
        let mut rx_addresses = [[0u8; 5]; 6];
        for pipe in 0..6u8 {
            if pipe < 2 {
                self.spi_read(width, registers::RX_ADDR_P0 + pipe)?;
                rx_addresses[pipe as usize][..width as usize]
                    .copy_from_slice(&self._buf[1..=width as usize]);
            } else {
                self.spi_read(1, registers::RX_ADDR_P0 + pipe)?;
                rx_addresses[pipe as usize] = rx_addresses[1];
                rx_addresses[pipe as usize][0] = self._buf[1];
            }
        }

        let shadow = &self._shadow;
        let config = shadow.config;
        Ok(Details {
            channel: shadow.channel,
            data_rate: shadow.rf_setup.data_rate(),
            pa_level: shadow.rf_setup.pa_level(),
            crc_length: config.crc_length(),
            address_length: width,
            payload_length: self._payload_length,
            auto_retry_delay: shadow.setup_retr.delay_us(),
            auto_retry_count: shadow.setup_retr.arc(),
            irq_config: StatusFlags::default()
                .with_rx_dr(config.rx_dr())
                .with_tx_ds(config.tx_ds())
                .with_max_rt(config.max_rt()),
            status: shadow.status,
            last_arc: observe_tx & 0xF,
            lost_packets: observe_tx >> 4,
            rpd,
            tx_fifo: shadow.fifo.state(true),
            rx_fifo: shadow.fifo.state(false),
            reuse_tx: shadow.fifo.tx_reuse(),
            ask_no_ack: shadow.feature.ask_no_ack(),
            ack_payloads: shadow.feature.ack_payloads(),
            dynamic_payloads: shadow.feature.dynamic_payloads(),
            auto_ack_pipes: shadow.en_aa,
            dynamic_payload_pipes: shadow.dynpd,
            open_pipes: shadow.open_pipes,
            is_rx: config.is_rx(),
            powered: config.power(),
            mode: self.derive_mode(),
            tx_address,
            rx_addresses,
        })
    }

    fn print_details(&mut self) -> Result<(), Self::Error> {
        #[cfg(all(feature = "defmt", target_os = "none"))]
        {
            let details = self.get_details()?;
            defmt::println!("{}", details);
        }
        #[cfg(all(feature = "std", not(target_os = "none")))]
        {
            let details = self.get_details()?;
            std::println!("{details}");
        }
        Ok(())
    }
}
