/// A private module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// A private module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const W_ACK_PAYLOAD: u8 = 0xA8;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const REUSE_TX_PL: u8 = 0xE3;
    pub const NOP: u8 = 0xFF;
}

/// A private module to encapsulate bit mnemonics
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// All 6 pipes, as used by EN_AA, EN_RXADDR and DYNPD.
    pub const ALL_PIPES: u8 = 0x3F;

    /// The low nibble of STATUS with an empty RX FIFO and a non-full TX FIFO.
    pub const STATUS_IDLE: u8 = 0x0E;
    pub const STATUS_IDLE_MASK: u8 = 0x0F;
}

/// Timing constraints (in microseconds) from the nRF24L01 datasheet.
pub mod timing {
    /// Settle time for the CSN line before each SPI transaction.
    pub const CSN_SETTLE_US: u32 = 5000;
    /// Crystal oscillator start up (Tpd2stby) with margin.
    pub const POWER_UP_US: u32 = 1500;
    /// Minimum time between CE high and the radio listening (Tstby2a).
    pub const RX_SETTLE_US: u32 = 130;
    /// The CE pulse used by blocking sends (at least 10 us is required).
    pub const TX_PULSE_US: u32 = 1000;
    /// The pause between STATUS polls while waiting on a transmission.
    pub const POLL_INTERVAL_US: u32 = 100;
    /// The default deadline for a blocking send.
    pub const SEND_TIMEOUT_US: u32 = 200_000;
}

/// The highest supported channel (2525 MHz).
pub const MAX_CHANNEL: u8 = 125;

/// Factory default address written to pipe 0 when closed.
pub const PIPE0_DEFAULT_ADDRESS: [u8; 5] = [0xE7; 5];
/// Factory default address written to pipe 1 when closed.
pub const PIPE1_DEFAULT_ADDRESS: [u8; 5] = [0xC2; 5];
/// Factory default address byte for pipes 2-5 is this value plus the pipe number.
pub const PIPE_N_DEFAULT_BASE: u8 = 0xC1;
