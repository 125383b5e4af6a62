//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod rf24;
pub use rf24::{timing::SEND_TIMEOUT_US, Details, Nrf24Error, RadioDevice};

mod config;
pub use config::RadioConfig;
