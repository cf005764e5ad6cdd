//! Concrete notification transports for order confirmations.

pub mod console;
pub mod twilio;

pub use console::ConsoleChannel;
pub use twilio::{TwilioConfig, TwilioSmsChannel};
