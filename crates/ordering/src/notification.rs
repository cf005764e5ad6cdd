//! Outbound notification capability.

use thiserror::Error;

/// Failure reported by a notification transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The transport is missing credentials or other settings.
    #[error("notification channel misconfigured: {0}")]
    Configuration(String),

    /// The message never reached the gateway (network, TLS, IO).
    #[error("notification transport failed: {0}")]
    Transport(String),

    /// The gateway answered but refused the message.
    #[error("notification rejected by gateway (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a text message to a destination address (e.g. a phone number).
pub trait NotificationChannel: Send + Sync {
    fn send_message(&self, destination: &str, text: &str) -> Result<(), DeliveryError>;
}
