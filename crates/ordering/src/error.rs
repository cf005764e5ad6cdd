use thiserror::Error;

use takeaway_core::DomainError;

use crate::notification::DeliveryError;

/// Why an order could not be placed.
///
/// Both sides are surfaced unmodified: domain failures happen before any
/// notification is attempted, delivery failures come straight from the channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
