//! Ordering domain module.
//!
//! Orders, total verification, delivery-time estimation and confirmation
//! dispatch. Collaborators (menu, clock, notification transport) are injected
//! through the capability traits in this crate and in `takeaway-menu`.

pub mod clock;
pub mod delivery;
pub mod error;
pub mod notification;
pub mod order;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use delivery::DeliveryPolicy;
pub use error::PlaceOrderError;
pub use notification::{DeliveryError, NotificationChannel};
pub use order::{BasketEntry, Order};
pub use service::{OrderingService, PlacedOrder};
