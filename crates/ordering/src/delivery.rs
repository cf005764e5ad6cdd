//! Delivery-time estimation.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, TimeDelta};

use takeaway_core::{DomainError, DomainResult};

/// Default lead time between placing an order and its delivery.
pub const DEFAULT_OFFSET_MINUTES: i64 = 60;

/// 12-hour clock, no leading zero on the hour, AM/PM suffix (`6:52PM`).
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M%p";

/// How far ahead of "now" a delivery is promised, and how that time is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPolicy {
    offset: TimeDelta,
    time_format: String,
}

impl DeliveryPolicy {
    /// Build a policy. The offset must be non-negative and the format a valid
    /// `strftime` pattern.
    pub fn new(offset_minutes: i64, time_format: impl Into<String>) -> DomainResult<Self> {
        if offset_minutes < 0 {
            return Err(DomainError::validation(
                "delivery offset must not be negative",
            ));
        }
        let offset = TimeDelta::try_minutes(offset_minutes)
            .ok_or_else(|| DomainError::validation("delivery offset out of range"))?;

        let time_format = time_format.into();
        if time_format.is_empty()
            || StrftimeItems::new(&time_format).any(|item| matches!(item, Item::Error))
        {
            return Err(DomainError::validation(format!(
                "invalid delivery time format: {time_format:?}"
            )));
        }

        Ok(Self {
            offset,
            time_format,
        })
    }

    pub fn offset(&self) -> TimeDelta {
        self.offset
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// `now + offset`.
    pub fn estimate(&self, now: NaiveDateTime) -> DomainResult<NaiveDateTime> {
        now.checked_add_signed(self.offset)
            .ok_or_else(|| DomainError::validation("estimated delivery time out of range"))
    }

    pub fn format(&self, at: NaiveDateTime) -> String {
        at.format(&self.time_format).to_string()
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            offset: TimeDelta::minutes(DEFAULT_OFFSET_MINUTES),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}
