//! Capability seam between ordering and whatever holds the menu.

use takeaway_core::DomainResult;

use crate::dish::Dish;

/// Read-only view of a restaurant's menu.
///
/// The ordering service only needs these two capabilities, so tests can swap
/// in a stub catalog without building a full [`crate::Restaurant`].
pub trait MenuCatalog: Send + Sync {
    /// Look up a dish by its exact name.
    ///
    /// Fails with `DomainError::NotFound` when no dish has that name.
    fn find_dish(&self, name: &str) -> DomainResult<&Dish>;

    /// Human-readable menu, one line per dish, without a trailing newline.
    fn format_menu(&self) -> String;
}
