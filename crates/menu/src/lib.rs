//! Menu domain module.
//!
//! Dishes and the restaurant catalog that owns them, implemented purely as
//! deterministic domain logic (no IO beyond reading a menu document).

pub mod catalog;
pub mod dish;
pub mod restaurant;

pub use catalog::MenuCatalog;
pub use dish::Dish;
pub use restaurant::Restaurant;
