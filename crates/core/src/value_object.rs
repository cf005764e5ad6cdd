//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values and never change after construction.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Dish {
///     name: String,
///     price: Money,
/// }
///
/// impl ValueObject for Dish {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
