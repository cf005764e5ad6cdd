use serde::{Deserialize, Serialize};

use takeaway_core::{DomainError, DomainResult, Money, ValueObject};

/// A dish on the menu: name + price. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DishRecord")]
pub struct Dish {
    name: String,
    price: Money,
}

/// Unvalidated wire shape of a dish in a menu document.
#[derive(Deserialize)]
struct DishRecord {
    name: String,
    price: Money,
}

impl Dish {
    /// Build a dish. The name is stored exactly as given and must not be blank.
    pub fn new(name: impl Into<String>, price: Money) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("dish name must not be empty"));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl ValueObject for Dish {}

impl TryFrom<DishRecord> for Dish {
    type Error = DomainError;

    fn try_from(record: DishRecord) -> Result<Self, Self::Error> {
        Dish::new(record.name, record.price)
    }
}

impl core::fmt::Display for Dish {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_name_and_price() {
        let dish = Dish::new("Pepperoni pizza", Money::from_minor(890)).unwrap();
        assert_eq!(dish.name(), "Pepperoni pizza");
        assert_eq!(dish.price(), Money::from_minor(890));
    }

    #[test]
    fn rejects_blank_name() {
        let err = Dish::new("   ", Money::from_minor(100)).unwrap_err();
        assert_eq!(err, DomainError::validation("dish name must not be empty"));
    }

    #[test]
    fn name_is_kept_verbatim() {
        let dish = Dish::new(" Lasagne", Money::from_minor(1000)).unwrap();
        assert_eq!(dish.name(), " Lasagne");
    }

    #[test]
    fn free_dishes_are_allowed() {
        let dish = Dish::new("Tap water", Money::ZERO).unwrap();
        assert_eq!(dish.price(), Money::ZERO);
    }

    #[test]
    fn deserializes_through_validation() {
        let dish: Dish = serde_json::from_str(r#"{"name":"Lasagne","price":"10.00"}"#).unwrap();
        assert_eq!(dish.name(), "Lasagne");
        assert_eq!(dish.price(), Money::from_minor(1000));

        assert!(serde_json::from_str::<Dish>(r#"{"name":"","price":"1.00"}"#).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: construction keeps exactly what it was given.
            #[test]
            fn construction_preserves_attributes(
                name in " {0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,40}",
                minor in 0u64..1_000_000
            ) {
                let dish = Dish::new(name.clone(), Money::from_minor(minor)).unwrap();
                prop_assert_eq!(dish.name(), name.as_str());
                prop_assert_eq!(dish.price(), Money::from_minor(minor));
            }
        }
    }
}
