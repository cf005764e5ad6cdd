use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use takeaway_core::{DomainError, DomainResult};

use crate::catalog::MenuCatalog;
use crate::dish::Dish;

/// A restaurant and its fixed catalog of dishes.
///
/// Dish names are unique keys. The catalog keeps the order the dishes were
/// supplied in, so the rendered menu is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    name: Option<String>,
    dishes: Vec<Dish>,
    index: HashMap<String, usize>,
}

/// Menu document shape (`{"name": ..., "dishes": [{"name", "price"}]}`).
#[derive(Deserialize)]
struct MenuDocument {
    #[serde(default)]
    name: Option<String>,
    dishes: Vec<Dish>,
}

impl Restaurant {
    /// Build a restaurant from its dishes. Duplicate names are rejected.
    pub fn new(dishes: impl IntoIterator<Item = Dish>) -> DomainResult<Self> {
        let mut catalog = Vec::new();
        let mut index = HashMap::new();

        for dish in dishes {
            if index.contains_key(dish.name()) {
                return Err(DomainError::validation(format!(
                    "duplicate dish in catalog: {}",
                    dish.name()
                )));
            }
            index.insert(dish.name().to_string(), catalog.len());
            catalog.push(dish);
        }

        Ok(Self {
            name: None,
            dishes: catalog,
            index,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Load a restaurant from a JSON menu document.
    pub fn from_json(reader: impl Read) -> DomainResult<Self> {
        let document: MenuDocument = serde_json::from_reader(reader)
            .map_err(|e| DomainError::validation(format!("invalid menu document: {e}")))?;

        let restaurant = Self::new(document.dishes)?;
        Ok(match document.name {
            Some(name) => restaurant.with_name(name),
            None => restaurant,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl MenuCatalog for Restaurant {
    fn find_dish(&self, name: &str) -> DomainResult<&Dish> {
        self.index
            .get(name)
            .map(|&i| &self.dishes[i])
            .ok_or_else(|| DomainError::not_found(name))
    }

    fn format_menu(&self) -> String {
        self.dishes
            .iter()
            .map(Dish::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
