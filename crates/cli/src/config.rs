//! Application configuration assembled from flags and environment.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;

use takeaway_menu::Restaurant;
use takeaway_observability::LogFormat;
use takeaway_ordering::DeliveryPolicy;

use crate::cli::CommandLine;

/// Menu served when no menu file is configured.
const DEFAULT_MENU: &str = r#"{
    "name": "The Takeaway",
    "dishes": [
        {"name": "Pepperoni pizza", "price": "8.99"},
        {"name": "Margherita pizza", "price": "7.50"},
        {"name": "Lasagne", "price": "10.00"},
        {"name": "Garlic bread", "price": "3.25"},
        {"name": "Tiramisu", "price": "4.80"}
    ]
}"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub menu_path: Option<PathBuf>,
    pub delivery_offset_minutes: i64,
    pub time_format: String,
    pub dry_run: bool,
    pub log_format: LogFormat,
}

impl From<&CommandLine> for AppConfig {
    fn from(cli: &CommandLine) -> Self {
        Self {
            menu_path: cli.menu.clone(),
            delivery_offset_minutes: cli.delivery_offset,
            time_format: cli.time_format.clone(),
            dry_run: cli.dry_run,
            log_format: cli.log_format,
        }
    }
}

impl AppConfig {
    pub fn load_restaurant(&self) -> anyhow::Result<Restaurant> {
        match &self.menu_path {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open menu file {}", path.display()))?;
                Restaurant::from_json(file)
                    .with_context(|| format!("failed to load menu from {}", path.display()))
            }
            None => Restaurant::from_json(DEFAULT_MENU.as_bytes())
                .context("built-in menu is invalid"),
        }
    }

    pub fn delivery_policy(&self) -> anyhow::Result<DeliveryPolicy> {
        DeliveryPolicy::new(self.delivery_offset_minutes, self.time_format.clone())
            .context("invalid delivery settings")
    }
}
