use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use takeaway_observability::LogFormat;
use takeaway_ordering::delivery::{DEFAULT_OFFSET_MINUTES, DEFAULT_TIME_FORMAT};

#[derive(Debug, Parser)]
#[command(name = "takeaway")]
#[command(about = "Browse the menu and order a takeaway.")]
pub struct CommandLine {
    /// JSON menu file; the built-in menu is used when omitted
    #[arg(long, global = true, env = "TAKEAWAY_MENU")]
    pub menu: Option<PathBuf>,

    /// Minutes between placing an order and the promised delivery
    #[arg(long, global = true, env = "TAKEAWAY_DELIVERY_OFFSET_MINUTES", default_value_t = DEFAULT_OFFSET_MINUTES)]
    pub delivery_offset: i64,

    /// strftime pattern for the delivery time in the confirmation
    #[arg(long, global = true, env = "TAKEAWAY_TIME_FORMAT", default_value = DEFAULT_TIME_FORMAT)]
    pub time_format: String,

    /// Print confirmations instead of sending SMS
    #[arg(
        long,
        global = true,
        env = "TAKEAWAY_DRY_RUN",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub dry_run: bool,

    /// Log output: json or pretty
    #[arg(long, global = true, env = "TAKEAWAY_LOG_FORMAT", default_value = "json", value_parser = LogFormat::from_str)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the menu
    #[command(alias = "m")]
    Menu,
    /// Build an order and send the confirmation
    #[command(alias = "o")]
    Order {
        /// Phone number the confirmation is sent to
        #[arg(long)]
        to: String,
        /// Dish and quantity as NAME=QTY (QTY defaults to 1); repeatable
        #[arg(long = "item", required = true)]
        items: Vec<ItemArg>,
    },
}

/// One `--item` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg {
    pub dish: String,
    pub quantity: u32,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dish, quantity) = match s.rsplit_once('=') {
            Some((dish, qty)) => {
                let quantity = qty
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("invalid quantity {qty:?}: {e}"))?;
                (dish, quantity)
            }
            None => (s, 1),
        };
        let dish = dish.trim();
        if dish.is_empty() {
            return Err("dish name must not be empty".to_string());
        }
        Ok(Self {
            dish: dish.to_string(),
            quantity,
        })
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
