mod cli;
mod config;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;

use cli::{CommandLine, Commands, ItemArg};
use config::AppConfig;
use takeaway_notify::{ConsoleChannel, TwilioConfig, TwilioSmsChannel};
use takeaway_ordering::{NotificationChannel, OrderingService};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = AppConfig::from(&commands);

    takeaway_observability::init(cfg.log_format);

    let restaurant = Arc::new(cfg.load_restaurant()?);
    tracing::debug!(dishes = restaurant.len(), "menu loaded");

    match commands.command {
        Commands::Menu => {
            let service = OrderingService::new(Arc::new(ConsoleChannel::stdout()), restaurant);
            service.print_menu().context("failed to print menu")?;
            Ok(())
        }
        Commands::Order { to, items } => {
            let channel = notification_channel(cfg.dry_run)?;
            let service = OrderingService::new(channel, restaurant)
                .with_delivery_policy(cfg.delivery_policy()?);
            place(&service, &to, &items)
        }
    }
}

fn notification_channel(dry_run: bool) -> anyhow::Result<Arc<dyn NotificationChannel>> {
    if dry_run {
        return Ok(Arc::new(ConsoleChannel::stdout()));
    }
    let config = TwilioConfig::from_env()?;
    Ok(Arc::new(TwilioSmsChannel::new(config)?))
}

fn place(service: &OrderingService, to: &str, items: &[ItemArg]) -> anyhow::Result<()> {
    let mut order = service.create_order(None);
    for item in items {
        order
            .add_item(&item.dish, item.quantity)
            .with_context(|| format!("cannot add {} x {}", item.quantity, item.dish))?;
    }

    writeln!(io::stdout(), "{order}")?;

    let placed = service
        .place_order(order, to)
        .context("order was not placed")?;
    writeln!(
        io::stdout(),
        "Order {} placed; confirmation sent to {}",
        placed.order_id, placed.destination
    )?;
    Ok(())
}
