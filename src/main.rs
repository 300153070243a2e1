use anyhow::Context;
use chrono::{Datelike, Local};
use orderdesk::application::dto::OrderView;
use orderdesk::application::repositories::CustomerDirectory;
use orderdesk::application::services::{BirthdayNotifier, OrderService, SenderRegistry};
use orderdesk::domain::base::Entity;
use orderdesk::domain::entities::Customer;
use orderdesk::domain::value_objects::{CustomerId, EmailAddress};
use orderdesk::infrastructure::notifications::{EmailSender, SmsSender};
use orderdesk::infrastructure::persistence::{SqliteCustomerDirectory, SqliteOrderRepository};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Order aggregate walkthrough against an in-memory store
    let repository = SqliteOrderRepository::new_in_memory().context("open order store")?;
    let mut orders = OrderService::new(repository);

    let order = orders.create_order()?;
    orders.add_invoice(order.id(), 2, Decimal::from_str("99.99")?)?;
    let updated = orders.add_invoice(order.id(), 1, Decimal::from_str("49.50")?)?;

    let view = OrderView::from(&updated);
    println!("{}", serde_json::to_string_pretty(&view)?);

    let first_invoice = *updated.invoices()[0].id();
    let after_removal = orders.remove_invoice(order.id(), &first_invoice)?;
    tracing::info!(
        order_id = %after_removal.id(),
        invoices = after_removal.invoices().len(),
        total = %after_removal.total(),
        "after removal"
    );

    // Birthday notification run for today, sender picked from the registry
    let mut registry = SenderRegistry::new();
    registry.register("email", || Arc::new(EmailSender));
    registry.register("sms", || Arc::new(SmsSender));

    let sender = registry
        .resolve("email")
        .context("no email sender registered")?;

    let mut directory = SqliteCustomerDirectory::new_in_memory().context("open directory")?;
    let today = Local::now().date_naive();
    directory.save(&Customer::new(
        CustomerId::generate(),
        "Ada".to_string(),
        EmailAddress::new("ada@example.com")?,
        today.with_year(today.year() - 30).unwrap_or(today),
    ))?;

    let notifier = BirthdayNotifier::new(directory, sender);
    let summary = notifier.on_trigger(today).await?;
    tracing::info!(
        matched = summary.matched,
        sent = summary.sent,
        failed = summary.failures.len(),
        "birthday run complete"
    );

    Ok(())
}
