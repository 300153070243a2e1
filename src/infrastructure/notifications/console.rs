/// Console notification transports. Stand-ins for real email/SMS
/// delivery: they log the outgoing message and succeed.
use crate::application::services::{NotificationSender, SendError};
use crate::domain::entities::Customer;
use async_trait::async_trait;

/// Email transport that logs instead of speaking SMTP
#[derive(Debug, Default)]
pub struct EmailSender;

#[async_trait]
impl NotificationSender for EmailSender {
    async fn send(&self, customer: &Customer) -> Result<(), SendError> {
        tracing::info!(
            to = customer.email().as_str(),
            "email: Happy birthday, {}!",
            customer.name()
        );
        Ok(())
    }
}

/// SMS transport that logs instead of dialing a gateway
#[derive(Debug, Default)]
pub struct SmsSender;

#[async_trait]
impl NotificationSender for SmsSender {
    async fn send(&self, customer: &Customer) -> Result<(), SendError> {
        tracing::info!(
            customer_id = %customer.id(),
            "sms: Happy birthday, {}!",
            customer.name()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CustomerId, EmailAddress};
    use chrono::NaiveDate;

    fn customer() -> Customer {
        Customer::new(
            CustomerId::generate(),
            "Ada".to_string(),
            EmailAddress::new("ada@example.com").unwrap(),
            NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_email_sender_succeeds() {
        let sender = EmailSender;
        assert!(sender.send(&customer()).await.is_ok());
    }

    #[tokio::test]
    async fn test_sms_sender_succeeds() {
        let sender = SmsSender;
        assert!(sender.send(&customer()).await.is_ok());
    }
}
