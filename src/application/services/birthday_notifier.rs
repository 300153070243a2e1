/// Birthday notifier: best-effort batch notification on an external trigger
use crate::application::repositories::CustomerDirectory;
use crate::domain::entities::Customer;
use crate::domain::value_objects::CustomerId;
use crate::domain::DomainResult;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use thiserror::Error;

/// Failure of a single notification send. Isolated per customer inside a
/// trigger run; never propagated out of it.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Recipient rejected: {0}")]
    Rejected(String),
}

/// Send collaborator for the notifier. One call per matched customer per
/// trigger; implementations own their transport and its configuration.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, customer: &Customer) -> Result<(), SendError>;
}

/// Outcome of one trigger run
#[derive(Debug)]
pub struct NotificationRunSummary {
    pub matched: usize,
    pub sent: usize,
    pub failures: Vec<(CustomerId, String)>,
}

impl NotificationRunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Handler invoked by an external periodic trigger.
///
/// On each invocation it looks up every customer whose birth date matches
/// today's month/day and attempts one notification per customer. A failed
/// send is logged and recorded in the summary; it never prevents the
/// remaining customers from being attempted, and there is no retry within
/// the same run. The trigger collaborator guarantees non-overlapping
/// invocations.
pub struct BirthdayNotifier<D: CustomerDirectory> {
    directory: D,
    sender: Arc<dyn NotificationSender>,
}

impl<D: CustomerDirectory> BirthdayNotifier<D> {
    pub fn new(directory: D, sender: Arc<dyn NotificationSender>) -> Self {
        BirthdayNotifier { directory, sender }
    }

    /// Run one notification batch for the given date.
    ///
    /// Directory lookup failures propagate; individual send failures do not.
    pub async fn on_trigger(&self, today: NaiveDate) -> DomainResult<NotificationRunSummary> {
        let customers = self
            .directory
            .find_by_birth_day(today.month(), today.day())?;

        let matched = customers.len();
        tracing::info!(date = %today, matched, "birthday notification run started");

        let mut sent = 0;
        let mut failures = Vec::new();

        for customer in &customers {
            match self.sender.send(customer).await {
                Ok(()) => {
                    tracing::info!(
                        customer_id = %customer.id(),
                        email = customer.email().as_str(),
                        "birthday notification sent"
                    );
                    sent += 1;
                }
                Err(e) => {
                    // Log but don't abort the batch
                    tracing::error!(
                        customer_id = %customer.id(),
                        error = %e,
                        "failed to send birthday notification"
                    );
                    failures.push((*customer.id(), e.to_string()));
                }
            }
        }

        Ok(NotificationRunSummary {
            matched,
            sent,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EmailAddress;
    use std::sync::Mutex;

    struct StubDirectory {
        customers: Vec<Customer>,
    }

    impl CustomerDirectory for StubDirectory {
        fn save(&mut self, customer: &Customer) -> DomainResult<()> {
            self.customers.push(customer.clone());
            Ok(())
        }

        fn find_by_birth_day(&self, month: u32, day: u32) -> DomainResult<Vec<Customer>> {
            Ok(self
                .customers
                .iter()
                .filter(|c| c.birth_date().month() == month && c.birth_date().day() == day)
                .cloned()
                .collect())
        }
    }

    /// Records attempted recipients; fails for names in `fail_for`
    struct RecordingSender {
        attempted: Mutex<Vec<String>>,
        fail_for: Vec<String>,
    }

    #[async_trait]
    impl NotificationSender for RecordingSender {
        async fn send(&self, customer: &Customer) -> Result<(), SendError> {
            self.attempted
                .lock()
                .unwrap()
                .push(customer.name().to_string());
            if self.fail_for.contains(&customer.name().to_string()) {
                return Err(SendError::Transport("connection reset".to_string()));
            }
            Ok(())
        }
    }

    fn customer(name: &str, birth_date: NaiveDate) -> Customer {
        Customer::new(
            CustomerId::generate(),
            name.to_string(),
            EmailAddress::new(format!("{}@example.com", name)).unwrap(),
            birth_date,
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_matches_month_and_day_across_years() {
        let directory = StubDirectory {
            customers: vec![
                customer("ada", date(1990, 6, 15)),
                customer("bo", date(1985, 6, 15)),
                customer("cyd", date(1990, 7, 1)),
            ],
        };
        let sender = Arc::new(RecordingSender {
            attempted: Mutex::new(Vec::new()),
            fail_for: vec![],
        });

        let notifier = BirthdayNotifier::new(directory, sender.clone());
        let summary = notifier.on_trigger(date(2026, 6, 15)).await.unwrap();

        assert_eq!(summary.matched, 2);
        assert_eq!(summary.sent, 2);
        assert!(!summary.has_failures());
        assert_eq!(*sender.attempted.lock().unwrap(), vec!["ada", "bo"]);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let birthday = date(1991, 3, 3);
        let directory = StubDirectory {
            customers: vec![
                customer("first", birthday),
                customer("second", birthday),
                customer("third", birthday),
            ],
        };
        let sender = Arc::new(RecordingSender {
            attempted: Mutex::new(Vec::new()),
            fail_for: vec!["second".to_string()],
        });

        let notifier = BirthdayNotifier::new(directory, sender.clone());
        let summary = notifier.on_trigger(date(2026, 3, 3)).await.unwrap();

        // All three attempted, only the second failed
        assert_eq!(
            *sender.attempted.lock().unwrap(),
            vec!["first", "second", "third"]
        );
        assert_eq!(summary.matched, 3);
        assert_eq!(summary.sent, 2);
        assert_eq!(summary.failures.len(), 1);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_run() {
        let directory = StubDirectory { customers: vec![] };
        let sender = Arc::new(RecordingSender {
            attempted: Mutex::new(Vec::new()),
            fail_for: vec![],
        });

        let notifier = BirthdayNotifier::new(directory, sender);
        let summary = notifier.on_trigger(date(2026, 1, 1)).await.unwrap();

        assert_eq!(summary.matched, 0);
        assert_eq!(summary.sent, 0);
    }
}
