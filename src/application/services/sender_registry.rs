/// Registry of notification sender constructors, keyed by transport kind
use super::birthday_notifier::NotificationSender;
use std::collections::HashMap;
use std::sync::Arc;

type SenderFactory = Box<dyn Fn() -> Arc<dyn NotificationSender> + Send + Sync>;

/// Maps a discriminant key ("email", "sms", ...) to a constructor for the
/// matching sender, resolved at call time. An unknown kind resolves to
/// `None`, never a null-like value.
#[derive(Default)]
pub struct SenderRegistry {
    factories: HashMap<String, SenderFactory>,
}

impl SenderRegistry {
    pub fn new() -> Self {
        SenderRegistry {
            factories: HashMap::new(),
        }
    }

    /// Register a constructor for a transport kind. Keys are
    /// case-insensitive; a later registration replaces an earlier one.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn NotificationSender> + Send + Sync + 'static,
    {
        self.factories
            .insert(kind.into().to_lowercase(), Box::new(factory));
    }

    /// Construct the sender registered for the given kind, if any
    pub fn resolve(&self, kind: &str) -> Option<Arc<dyn NotificationSender>> {
        self.factories
            .get(&kind.to_lowercase())
            .map(|factory| factory())
    }

    /// The registered transport kinds
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
