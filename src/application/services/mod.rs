pub mod birthday_notifier;
pub mod order_service;
pub mod sender_registry;

pub use birthday_notifier::{
    BirthdayNotifier, NotificationRunSummary, NotificationSender, SendError,
};
pub use order_service::OrderService;
pub use sender_registry::SenderRegistry;
