pub mod dto;
pub mod repositories;
pub mod services;

// Re-export key types to avoid naming conflicts
pub use dto::{InvoiceView, OrderView};
pub use repositories::{CustomerDirectory, OrderRepository};
pub use services::{
    BirthdayNotifier, NotificationRunSummary, NotificationSender, OrderService, SendError,
    SenderRegistry,
};
