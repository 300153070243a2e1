pub mod notifications;
pub mod persistence;
