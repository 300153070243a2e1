mod console;

pub use console::{EmailSender, SmsSender};
