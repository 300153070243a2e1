mod order;

pub use order::{InvoiceView, OrderView};
