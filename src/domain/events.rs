/// Domain events
use super::base::DomainEvent;
use super::value_objects::{InvoiceId, OrderId};

/// Events produced by Order aggregate mutations
#[derive(Debug, Clone)]
pub enum OrderEvent {
    /// An invoice was attached to the order
    InvoiceAdded {
        order_id: OrderId,
        invoice_id: InvoiceId,
    },
    /// An invoice was detached from the order
    InvoiceRemoved {
        order_id: OrderId,
        invoice_id: InvoiceId,
    },
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::InvoiceAdded { .. } => "InvoiceAdded",
            OrderEvent::InvoiceRemoved { .. } => "InvoiceRemoved",
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            OrderEvent::InvoiceAdded { order_id, .. }
            | OrderEvent::InvoiceRemoved { order_id, .. } => order_id.to_string(),
        }
    }
}
