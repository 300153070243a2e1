/// Domain aggregates
use super::base::{AggregateRoot, Entity};
use super::entities::Invoice;
use super::events::OrderEvent;
use super::value_objects::{InvoiceId, OrderId};
use rust_decimal::Decimal;

/// An Order is an aggregate root owning a collection of invoice line items.
/// It maintains referential integrity: every attached invoice's back-reference
/// points at this order. Insertion order is preserved for stable display.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    invoices: Vec<Invoice>,
    pending_events: Vec<OrderEvent>,
}

impl Order {
    /// Create a new empty order
    pub fn new(id: OrderId) -> Self {
        Order {
            id,
            invoices: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Reconstruct an order from persisted state, for repository
    /// implementations. Back-references are fixed up here; no events
    /// are recorded.
    pub fn hydrate(id: OrderId, invoices: Vec<Invoice>) -> Self {
        let mut order = Order::new(id);
        for mut invoice in invoices {
            invoice.attach_to(id);
            order.invoices.push(invoice);
        }
        order
    }

    /// Attach an invoice to this order, setting its back-reference.
    /// Duplicate identities are a caller error and are not checked here.
    pub fn add_invoice(&mut self, mut invoice: Invoice) {
        invoice.attach_to(self.id);
        let invoice_id = *invoice.id();
        self.invoices.push(invoice);
        self.record_event(OrderEvent::InvoiceAdded {
            order_id: self.id,
            invoice_id,
        });
    }

    /// Detach the invoice with the given id, clearing its back-reference.
    /// Returns the detached invoice, or None (no-op) if it is not attached.
    pub fn remove_invoice(&mut self, invoice_id: &InvoiceId) -> Option<Invoice> {
        let position = self.invoices.iter().position(|i| i.id() == invoice_id)?;
        let mut invoice = self.invoices.remove(position);
        invoice.detach();
        self.record_event(OrderEvent::InvoiceRemoved {
            order_id: self.id,
            invoice_id: *invoice_id,
        });
        Some(invoice)
    }

    /// The currently attached invoices, in insertion order
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Look up an attached invoice by id
    pub fn invoice(&self, invoice_id: &InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id() == invoice_id)
    }

    /// Sum of all line totals, exact
    pub fn total(&self) -> Decimal {
        self.invoices.iter().map(|i| i.line_total()).sum()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {
    type Event = OrderEvent;

    fn record_event(&mut self, event: OrderEvent) {
        self.pending_events.push(event);
    }

    fn take_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
