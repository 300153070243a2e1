/// Order service: validated, transactional mutation of Order aggregates
use crate::application::repositories::OrderRepository;
use crate::domain::aggregates::Order;
use crate::domain::base::{AggregateRoot, DomainError, DomainEvent, Entity};
use crate::domain::entities::Invoice;
use crate::domain::value_objects::{InvoiceId, OrderId, Quantity, UnitPrice};
use crate::domain::DomainResult;
use rust_decimal::Decimal;

/// Application service mutating Order aggregates through a repository.
///
/// Every mutation validates its inputs before loading or touching any
/// state, then applies the change in memory and persists it with a single
/// `save`. Repository implementations make that save atomic, so a failed
/// call never leaves partial state behind. Conflicting concurrent writes
/// against the same order are the persistence layer's responsibility;
/// no in-process locking happens here.
pub struct OrderService<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        OrderService { repository }
    }

    /// Create an empty order and persist it immediately
    pub fn create_order(&mut self) -> DomainResult<Order> {
        let order = Order::new(OrderId::generate());
        self.repository.save(&order)?;
        tracing::info!(order_id = %order.id(), "order created");
        Ok(order)
    }

    /// Attach a new invoice to an existing order.
    ///
    /// Fails with `Validation` for a non-positive quantity or unit price,
    /// with `NotFound` if the order does not exist. On success the invoice
    /// is persisted as part of the order and the updated aggregate is
    /// returned with all invoices loaded.
    pub fn add_invoice(
        &mut self,
        order_id: &OrderId,
        quantity: i64,
        unit_price: Decimal,
    ) -> DomainResult<Order> {
        // Fail fast, before any load or mutation
        let quantity = Quantity::new(quantity)?;
        let unit_price = UnitPrice::new(unit_price)?;

        let mut order = self.load_order(order_id)?;

        let invoice = Invoice::new(InvoiceId::generate(), quantity, unit_price);
        order.add_invoice(invoice);

        self.repository.save(&order)?;
        self.log_events(&mut order);
        Ok(order)
    }

    /// Detach an invoice from its owning order.
    ///
    /// Fails with `NotFound` if the order or the invoice does not exist,
    /// and with `Validation` if the invoice belongs to a different order.
    /// Removing the same invoice twice yields `NotFound` on the second
    /// call: once detached and saved, the invoice no longer exists.
    pub fn remove_invoice(
        &mut self,
        order_id: &OrderId,
        invoice_id: &InvoiceId,
    ) -> DomainResult<Order> {
        let mut order = self.load_order(order_id)?;

        let invoice = self
            .repository
            .find_invoice_by_id(invoice_id)?
            .ok_or_else(|| DomainError::NotFound(format!("invoice {}", invoice_id)))?;

        match invoice.order_id() {
            Some(owner) if owner == order_id => {}
            _ => {
                return Err(DomainError::Validation(format!(
                    "invoice {} does not belong to order {}",
                    invoice_id, order_id
                )))
            }
        }

        // The ownership check above guarantees the invoice is attached
        let _ = order.remove_invoice(invoice_id);

        self.repository.save(&order)?;
        self.log_events(&mut order);
        Ok(order)
    }

    /// Load an order with all invoices; `NotFound` if absent
    pub fn get_by_id(&self, order_id: &OrderId) -> DomainResult<Order> {
        self.load_order(order_id)
    }

    /// Load every order, each with all invoices
    pub fn get_all(&self) -> DomainResult<Vec<Order>> {
        self.repository.find_all()
    }

    fn load_order(&self, order_id: &OrderId) -> DomainResult<Order> {
        self.repository
            .find_by_id(order_id)?
            .ok_or_else(|| DomainError::NotFound(format!("order {}", order_id)))
    }

    fn log_events(&self, order: &mut Order) {
        for event in order.take_events() {
            tracing::debug!(
                event = event.event_type(),
                aggregate_id = %event.aggregate_id(),
                "domain event"
            );
        }
    }
}
