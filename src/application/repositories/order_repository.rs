use crate::domain::{
    aggregates::Order,
    entities::Invoice,
    value_objects::{InvoiceId, OrderId},
    DomainResult,
};

/// Repository trait for managing Order aggregates.
///
/// This trait defines the contract for persisting and retrieving Order
/// aggregates from a data store. Implementations can be backed by different
/// storage mechanisms (in-memory, database, etc.).
///
/// `save` must persist the full aggregate state - the order and all of its
/// currently attached invoices - atomically: a failed save leaves the
/// previously persisted state untouched. Loads always return fully-loaded
/// aggregates; nothing lazy crosses this boundary.
pub trait OrderRepository {
    /// Saves an order and its invoices.
    ///
    /// If an order with the same ID already exists, its persisted state is
    /// replaced. Invoices no longer attached to the order are removed.
    fn save(&mut self, order: &Order) -> DomainResult<()>;

    /// Finds an order by its unique identifier.
    ///
    /// Returns `Ok(Some(order))` with all invoices loaded if found,
    /// `Ok(None)` if not found, or an error if the operation fails.
    fn find_by_id(&self, id: &OrderId) -> DomainResult<Option<Order>>;

    /// Returns all orders in the repository, each with invoices loaded.
    fn find_all(&self) -> DomainResult<Vec<Order>>;

    /// Finds an invoice by its unique identifier, across all orders.
    ///
    /// Returns `Ok(Some(invoice))` with its owning order id set if found,
    /// `Ok(None)` if not found, or an error if the operation fails.
    fn find_invoice_by_id(&self, id: &InvoiceId) -> DomainResult<Option<Invoice>>;
}
