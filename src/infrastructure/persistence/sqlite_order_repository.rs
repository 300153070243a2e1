use crate::application::repositories::OrderRepository;
use crate::domain::aggregates::Order;
use crate::domain::base::{DomainError, Entity};
use crate::domain::entities::Invoice;
use crate::domain::value_objects::{InvoiceId, OrderId, Quantity, UnitPrice};
use crate::domain::DomainResult;
use rusqlite::{params, Connection, Result as SqliteResult};

/// SQLite-based implementation of the OrderRepository trait
pub struct SqliteOrderRepository {
    conn: Connection,
}

impl SqliteOrderRepository {
    /// Create a new SQLite repository with the given connection
    pub fn new(conn: Connection) -> Self {
        SqliteOrderRepository { conn }
    }

    /// Create a new in-memory SQLite repository (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::initialize_database(&conn)?;
        Ok(SqliteOrderRepository { conn })
    }

    /// Create a new file-based SQLite repository
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;
        super::schema::initialize_database(&conn)?;
        Ok(SqliteOrderRepository { conn })
    }

    /// Save an order and all its invoices in a single transaction.
    /// Invoices no longer attached to the order are removed, matching
    /// orphan-removal semantics: a detached invoice is not independently
    /// meaningful.
    fn save_order_transaction(&mut self, order: &Order) -> SqliteResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO orders (id, created_at, updated_at)
             VALUES (?1, datetime('now'), datetime('now'))
             ON CONFLICT(id) DO UPDATE SET updated_at = datetime('now')",
            params![order.id().to_string()],
        )?;

        // Replace the invoice rows with the current collection
        tx.execute(
            "DELETE FROM invoices WHERE order_id = ?1",
            params![order.id().to_string()],
        )?;

        for (position, invoice) in order.invoices().iter().enumerate() {
            tx.execute(
                "INSERT INTO invoices (id, order_id, quantity, unit_price, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'), datetime('now'))",
                params![
                    invoice.id().to_string(),
                    order.id().to_string(),
                    invoice.quantity().value() as i64,
                    invoice.unit_price().to_string(),
                    position as i64,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Load an order with all its invoices, in position order
    fn load_order(&self, order_id: &OrderId) -> DomainResult<Option<Order>> {
        let exists: Result<String, _> = self.conn.query_row(
            "SELECT id FROM orders WHERE id = ?1",
            params![order_id.to_string()],
            |row| row.get(0),
        );

        match exists {
            Ok(_) => {}
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(persistence_error(e)),
        }

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, quantity, unit_price FROM invoices
                 WHERE order_id = ?1
                 ORDER BY position",
            )
            .map_err(persistence_error)?;

        let rows: Vec<(String, i64, String)> = stmt
            .query_map(params![order_id.to_string()], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(persistence_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(persistence_error)?;

        let mut invoices = Vec::with_capacity(rows.len());
        for (id_str, quantity, unit_price) in rows {
            invoices.push(invoice_from_row(&id_str, Some(*order_id), quantity, &unit_price)?);
        }

        Ok(Some(Order::hydrate(*order_id, invoices)))
    }
}

impl OrderRepository for SqliteOrderRepository {
    fn save(&mut self, order: &Order) -> DomainResult<()> {
        self.save_order_transaction(order).map_err(persistence_error)
    }

    fn find_by_id(&self, id: &OrderId) -> DomainResult<Option<Order>> {
        self.load_order(id)
    }

    fn find_all(&self) -> DomainResult<Vec<Order>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM orders ORDER BY created_at, id")
            .map_err(persistence_error)?;

        let ids: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .map_err(persistence_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(persistence_error)?;

        let mut orders = Vec::with_capacity(ids.len());
        for id_str in ids {
            let order_id = OrderId::parse(&id_str)
                .map_err(|e| DomainError::Persistence(format!("corrupt order id: {}", e)))?;
            if let Some(order) = self.load_order(&order_id)? {
                orders.push(order);
            }
        }

        Ok(orders)
    }

    fn find_invoice_by_id(&self, id: &InvoiceId) -> DomainResult<Option<Invoice>> {
        let row: Result<(String, i64, String), _> = self.conn.query_row(
            "SELECT order_id, quantity, unit_price FROM invoices WHERE id = ?1",
            params![id.to_string()],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        );

        let (order_id_str, quantity, unit_price) = match row {
            Ok(data) => data,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(persistence_error(e)),
        };

        let order_id = OrderId::parse(&order_id_str)
            .map_err(|e| DomainError::Persistence(format!("corrupt order id: {}", e)))?;

        Ok(Some(invoice_from_row(
            &id.to_string(),
            Some(order_id),
            quantity,
            &unit_price,
        )?))
    }
}

fn persistence_error(e: rusqlite::Error) -> DomainError {
    DomainError::Persistence(format!("database error: {}", e))
}

fn invoice_from_row(
    id: &str,
    order_id: Option<OrderId>,
    quantity: i64,
    unit_price: &str,
) -> DomainResult<Invoice> {
    let invoice_id = InvoiceId::parse(id)
        .map_err(|e| DomainError::Persistence(format!("corrupt invoice id: {}", e)))?;
    let quantity = Quantity::new(quantity)
        .map_err(|e| DomainError::Persistence(format!("corrupt quantity: {}", e)))?;
    let unit_price = UnitPrice::parse(unit_price)
        .map_err(|e| DomainError::Persistence(format!("corrupt unit price: {}", e)))?;

    Ok(Invoice::hydrate(invoice_id, order_id, quantity, unit_price))
}
